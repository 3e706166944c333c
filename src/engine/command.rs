use serde::Deserialize;

/// The buttons a user can press.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Deposit,
    Withdraw,
    Check,
    Clear
}

/// A single row of a session script.
///
/// `amount` is what the user typed before pressing the button. When it is absent
/// (empty column) the pending input from earlier rows is used as is.
#[derive(Debug, Clone, Deserialize)]
pub struct Command {
    pub action: Action,
    #[serde(default)]
    pub amount: Option<String>
}
