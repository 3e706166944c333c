mod teller_session;

use std::fmt;
use std::fmt::{Display, Formatter};

pub use teller_session::Session;

/// Whether a displayed message came from a success or a failure branch.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MessageStatus {
    Success,
    Failure
}

impl Display for MessageStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MessageStatus::Success => write!(formatter, "success"),
            MessageStatus::Failure => write!(formatter, "failure")
        }
    }
}

/// The message currently shown to the user.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub status: MessageStatus
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), status: MessageStatus::Success }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self { text: text.into(), status: MessageStatus::Failure }
    }

    pub fn is_success(&self) -> bool {
        self.status == MessageStatus::Success
    }
}
