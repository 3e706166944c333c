mod command;
mod session_runner;
#[cfg(test)]
mod tests;

pub use command::{Action, Command};
pub use session_runner::SessionRunner;
