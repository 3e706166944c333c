use std::io::{Read, Write};

use anyhow::Result;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::{debug, error, info};

use crate::engine::{Action, Command};
use crate::session::Session;

/// Drives a [`Session`] from a scripted stream of user actions.
///
/// Commands are applied one at a time, in input order, and each displayed message is
/// written out as `[success] ...` or `[failure] ...`.
pub struct SessionRunner {
    session: Session
}

impl SessionRunner {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reads `action,amount` CSV records from `reader` and applies them.
    ///
    /// Malformed records are logged and skipped. Returns the number of commands applied.
    pub fn run<R: Read, W: Write>(&mut self, reader: R, writer: &mut W) -> Result<usize> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut applied = 0;
        let mut rejected = 0;

        for result in reader.deserialize::<Command>() {
            match result {
                Ok(command) => {
                    self.apply(&command, writer)?;
                    applied += 1;

                    if self.session.message().is_some_and(|message| !message.is_success()) {
                        rejected += 1;
                    }
                }
                Err(error) => {
                    error!("Command deserialization error: {error}");
                }
            }
        }

        writer.flush()?;
        info!("Applied {applied} commands ({rejected} rejected), final balance {}", self.session.ledger().balance());

        Ok(applied)
    }

    /// Applies one command and writes the resulting message, if any.
    pub fn apply<W: Write>(&mut self, command: &Command, writer: &mut W) -> Result<()> {
        if let Some(amount) = &command.amount {
            self.session.set_input(amount.as_str());
        }

        debug!("Applying [{:?}] with pending input {:?}", command.action, self.session.input());

        match command.action {
            Action::Deposit => {
                self.session.deposit();
            }
            Action::Withdraw => {
                self.session.withdraw();
            }
            Action::Check => {
                self.session.check_balance();
            }
            Action::Clear => self.session.clear()
        }

        if let Some(message) = self.session.message() {
            writeln!(writer, "[{}] {}", message.status, message.text)?;
        }

        Ok(())
    }

    /// Writes the final balance followed by the history table, most recent first.
    pub fn write_summary<W: Write>(&self, mut writer: W) -> Result<()> {
        let ledger = self.session.ledger();

        writeln!(writer, "balance,{}", ledger.balance())?;

        let mut history = WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        history.write_record(["id", "kind", "amount", "timestamp"])?;

        for transaction in ledger.history() {
            history.serialize(transaction)?;
        }

        history.flush()?;

        Ok(())
    }
}
