use super::{Action, Command, SessionRunner};

use anyhow::Result;
use std::fs::File;
use std::io::Write;

use tempfile::NamedTempFile;

use crate::session::Session;

fn create_temporary_script(commands: &[(&str, &str)]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "action,amount")?;

    for (action, amount) in commands {
        writeln!(file, "{},{}", action, amount)?;
    }

    Ok(file)
}

fn run_script(script: &str) -> Result<(SessionRunner, String)> {
    let mut runner = SessionRunner::new(Session::new());
    let mut output = Vec::new();

    runner.run(script.as_bytes(), &mut output)?;

    Ok((runner, String::from_utf8(output)?))
}

#[test]
fn test_runner_applies_script_from_file_in_order() -> Result<()> {
    let script = create_temporary_script(&[
        ("deposit", "200"),
        ("withdraw", "1500"),
        ("withdraw", "200"),
        ("check", ""),
    ])?;

    let mut runner = SessionRunner::new(Session::new());
    let mut output = Vec::new();
    let applied = runner.run(File::open(script.path())?, &mut output)?;

    assert_eq!(applied, 4);

    let output = String::from_utf8(output)?;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines, vec![
        "[success] Successfully deposited $200.00. Your new balance is $1200.00.",
        "[failure] Insufficient funds. Your current balance is $1200.00.",
        "[success] Successfully withdrew $200.00. Your new balance is $1000.00.",
        "[success] Your current balance is $1000.00.",
    ]);

    assert_eq!(runner.session().ledger().transactions().len(), 2);

    Ok(())
}

#[test]
fn test_runner_skips_malformed_records() -> Result<()> {
    let (runner, output) = run_script("action,amount\ndeposit,10\ntransfer,5\ndeposit,5\n")?;

    assert_eq!(output.lines().count(), 2);
    assert_eq!(runner.session().ledger().balance().to_string(), "1015.00");

    Ok(())
}

#[test]
fn test_runner_reuses_pending_input_when_amount_is_missing() -> Result<()> {
    let (runner, output) = run_script("action,amount\nwithdraw,abc\ndeposit\n")?;

    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines, vec![
        "[failure] Please enter a valid positive amount for withdrawal.",
        "[failure] Please enter a valid positive amount for deposit.",
    ]);
    assert_eq!(runner.session().input(), "abc");

    Ok(())
}

#[test]
fn test_runner_writes_nothing_after_clear() -> Result<()> {
    let (runner, output) = run_script("action,amount\ncheck,\nclear,\n")?;

    assert_eq!(output.lines().count(), 1);
    assert!(runner.session().message().is_none());

    Ok(())
}

#[test]
fn test_apply_single_command() -> Result<()> {
    let mut runner = SessionRunner::new(Session::new());
    let mut output = Vec::new();

    runner.apply(&Command { action: Action::Deposit, amount: Some("0.5".to_string()) }, &mut output)?;

    assert_eq!(String::from_utf8(output)?, "[success] Successfully deposited $0.50. Your new balance is $1000.50.\n");

    Ok(())
}

#[test]
fn test_summary_lists_history_most_recent_first() -> Result<()> {
    let (runner, _) = run_script("action,amount\ndeposit,200\nwithdraw,50.5\ndeposit,-1\n")?;

    let mut summary = Vec::new();
    runner.write_summary(&mut summary)?;

    let summary = String::from_utf8(summary)?;
    let mut lines = summary.lines();

    assert_eq!(lines.next(), Some("balance,1149.50"));
    assert_eq!(lines.next(), Some("id,kind,amount,timestamp"));

    let rows: Vec<Vec<String>> = lines
        .map(|line| line.splitn(4, ',').map(str::to_string).collect())
        .collect();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][..3], ["2", "Withdraw", "50.50"]);
    assert_eq!(rows[1][..3], ["1", "Deposit", "200.00"]);
    assert!(rows.iter().all(|row| row[3].starts_with('"') && row[3].contains(", ")));

    Ok(())
}

#[test]
fn test_summary_of_untouched_session_has_empty_history() -> Result<()> {
    let runner = SessionRunner::new(Session::new());

    let mut summary = Vec::new();
    runner.write_summary(&mut summary)?;

    assert_eq!(String::from_utf8(summary)?, "balance,1000.00\nid,kind,amount,timestamp\n");

    Ok(())
}

#[test]
fn test_runner_reports_oversized_and_separated_amounts_as_failures() -> Result<()> {
    let (runner, output) = run_script("action,amount\ndeposit,1e27\nwithdraw,1_000\n")?;

    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines, vec![
        "[failure] Amount is too large to deposit. Your current balance is $1000.00.",
        "[failure] Please enter a valid positive amount for withdrawal.",
    ]);
    assert!(runner.session().ledger().transactions().is_empty());

    Ok(())
}
