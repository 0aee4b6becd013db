//! CLI command implementations.

pub mod check;
pub mod inspect;
pub mod select;

use colored::Colorize;
use serde::Serialize;

use crate::error::CliResult;

pub(crate) fn success(msg: &str) {
    println!("  {} {}", "✓".green().bold(), msg.green());
}

pub(crate) fn warn(msg: &str) {
    println!("  {} {}", "⚠".yellow().bold(), msg.yellow());
}

pub(crate) fn info(msg: &str) {
    println!("  {} {}", "→".cyan(), msg);
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Title line used by the text output of every command.
pub(crate) fn heading(title: &str) {
    println!();
    println!("  {}", title.bright_white().bold());
    println!();
}
