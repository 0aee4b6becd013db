//! Check command - validate a CLDR rule table before shipping it.

use colored::Colorize;
use plurals_core::{PluralRuleType, PluralRules, RuleProvider, TableRules};
use serde::Serialize;
use std::path::Path;

use super::{heading, print_json, success};
use crate::error::{CliError, CliResult};

#[derive(Debug, Serialize)]
struct Failure {
    locale: String,
    rule_type: PluralRuleType,
    error: String,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    file: String,
    cardinal: usize,
    ordinal: usize,
    failures: Vec<Failure>,
}

/// Build every rule set in the table and collect the ones that fail.
fn check_table(table: &TableRules) -> (usize, usize, Vec<Failure>) {
    let mut failures = Vec::new();
    let mut counts = [0usize; 2];

    for (slot, rule_type) in [PluralRuleType::Cardinal, PluralRuleType::Ordinal]
        .into_iter()
        .enumerate()
    {
        for locale in table.locales(rule_type) {
            counts[slot] += 1;
            if let Err(e) = PluralRules::with_provider(&locale, rule_type, table) {
                failures.push(Failure {
                    locale,
                    rule_type,
                    error: e.to_string(),
                });
            }
        }
    }
    (counts[0], counts[1], failures)
}

pub fn run(file: &Path, json: bool, quiet: bool) -> CliResult<()> {
    let table = TableRules::load(file)?;
    let (cardinal, ordinal, failures) = check_table(&table);
    let report = CheckReport {
        file: file.display().to_string(),
        cardinal,
        ordinal,
        failures,
    };

    if json {
        print_json(&report)?;
    } else if !quiet || !report.failures.is_empty() {
        heading(&format!("Checking {}", report.file));
        for failure in &report.failures {
            println!(
                "    {} {} ({}): {}",
                "✗".red().bold(),
                failure.locale,
                failure.rule_type,
                failure.error
            );
        }
        if report.failures.is_empty() {
            success(&format!(
                "{} cardinal and {} ordinal rule sets are valid",
                report.cardinal, report.ordinal
            ));
            println!();
        }
    }

    if report.cardinal + report.ordinal == 0 {
        return Err(CliError::Validation(format!(
            "{} contains no plural rules",
            report.file
        )));
    }
    match report.failures.len() {
        0 => Ok(()),
        n => Err(CliError::Validation(format!(
            "{} of {} rule sets in {} are invalid",
            n,
            report.cardinal + report.ordinal,
            report.file
        ))),
    }
}
