//! Select command - classify values under a locale's rules.

use colored::Colorize;
use plurals_core::{PluralCategory, PluralOperands, PluralRuleType, PluralSelector};
use serde::Serialize;

use super::{heading, print_json, warn};
use crate::error::{CliError, CliResult};

#[derive(Debug, Serialize)]
struct Selection<'a> {
    value: &'a str,
    category: PluralCategory,
}

#[derive(Debug, Serialize)]
struct SelectReport<'a> {
    locale: String,
    rule_type: PluralRuleType,
    fallback: bool,
    results: Vec<Selection<'a>>,
}

/// Parse every value first so that a typo fails the whole command before
/// anything is printed.
fn parse_values(values: &[String]) -> CliResult<Vec<PluralOperands>> {
    values
        .iter()
        .map(|value| {
            value
                .parse::<PluralOperands>()
                .map_err(|e| CliError::InvalidArgument(e.to_string()))
        })
        .collect()
}

pub fn run(
    selector: &PluralSelector,
    locale: &str,
    values: &[String],
    rule_type: PluralRuleType,
    json: bool,
) -> CliResult<()> {
    let rules = selector.rules_for(locale, rule_type)?;
    let operands = parse_values(values)?;

    let results: Vec<Selection<'_>> = values
        .iter()
        .zip(&operands)
        .map(|(value, operands)| Selection {
            value: value.as_str(),
            category: rules.select(operands),
        })
        .collect();

    if json {
        return print_json(&SelectReport {
            locale: rules.locale().key(),
            rule_type,
            fallback: rules.is_fallback(),
            results,
        });
    }

    heading(&format!("{} ({})", rules.locale().key(), rule_type));
    if rules.is_fallback() {
        warn(&format!(
            "No {} rules for {}, every value is \"other\"",
            rule_type,
            rules.locale().requested()
        ));
        println!();
    }

    let width = values.iter().map(String::len).max().unwrap_or(0);
    for selection in &results {
        println!(
            "    {:>width$}  {}  {}",
            selection.value,
            "→".dimmed(),
            selection.category.as_str().cyan().bold(),
            width = width
        );
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values_rejects_garbage() {
        let values = vec!["1".to_string(), "2.50".to_string(), "-3".to_string()];
        assert_eq!(parse_values(&values).unwrap().len(), 3);

        let values = vec!["1".to_string(), "one".to_string()];
        assert!(matches!(parse_values(&values), Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_unknown_locale_is_reported_not_rejected() {
        let selector = PluralSelector::new();
        let values = vec!["1".to_string()];
        assert!(run(&selector, "xx_ZZ", &values, PluralRuleType::Cardinal, true).is_ok());
        assert!(run(&selector, "", &values, PluralRuleType::Cardinal, true).is_err());
    }
}
