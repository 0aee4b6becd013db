//! Fuzz target for the plural condition parser.
//!
//! Anything that parses must print in a form that parses back to the same
//! condition, and must evaluate without panicking.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use plurals_core::{Condition, PluralOperands};

/// Arbitrary condition and values to evaluate it against.
#[derive(Debug, Arbitrary)]
struct FuzzCondition {
    /// Raw condition text
    text: String,
    /// Integer to evaluate a parsed condition against
    value: i64,
    /// Decimal literal to evaluate against
    decimal: String,
}

fuzz_target!(|data: FuzzCondition| {
    let Ok(condition) = Condition::parse(&data.text) else {
        return;
    };

    let printed = condition.to_string();
    let reparsed = Condition::parse(&printed).expect("canonical form must parse");
    assert_eq!(printed, reparsed.to_string());

    let _ = condition.matches(&PluralOperands::from(data.value));
    if let Ok(operands) = data.decimal.parse::<PluralOperands>() {
        let _ = condition.matches(&operands);
    }
});
