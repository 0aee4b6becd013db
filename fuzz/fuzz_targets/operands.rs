//! Fuzz target for operand decomposition.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use plurals_core::{PluralOperands, PluralRules};

/// Arbitrary numeric inputs.
#[derive(Debug, Arbitrary)]
struct FuzzOperands {
    /// Raw decimal literal
    raw: String,
    /// Float input
    float: f64,
    /// Integer input
    integer: i64,
}

fuzz_target!(|data: FuzzOperands| {
    let rules = PluralRules::for_locale("lv").expect("built-in rules");

    if let Ok(operands) = data.raw.parse::<PluralOperands>() {
        let _ = rules.select(operands);
    }

    if let Ok(operands) = PluralOperands::try_from(data.float) {
        let _ = rules.select(operands);
    }

    // Integers and their decimal spelling must agree, at any width
    let integer = data.integer;
    let from_int = rules.select(integer);
    let from_str = rules
        .select_str(&integer.to_string())
        .expect("integer literal must parse");
    assert_eq!(from_int, from_str);
});
