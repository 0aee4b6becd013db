//! Randomized checks of selection invariants

use plurals_core::{
    BuiltinRules, LEGACY_LANGUAGE_ALIASES, PluralCategory, PluralOperands, PluralRuleType,
    PluralRules, PluralSelector, RuleProvider,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ITERATIONS: usize = 2_000;

fn random_decimal(rng: &mut StdRng) -> String {
    let int_part = rng.random_range(0..100_000u64);
    match rng.random_range(0..3) {
        0 => int_part.to_string(),
        1 => format!("{}.{}", int_part, rng.random_range(0..1_000u32)),
        _ => format!("{}.{:03}", int_part, rng.random_range(0..1_000u32)),
    }
}

#[test]
fn test_selection_stays_within_declared_categories() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for rule_type in [PluralRuleType::Cardinal, PluralRuleType::Ordinal] {
        for locale in BuiltinRules.locales(rule_type) {
            let rules = PluralRules::try_new(&locale, rule_type).unwrap();
            let categories = rules.categories();
            assert_eq!(categories.last(), Some(&PluralCategory::Other));

            for _ in 0..50 {
                let value = random_decimal(&mut rng);
                let category = rules.select_str(&value).unwrap();
                assert!(
                    categories.contains(&category),
                    "{} {} selected {} for {}",
                    rule_type,
                    locale,
                    category,
                    value
                );
                assert!(category.ordinal() <= 5);
            }
        }
    }
}

#[test]
fn test_selection_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let selector = PluralSelector::builder().cache(false).build();
    for _ in 0..ITERATIONS {
        let value: i64 = rng.random();
        let first = selector.select("pl", value).unwrap();
        let second = selector.select("pl", value).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_legacy_aliases_agree_with_current_codes() {
    let mut rng = StdRng::seed_from_u64(42);
    for (legacy, current) in LEGACY_LANGUAGE_ALIASES {
        let old = PluralRules::for_locale(legacy).unwrap();
        let new = PluralRules::for_locale(current).unwrap();
        for _ in 0..ITERATIONS {
            let value = random_decimal(&mut rng);
            assert_eq!(
                old.select_str(&value).unwrap(),
                new.select_str(&value).unwrap(),
                "{} vs {} at {}",
                legacy,
                current,
                value
            );
        }
    }
}

#[test]
fn test_unknown_locale_always_other() {
    let mut rng = StdRng::seed_from_u64(99);
    let rules = PluralRules::for_locale("xx_ZZ").unwrap();
    for _ in 0..ITERATIONS {
        let value: u64 = rng.random();
        assert_eq!(rules.select(value), PluralCategory::Other);
    }
}

#[test]
fn test_integer_and_string_operands_agree() {
    let mut rng = StdRng::seed_from_u64(3);
    let rules = PluralRules::for_locale("ru").unwrap();
    for _ in 0..ITERATIONS {
        let value = rng.random_range(0..10_000_000u64);
        let from_string: PluralOperands = value.to_string().parse().unwrap();
        assert_eq!(rules.select(value), rules.select(from_string));
    }
}

#[test]
fn test_wide_integers_follow_their_last_digits() {
    let mut rng = StdRng::seed_from_u64(4);
    let ordinal = PluralRules::try_new("en", PluralRuleType::Ordinal).unwrap();
    let lv = PluralRules::for_locale("lv").unwrap();
    for _ in 0..ITERATIONS {
        let value = rng.random_range(1u64 << 53..u64::MAX);
        let low = value % 1000;
        assert_eq!(ordinal.select(value), ordinal.select(low), "{}", value);
        assert_eq!(lv.select(value), lv.select(low + 1000), "{}", value);
        let from_string: PluralOperands = value.to_string().parse().unwrap();
        assert_eq!(lv.select(value), lv.select(from_string), "{}", value);
    }
}
