//! Plural rule sets and category selection.

use crate::locale::{ResolvedLocale, resolve};
use crate::provider::{BuiltinRules, RuleDefinitions, RuleProvider};
use crate::{Condition, PluralCategory, PluralError, PluralOperands, PluralRuleType, Result};
use std::fmt;

/// One `category: condition` pair of a rule set.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralRule {
    category: PluralCategory,
    condition: Condition,
}

impl PluralRule {
    pub fn category(&self) -> PluralCategory {
        self.category
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }
}

impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.condition)
    }
}

/// Where a locale's rule data was found.
pub(crate) struct RuleMatch<'a> {
    /// Index into the provider list
    pub provider: usize,
    /// Lookup key that matched
    pub key: String,
    pub definitions: RuleDefinitions<'a>,
}

/// The plural rules of one locale and rule type.
///
/// Rule sets are immutable once built and safe to share between threads.
///
/// ```
/// use plurals_core::{PluralCategory, PluralRules};
///
/// let rules = PluralRules::for_locale("en_US").unwrap();
/// assert_eq!(rules.select(1), PluralCategory::One);
/// assert_eq!(rules.select(2), PluralCategory::Other);
/// assert_eq!(rules.select_str("1.0").unwrap(), PluralCategory::Other);
/// ```
#[derive(Debug, Clone)]
pub struct PluralRules {
    locale: ResolvedLocale,
    rule_type: PluralRuleType,
    rules: Vec<PluralRule>,
    source: Option<String>,
}

impl PluralRules {
    /// Cardinal rules for a locale from the built-in CLDR tables.
    pub fn for_locale(name: &str) -> Result<Self> {
        Self::try_new(name, PluralRuleType::Cardinal)
    }

    /// Rules of the given type from the built-in CLDR tables.
    ///
    /// Unknown but well-formed locales get a rule set that always selects
    /// [`PluralCategory::Other`].
    pub fn try_new(name: &str, rule_type: PluralRuleType) -> Result<Self> {
        Self::with_provider(name, rule_type, &BuiltinRules)
    }

    /// Rules of the given type from a specific provider.
    pub fn with_provider(
        name: &str,
        rule_type: PluralRuleType,
        provider: &dyn RuleProvider,
    ) -> Result<Self> {
        Self::build(resolve(name)?, rule_type, &[provider])
    }

    /// Look the locale up in each provider in turn. The first provider with
    /// data for any of the locale's keys wins, most specific key first.
    pub(crate) fn build(
        locale: ResolvedLocale,
        rule_type: PluralRuleType,
        providers: &[&dyn RuleProvider],
    ) -> Result<Self> {
        match Self::find(&locale, rule_type, providers)? {
            Some(found) => Self::from_match(locale, rule_type, providers, &found),
            None => Ok(Self::fallback(locale, rule_type)),
        }
    }

    /// The provider and key whose data a locale uses, without parsing it.
    pub(crate) fn find<'a>(
        locale: &ResolvedLocale,
        rule_type: PluralRuleType,
        providers: &[&'a dyn RuleProvider],
    ) -> Result<Option<RuleMatch<'a>>> {
        let keys = locale.lookup_keys();
        for (index, provider) in providers.iter().copied().enumerate() {
            for key in &keys {
                let definitions = provider.lookup(key, rule_type).map_err(|e| match e {
                    PluralError::RuleData { .. } => e,
                    other => PluralError::rule_data(locale.key(), other.to_string()),
                })?;
                if let Some(definitions) = definitions {
                    return Ok(Some(RuleMatch {
                        provider: index,
                        key: key.clone(),
                        definitions,
                    }));
                }
            }
        }

        plurals_log::debug!(
            target: "plurals::rules",
            "no {} rules for {:?}, falling back to other-only",
            rule_type,
            locale.requested()
        );
        Ok(None)
    }

    pub(crate) fn from_match(
        locale: ResolvedLocale,
        rule_type: PluralRuleType,
        providers: &[&dyn RuleProvider],
        found: &RuleMatch<'_>,
    ) -> Result<Self> {
        let source = providers[found.provider].name();
        plurals_log::trace!(
            target: "plurals::rules",
            "{} {} rules for {:?} from {} under {}",
            found.definitions.len(),
            rule_type,
            locale.requested(),
            source,
            found.key
        );
        Self::from_definitions(locale, rule_type, source, &found.definitions)
    }

    /// Build a rule set from condition text.
    ///
    /// `other` entries are ignored. A condition that fails to parse or a
    /// category listed twice is a [`PluralError::RuleData`] error.
    pub fn from_definitions(
        locale: ResolvedLocale,
        rule_type: PluralRuleType,
        source: &str,
        definitions: &[(PluralCategory, &str)],
    ) -> Result<Self> {
        let mut rules: Vec<PluralRule> = Vec::with_capacity(definitions.len());
        for (category, text) in definitions {
            if *category == PluralCategory::Other {
                continue;
            }
            if rules.iter().any(|rule| rule.category == *category) {
                return Err(PluralError::rule_data(
                    locale.key(),
                    format!("{} category defined twice in {}", category, source),
                ));
            }
            let condition = Condition::parse(text).map_err(|e| {
                PluralError::rule_data(
                    locale.key(),
                    format!("{} rule {:?} from {}: {}", category, text, source, e),
                )
            })?;
            rules.push(PluralRule {
                category: *category,
                condition,
            });
        }
        rules.sort_by_key(|rule| rule.category);

        Ok(Self {
            locale,
            rule_type,
            rules,
            source: Some(source.to_string()),
        })
    }

    /// A rule set that selects `other` for every value.
    pub fn fallback(locale: ResolvedLocale, rule_type: PluralRuleType) -> Self {
        Self {
            locale,
            rule_type,
            rules: Vec::new(),
            source: None,
        }
    }

    /// Category of a value.
    ///
    /// Rules are tested zero, one, two, few, many; the first match wins and
    /// `other` is returned when nothing matches.
    pub fn select(&self, value: impl Into<PluralOperands>) -> PluralCategory {
        let operands = value.into();
        self.rules
            .iter()
            .find(|rule| rule.condition.matches(&operands))
            .map_or(PluralCategory::Other, |rule| rule.category)
    }

    /// Category of an integer.
    pub fn select_int(&self, value: i64) -> PluralCategory {
        self.select(value)
    }

    /// Category of a float, using its shortest decimal representation.
    pub fn select_f64(&self, value: f64) -> Result<PluralCategory> {
        Ok(self.select(PluralOperands::try_from(value)?))
    }

    /// Category of a decimal string such as `"1.50"`.
    pub fn select_str(&self, value: &str) -> Result<PluralCategory> {
        Ok(self.select(value.parse::<PluralOperands>()?))
    }

    /// Categories this rule set can produce, ending with `other`.
    pub fn categories(&self) -> Vec<PluralCategory> {
        self.rules
            .iter()
            .map(|rule| rule.category)
            .chain(std::iter::once(PluralCategory::Other))
            .collect()
    }

    /// The individual rules in evaluation order.
    pub fn rules(&self) -> &[PluralRule] {
        &self.rules
    }

    pub fn locale(&self) -> &ResolvedLocale {
        &self.locale
    }

    pub fn rule_type(&self) -> PluralRuleType {
        self.rule_type
    }

    /// Name of the provider the rules came from; `None` for the fallback.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Whether no rule data was found for the locale.
    pub fn is_fallback(&self) -> bool {
        self.source.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableRules;
    use PluralCategory::*;

    fn cardinal(locale: &str) -> PluralRules {
        PluralRules::for_locale(locale).unwrap()
    }

    fn ordinal(locale: &str) -> PluralRules {
        PluralRules::try_new(locale, PluralRuleType::Ordinal).unwrap()
    }

    #[test]
    fn test_english_cardinal() {
        let en = cardinal("en");
        assert_eq!(en.select(1), One);
        assert_eq!(en.select(1).ordinal(), 1);
        assert_eq!(en.select(2), Other);
        assert_eq!(en.select(2).ordinal(), 5);
        assert_eq!(en.select(0), Other);
        assert_eq!(en.select_str("1.0").unwrap(), Other);
        assert_eq!(en.categories(), vec![One, Other]);
        assert!(!en.is_fallback());
        assert_eq!(en.source(), Some("builtin"));
    }

    #[test]
    fn test_english_ordinal() {
        let en = ordinal("en");
        let expected = [
            (1, One),
            (2, Two),
            (3, Few),
            (4, Other),
            (11, Other),
            (12, Other),
            (13, Other),
            (21, One),
            (22, Two),
            (23, Few),
            (101, One),
            (111, Other),
        ];
        for (value, category) in expected {
            assert_eq!(en.select(value), category, "{}", value);
        }
    }

    #[test]
    fn test_modulus_is_exact_beyond_f64_precision() {
        let en = ordinal("en");
        // 2^53 + 1 is not representable as f64
        assert_eq!(en.select_int(9_007_199_254_740_993), Few);
        assert_eq!(en.select_int(9_007_199_254_740_991), One);
        assert_eq!(en.select_int(i64::MAX), Other);
        assert_eq!(en.select_str("123456789012345678901").unwrap(), One);
        assert_eq!(en.select_str("123456789012345678902").unwrap(), Two);
        assert_eq!(en.select_str("123456789012345678911").unwrap(), Other);

        let lv = cardinal("lv");
        assert_eq!(lv.select_str("100000000000000000001").unwrap(), One);
        assert_eq!(lv.select_str("100000000000000000010").unwrap(), Zero);
    }

    #[test]
    fn test_unknown_locale_falls_back_to_other() {
        let xx = cardinal("xx_ZZ");
        assert!(xx.is_fallback());
        assert_eq!(xx.source(), None);
        assert_eq!(xx.categories(), vec![Other]);
        for value in [0, 1, 2, 5, 11, 100, 1_000_000] {
            assert_eq!(xx.select(value), Other);
        }
    }

    #[test]
    fn test_known_locale_without_distinctions() {
        let ja = cardinal("ja");
        assert!(!ja.is_fallback());
        assert_eq!(ja.categories(), vec![Other]);
        assert_eq!(ja.select(1), Other);
    }

    #[test]
    fn test_legacy_alias_matches_current_code() {
        let iw = cardinal("iw");
        let he = cardinal("he");
        for value in 0..=200 {
            assert_eq!(iw.select(value), he.select(value), "{}", value);
        }
        assert_eq!(iw.select(2), Two);
        assert_eq!(iw.locale().legacy_alias(), Some("iw"));
    }

    #[test]
    fn test_region_falls_back_to_language() {
        let en_us = cardinal("en-US");
        assert_eq!(en_us.select(1), One);

        // pt_PT has its own entry; pt_BR uses pt.
        let pt_pt = cardinal("pt_PT");
        let pt_br = cardinal("pt_BR");
        assert_eq!(pt_pt.select(0), Other);
        assert_eq!(pt_br.select(0), One);
    }

    #[test]
    fn test_invalid_locale_is_input_error() {
        assert!(matches!(PluralRules::for_locale(""), Err(PluralError::InvalidLocale(_))));
        assert!(matches!(PluralRules::for_locale("e n"), Err(PluralError::InvalidLocale(_))));
    }

    #[test]
    fn test_corrupt_rule_text_is_rule_data_error() {
        let mut table = TableRules::new("corrupt");
        table
            .insert("en", PluralRuleType::Cardinal, [(One, "i = = 1")])
            .unwrap();
        let err = PluralRules::with_provider("en", PluralRuleType::Cardinal, &table).unwrap_err();
        assert!(err.is_rule_data(), "{}", err);
    }

    #[test]
    fn test_duplicate_category_is_rule_data_error() {
        let locale = resolve("en").unwrap();
        let err = PluralRules::from_definitions(
            locale,
            PluralRuleType::Cardinal,
            "test",
            &[(One, "n = 1"), (One, "n = 2")],
        )
        .unwrap_err();
        assert!(err.is_rule_data());
    }

    #[test]
    fn test_definitions_are_sorted_and_other_ignored() {
        let locale = resolve("xx").unwrap();
        let rules = PluralRules::from_definitions(
            locale,
            PluralRuleType::Cardinal,
            "test",
            &[(Few, "n = 3"), (Other, "anything"), (One, "n = 1")],
        )
        .unwrap();
        assert_eq!(rules.categories(), vec![One, Few, Other]);
        assert_eq!(rules.rules()[0].to_string(), "one: n = 1");
    }

    #[test]
    fn test_select_float_and_string() {
        let fr = cardinal("fr");
        assert_eq!(fr.select_f64(1.5).unwrap(), One);
        assert_eq!(fr.select_f64(2.0).unwrap(), Other);
        assert_eq!(fr.select_str("1c6").unwrap(), Many);
        assert_eq!(fr.select(1_000_000), Many);
        assert!(fr.select_f64(f64::NAN).is_err());
        assert!(fr.select_str("one").is_err());
    }

    #[test]
    fn test_negative_values_use_absolute_value() {
        let ru = cardinal("ru");
        assert_eq!(ru.select_int(-1), One);
        assert_eq!(ru.select_int(-22), Few);
        assert_eq!(ru.select_int(-25), Many);
        assert_eq!(ru.select_int(i64::MIN), ru.select(9_223_372_036_854_775_808u64));
    }
}
