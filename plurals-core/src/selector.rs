//! Locale-aware category selection over a chain of rule providers.

use crate::locale::resolve;
use crate::provider::{BuiltinRules, RuleProvider};
use crate::{PluralCategory, PluralOperands, PluralRuleType, PluralRules, Result};
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// What a cached rule set was built from. Keys only name data the providers
/// hold, so the cache stays bounded however many locale names are seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    /// Data found under `key` in the provider at `provider`
    Rules {
        provider: usize,
        key: String,
        rule_type: PluralRuleType,
    },
    /// No provider had data
    Fallback(PluralRuleType),
}

/// Resolves locale names to shared [`PluralRules`].
///
/// Providers are consulted in the order they were added; the built-in CLDR
/// tables come last unless disabled. Built rule sets are cached per provider
/// entry and rule type, so `"iw"`, `"he"` and `"he_IL"` share one instance,
/// as do all locales without rule data. A shared set's
/// [`locale`](PluralRules::locale) is the one it was first built for.
///
/// ```
/// use plurals_core::{PluralCategory, PluralSelector};
///
/// let selector = PluralSelector::new();
/// assert_eq!(selector.select("ru", 3).unwrap(), PluralCategory::Few);
/// assert_eq!(selector.select("ru", 5).unwrap(), PluralCategory::Many);
/// ```
pub struct PluralSelector {
    providers: Vec<Arc<dyn RuleProvider>>,
    rule_type: PluralRuleType,
    cache: Option<RwLock<HashMap<CacheKey, Arc<PluralRules>>>>,
}

impl PluralSelector {
    /// Selector over the built-in tables with caching enabled.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> PluralSelectorBuilder {
        PluralSelectorBuilder::default()
    }

    /// Rule type used by [`rules`](Self::rules) and [`select`](Self::select).
    pub fn rule_type(&self) -> PluralRuleType {
        self.rule_type
    }

    /// Rules for a locale and rule type.
    pub fn rules_for(&self, name: &str, rule_type: PluralRuleType) -> Result<Arc<PluralRules>> {
        let locale = resolve(name)?;
        let providers = self.provider_refs();

        let Some(cache) = &self.cache else {
            return Ok(Arc::new(PluralRules::build(locale, rule_type, &providers)?));
        };

        let found = PluralRules::find(&locale, rule_type, &providers)?;
        let key = match &found {
            Some(found) => CacheKey::Rules {
                provider: found.provider,
                key: found.key.clone(),
                rule_type,
            },
            None => CacheKey::Fallback(rule_type),
        };
        if let Some(rules) = cache.read().get(&key) {
            return Ok(Arc::clone(rules));
        }

        let rules = Arc::new(match &found {
            Some(found) => PluralRules::from_match(locale, rule_type, &providers, found)?,
            None => PluralRules::fallback(locale, rule_type),
        });
        let mut cache = cache.write();
        Ok(Arc::clone(cache.entry(key).or_insert(rules)))
    }

    /// Rules for a locale using the selector's default rule type.
    pub fn rules(&self, name: &str) -> Result<Arc<PluralRules>> {
        self.rules_for(name, self.rule_type)
    }

    /// Category of a value in a locale, using the default rule type.
    pub fn select(&self, name: &str, value: impl Into<PluralOperands>) -> Result<PluralCategory> {
        Ok(self.rules(name)?.select(value))
    }

    /// Every locale key any provider has data for.
    pub fn supported_locales(&self, rule_type: PluralRuleType) -> Vec<String> {
        let locales: BTreeSet<String> = self
            .providers
            .iter()
            .flat_map(|provider| provider.locales(rule_type))
            .collect();
        locales.into_iter().collect()
    }

    /// Names of the configured providers, in lookup order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|provider| provider.name()).collect()
    }

    /// Number of cached rule sets.
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.read().len())
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.write().clear();
        }
    }

    fn provider_refs(&self) -> Vec<&dyn RuleProvider> {
        self.providers.iter().map(|provider| provider.as_ref()).collect()
    }
}

impl Default for PluralSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PluralSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluralSelector")
            .field("providers", &self.provider_names())
            .field("rule_type", &self.rule_type)
            .field("cached", &self.cached_len())
            .finish()
    }
}

/// Builder for [`PluralSelector`].
pub struct PluralSelectorBuilder {
    providers: Vec<Arc<dyn RuleProvider>>,
    builtin: bool,
    cache: bool,
    rule_type: PluralRuleType,
}

impl Default for PluralSelectorBuilder {
    fn default() -> Self {
        Self {
            providers: Vec::new(),
            builtin: true,
            cache: true,
            rule_type: PluralRuleType::Cardinal,
        }
    }
}

impl PluralSelectorBuilder {
    /// Add a provider, consulted after the ones already added.
    pub fn provider(mut self, provider: impl RuleProvider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Add a shared provider.
    pub fn shared_provider(mut self, provider: Arc<dyn RuleProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Leave the built-in CLDR tables out of the chain.
    pub fn without_builtin(mut self) -> Self {
        self.builtin = false;
        self
    }

    /// Enable or disable the rule set cache.
    pub fn cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    /// Default rule type for [`PluralSelector::select`].
    pub fn rule_type(mut self, rule_type: PluralRuleType) -> Self {
        self.rule_type = rule_type;
        self
    }

    pub fn build(self) -> PluralSelector {
        let mut providers = self.providers;
        if self.builtin {
            providers.push(Arc::new(BuiltinRules));
        }
        PluralSelector {
            providers,
            rule_type: self.rule_type,
            cache: self.cache.then(|| RwLock::new(HashMap::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableRules;
    use std::thread;

    fn french_as_english() -> TableRules {
        let mut table = TableRules::new("override");
        table
            .insert("fr", PluralRuleType::Cardinal, [(PluralCategory::One, "i = 1 and v = 0")])
            .unwrap();
        table
    }

    #[test]
    fn test_select_with_builtin_rules() {
        let selector = PluralSelector::new();
        assert_eq!(selector.select("en", 1).unwrap(), PluralCategory::One);
        assert_eq!(selector.select("en", 2).unwrap(), PluralCategory::Other);
        assert_eq!(selector.select("xx_ZZ", 1).unwrap(), PluralCategory::Other);
        assert!(selector.select("", 1).is_err());
    }

    #[test]
    fn test_cache_shares_aliases() {
        let selector = PluralSelector::new();
        let iw = selector.rules("iw_IL").unwrap();
        let he = selector.rules("he_IL").unwrap();
        assert!(Arc::ptr_eq(&iw, &he));
        assert_eq!(selector.cached_len(), 1);

        selector.rules_for("he_IL", PluralRuleType::Ordinal).unwrap();
        assert_eq!(selector.cached_len(), 2);

        selector.clear_cache();
        assert_eq!(selector.cached_len(), 0);
    }

    #[test]
    fn test_cache_is_bounded_by_rule_data() {
        let selector = PluralSelector::new();
        let first = selector.rules("xx_ZZ").unwrap();
        for name in ["aa_AA", "qq", "zz_Latn_ZZ", "xy_XY"] {
            let rules = selector.rules(name).unwrap();
            assert!(rules.is_fallback());
            assert!(Arc::ptr_eq(&first, &rules));
        }
        assert_eq!(selector.cached_len(), 1);

        // Regions without data of their own share the language entry
        let en = selector.rules("en").unwrap();
        for name in ["en_US", "en_GB", "en_Latn_AU", "en_ZZ"] {
            assert!(Arc::ptr_eq(&en, &selector.rules(name).unwrap()), "{}", name);
        }
        assert_eq!(selector.cached_len(), 2);

        selector.rules_for("xx_ZZ", PluralRuleType::Ordinal).unwrap();
        assert_eq!(selector.cached_len(), 3);
    }

    #[test]
    fn test_cache_keeps_providers_apart() {
        let selector = PluralSelector::builder().provider(french_as_english()).build();
        let fr = selector.rules("fr").unwrap();
        let ru = selector.rules("ru").unwrap();
        assert_eq!(fr.source(), Some("override"));
        assert_eq!(ru.source(), Some("builtin"));
        assert!(Arc::ptr_eq(&fr, &selector.rules("fr_CA").unwrap()));
        assert_eq!(selector.cached_len(), 2);
    }

    #[test]
    fn test_cache_disabled() {
        let selector = PluralSelector::builder().cache(false).build();
        let a = selector.rules("en").unwrap();
        let b = selector.rules("en").unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(selector.cached_len(), 0);
    }

    #[test]
    fn test_provider_overrides_builtin() {
        let selector = PluralSelector::builder().provider(french_as_english()).build();
        assert_eq!(selector.provider_names(), vec!["override", "builtin"]);

        // Built-in fr treats 0 as one; the override does not.
        assert_eq!(selector.select("fr", 0).unwrap(), PluralCategory::Other);
        assert_eq!(selector.rules("fr_CA").unwrap().source(), Some("override"));
        // Locales the override lacks still reach the built-in tables.
        assert_eq!(selector.select("ru", 2).unwrap(), PluralCategory::Few);
    }

    #[test]
    fn test_without_builtin() {
        let selector = PluralSelector::builder()
            .provider(french_as_english())
            .without_builtin()
            .build();
        assert_eq!(selector.supported_locales(PluralRuleType::Cardinal), vec!["fr"]);
        assert!(selector.rules("en").unwrap().is_fallback());
    }

    #[test]
    fn test_default_rule_type() {
        let selector = PluralSelector::builder().rule_type(PluralRuleType::Ordinal).build();
        assert_eq!(selector.rule_type(), PluralRuleType::Ordinal);
        assert_eq!(selector.select("en", 2).unwrap(), PluralCategory::Two);
        assert_eq!(selector.select("en", 3).unwrap(), PluralCategory::Few);
    }

    #[test]
    fn test_supported_locales_merges_providers() {
        let selector = PluralSelector::builder().provider(french_as_english()).build();
        let locales = selector.supported_locales(PluralRuleType::Cardinal);
        assert!(locales.contains(&"fr".to_string()));
        assert!(locales.contains(&"en".to_string()));
        assert_eq!(locales.iter().filter(|l| *l == "fr").count(), 1);
    }

    #[test]
    fn test_concurrent_lookups() {
        let selector = Arc::new(PluralSelector::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let selector = Arc::clone(&selector);
                thread::spawn(move || {
                    for value in 0..200u32 {
                        let locale = if n % 2 == 0 { "pl" } else { "cs" };
                        selector.select(locale, value).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(selector.cached_len(), 2);
    }
}
