//! Locale parsing and resolution.
//!
//! Locale names arrive in ICU/POSIX style (`en_US`), BCP 47 style (`en-US`)
//! or with ICU keywords (`ar_EG@numbers=arab`). Resolution normalizes the
//! name and maps legacy language codes to the codes rule data is indexed
//! under.

use crate::{PluralError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deprecated ISO 639 codes still emitted by some platform locale APIs,
/// mapped to their current codes.
pub const LEGACY_LANGUAGE_ALIASES: [(&str, &str); 3] = [("iw", "he"), ("in", "id"), ("ji", "yi")];

/// A parsed locale identifier.
///
/// ```
/// use plurals_core::Locale;
///
/// let locale: Locale = "zh_hant_tw".parse().unwrap();
/// assert_eq!(locale.language, "zh");
/// assert_eq!(locale.script.as_deref(), Some("Hant"));
/// assert_eq!(locale.region.as_deref(), Some("TW"));
/// assert_eq!(locale.tag(), "zh-Hant-TW");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// Language code, lower case (e.g., "en", "ar", "haw")
    pub language: String,
    /// Optional script, title case (e.g., "Latn", "Hans")
    pub script: Option<String>,
    /// Optional region, upper case (e.g., "US", "419")
    pub region: Option<String>,
    /// Remaining subtags, upper case (e.g., "POSIX")
    pub variants: Vec<String>,
}

impl Locale {
    /// Parse an ICU or BCP 47 locale name.
    ///
    /// Anything after `@` (ICU keywords) or `.` (POSIX charset) is ignored.
    pub fn parse(name: &str) -> Result<Self> {
        let invalid = || PluralError::InvalidLocale(name.to_string());

        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(invalid());
        }
        let base = name.split(['@', '.']).next().unwrap_or_default();
        let mut subtags = base.split(['-', '_']);

        let language = subtags.next().unwrap_or_default();
        if !(2..=8).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let mut locale = Self {
            language: language.to_ascii_lowercase(),
            script: None,
            region: None,
            variants: Vec::new(),
        };

        for subtag in subtags {
            if subtag.is_empty() || subtag.len() > 8 || !subtag.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(invalid());
            }
            let alpha = subtag.bytes().all(|b| b.is_ascii_alphabetic());
            let digits = subtag.bytes().all(|b| b.is_ascii_digit());

            if locale.script.is_none() && locale.region.is_none() && locale.variants.is_empty()
                && subtag.len() == 4 && alpha
            {
                locale.script = Some(title_case(subtag));
            } else if locale.region.is_none() && locale.variants.is_empty()
                && ((subtag.len() == 2 && alpha) || (subtag.len() == 3 && digits))
            {
                locale.region = Some(subtag.to_ascii_uppercase());
            } else {
                locale.variants.push(subtag.to_ascii_uppercase());
            }
        }

        Ok(locale)
    }

    /// BCP 47 style tag (e.g., "zh-Hant-TW").
    pub fn tag(&self) -> String {
        self.join('-')
    }

    /// ICU style key without variants (e.g., "zh_Hant_TW").
    pub fn key(&self) -> String {
        let mut key = self.language.clone();
        for part in [&self.script, &self.region].into_iter().flatten() {
            key.push('_');
            key.push_str(part);
        }
        key
    }

    /// Candidate keys for rule lookup, most specific first.
    pub fn lookup_keys(&self) -> Vec<String> {
        let lang = &self.language;
        let mut keys = Vec::with_capacity(4);
        if let (Some(script), Some(region)) = (&self.script, &self.region) {
            keys.push(format!("{}_{}_{}", lang, script, region));
        }
        if let Some(region) = &self.region {
            keys.push(format!("{}_{}", lang, region));
        }
        if let Some(script) = &self.script {
            keys.push(format!("{}_{}", lang, script));
        }
        keys.push(lang.clone());
        keys
    }

    fn join(&self, sep: char) -> String {
        let mut tag = self.language.clone();
        let parts = [&self.script, &self.region].into_iter().flatten();
        for part in parts.chain(self.variants.iter()) {
            tag.push(sep);
            tag.push_str(part);
        }
        tag
    }
}

fn title_case(s: &str) -> String {
    let mut out = s.to_ascii_lowercase();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl FromStr for Locale {
    type Err = PluralError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

/// A locale name after validation and legacy alias rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedLocale {
    requested: String,
    locale: Locale,
    alias: Option<&'static str>,
}

impl ResolvedLocale {
    /// The name exactly as the caller supplied it.
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// The normalized locale used for lookup.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Normalized language code.
    pub fn language(&self) -> &str {
        &self.locale.language
    }

    /// The legacy code that was rewritten, if any.
    pub fn legacy_alias(&self) -> Option<&'static str> {
        self.alias
    }

    /// ICU style key (e.g., "he_IL").
    pub fn key(&self) -> String {
        self.locale.key()
    }

    /// Candidate keys for rule lookup, most specific first.
    pub fn lookup_keys(&self) -> Vec<String> {
        self.locale.lookup_keys()
    }
}

impl fmt::Display for ResolvedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Validate a locale name and rewrite legacy language codes.
///
/// The rewrite only fires when the language subtag is exactly one of the
/// legacy two-letter codes; `"inh"` or `"english"` pass through untouched.
/// Unknown but well-formed locales resolve successfully.
///
/// ```
/// use plurals_core::resolve;
///
/// let legacy = resolve("iw_IL").unwrap();
/// let current = resolve("he_IL").unwrap();
/// assert_eq!(legacy.locale(), current.locale());
/// assert_eq!(legacy.legacy_alias(), Some("iw"));
/// ```
pub fn resolve(name: &str) -> Result<ResolvedLocale> {
    if name.is_empty() {
        return Err(PluralError::InvalidLocale(String::new()));
    }

    let mut locale = Locale::parse(name)?;
    let alias = LEGACY_LANGUAGE_ALIASES
        .iter()
        .find(|(legacy, _)| locale.language == *legacy)
        .map(|(legacy, current)| {
            locale.language = (*current).to_string();
            *legacy
        });

    if let Some(legacy) = alias {
        plurals_log::debug!(
            target: "plurals::locale",
            "rewrote legacy language code {} in {:?} to {}",
            legacy,
            name,
            locale.language
        );
    }

    Ok(ResolvedLocale {
        requested: name.to_string(),
        locale,
        alias,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse_forms() {
        let en = Locale::parse("en").unwrap();
        assert_eq!(en.language, "en");
        assert!(en.region.is_none());

        let en_us = Locale::parse("en_US").unwrap();
        assert_eq!(en_us.region.as_deref(), Some("US"));
        assert_eq!(Locale::parse("en-us").unwrap(), en_us);

        let sr = Locale::parse("sr_Latn_RS").unwrap();
        assert_eq!(sr.script.as_deref(), Some("Latn"));
        assert_eq!(sr.region.as_deref(), Some("RS"));

        let es = Locale::parse("es-419").unwrap();
        assert_eq!(es.region.as_deref(), Some("419"));

        let posix = Locale::parse("en_US_POSIX").unwrap();
        assert_eq!(posix.variants, vec!["POSIX".to_string()]);
        assert_eq!(posix.key(), "en_US");
    }

    #[test]
    fn test_locale_parse_ignores_keywords_and_charset() {
        let ar = Locale::parse("ar_EG@numbers=arab").unwrap();
        assert_eq!(ar.key(), "ar_EG");

        let de = Locale::parse("de_DE.UTF-8").unwrap();
        assert_eq!(de.key(), "de_DE");
    }

    #[test]
    fn test_locale_parse_rejects_malformed() {
        for bad in ["", "e", "en_", "_US", "en__US", "12", "en US", "en\n", "toolonglanguage", "en_US!"] {
            assert!(Locale::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_lookup_keys_most_specific_first() {
        let zh = Locale::parse("zh_Hant_TW").unwrap();
        assert_eq!(zh.lookup_keys(), vec!["zh_Hant_TW", "zh_TW", "zh_Hant", "zh"]);

        let pt = Locale::parse("pt-PT").unwrap();
        assert_eq!(pt.lookup_keys(), vec!["pt_PT", "pt"]);
    }

    #[test]
    fn test_resolve_legacy_aliases() {
        for (legacy, current) in LEGACY_LANGUAGE_ALIASES {
            let resolved = resolve(legacy).unwrap();
            assert_eq!(resolved.language(), current);
            assert_eq!(resolved.legacy_alias(), Some(legacy));
        }

        let iw = resolve("iw_IL").unwrap();
        assert_eq!(iw.key(), "he_IL");
        assert_eq!(iw.requested(), "iw_IL");

        let in_id = resolve("in-ID").unwrap();
        assert_eq!(in_id.key(), "id_ID");
    }

    #[test]
    fn test_resolve_no_prefix_collisions() {
        for name in ["english", "inh", "iwx", "jiv", "ind"] {
            let resolved = resolve(name).unwrap();
            assert_eq!(resolved.language(), name);
            assert_eq!(resolved.legacy_alias(), None);
        }
    }

    #[test]
    fn test_resolve_unknown_is_not_an_error() {
        let resolved = resolve("xx_ZZ").unwrap();
        assert_eq!(resolved.key(), "xx_ZZ");
    }

    #[test]
    fn test_resolve_rejects_empty() {
        assert!(matches!(resolve(""), Err(PluralError::InvalidLocale(_))));
    }
}
