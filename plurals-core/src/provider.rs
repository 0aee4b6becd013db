//! Sources of plural rule text.
//!
//! A [`RuleProvider`] maps a locale key (`"pt_PT"`, `"en"`) and a rule type to
//! the CLDR condition text for each category. Providers only hand out text;
//! parsing happens when a [`PluralRules`](crate::PluralRules) is built.

use crate::data::{self, RuleGroup};
use crate::{Locale, PluralCategory, PluralError, PluralRuleType, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

/// `(category, condition)` pairs for one locale. `other` is never listed.
pub type RuleDefinitions<'a> = Vec<(PluralCategory, &'a str)>;

/// A source of plural rule text.
pub trait RuleProvider: Send + Sync + fmt::Debug {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Rule text for an exact locale key, or `None` if this provider has no
    /// data for it.
    fn lookup(&self, key: &str, rule_type: PluralRuleType) -> Result<Option<RuleDefinitions<'_>>>;

    /// Every locale key this provider has data for, sorted.
    fn locales(&self, rule_type: PluralRuleType) -> Vec<String>;
}

type GroupIndex = HashMap<&'static str, &'static RuleGroup>;

fn index(groups: &'static [RuleGroup]) -> GroupIndex {
    groups
        .iter()
        .flat_map(|group| group.locales.iter().map(move |locale| (*locale, group)))
        .collect()
}

static CARDINAL_INDEX: Lazy<GroupIndex> = Lazy::new(|| index(data::CARDINAL));
static ORDINAL_INDEX: Lazy<GroupIndex> = Lazy::new(|| index(data::ORDINAL));

/// The CLDR tables compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRules;

impl BuiltinRules {
    /// CLDR release the built-in tables were taken from.
    pub const CLDR_VERSION: &'static str = "44";

    fn index(rule_type: PluralRuleType) -> &'static GroupIndex {
        match rule_type {
            PluralRuleType::Cardinal => &*CARDINAL_INDEX,
            PluralRuleType::Ordinal => &*ORDINAL_INDEX,
        }
    }
}

impl RuleProvider for BuiltinRules {
    fn name(&self) -> &str {
        "builtin"
    }

    fn lookup(&self, key: &str, rule_type: PluralRuleType) -> Result<Option<RuleDefinitions<'_>>> {
        Ok(Self::index(rule_type).get(key).map(|group| group.rules.to_vec()))
    }

    fn locales(&self, rule_type: PluralRuleType) -> Vec<String> {
        let mut locales: Vec<String> = Self::index(rule_type).keys().map(|k| k.to_string()).collect();
        locales.sort();
        locales
    }
}

const COUNT_PREFIX: &str = "pluralRule-count-";

#[derive(Debug, Deserialize)]
struct TableFile {
    supplemental: Supplemental,
}

#[derive(Debug, Default, Deserialize)]
struct Supplemental {
    #[serde(rename = "plurals-type-cardinal", default)]
    cardinal: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(rename = "plurals-type-ordinal", default)]
    ordinal: BTreeMap<String, BTreeMap<String, String>>,
}

type Table = HashMap<String, Vec<(PluralCategory, String)>>;

/// Rule tables loaded at runtime, in the CLDR JSON `plurals.json` /
/// `ordinals.json` shape:
///
/// ```json
/// {
///   "supplemental": {
///     "plurals-type-cardinal": {
///       "en": {
///         "pluralRule-count-one": "i = 1 and v = 0 @integer 1",
///         "pluralRule-count-other": " @integer 0, 2~16"
///       }
///     }
///   }
/// }
/// ```
///
/// TOML files use the same shape. Locale keys are normalized on load, so
/// `"pt-PT"` is found under `pt_PT`.
#[derive(Debug, Clone, Default)]
pub struct TableRules {
    name: String,
    cardinal: Table,
    ordinal: Table,
}

impl TableRules {
    /// An empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load a table from a `.json` or `.toml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let name = path.display().to_string();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        let table = match extension.as_deref() {
            Some("json") => Self::from_json_str(&name, &content)?,
            Some("toml") => Self::from_toml_str(&name, &content)?,
            _ => return Err(PluralError::UnsupportedFormat(name)),
        };

        plurals_log::debug!(
            target: "plurals::provider",
            "loaded {} cardinal and {} ordinal locales from {}",
            table.cardinal.len(),
            table.ordinal.len(),
            name
        );
        Ok(table)
    }

    /// Parse a table from CLDR JSON.
    pub fn from_json_str(name: impl Into<String>, content: &str) -> Result<Self> {
        let file: TableFile = serde_json::from_str(content)?;
        Self::from_file(name.into(), file)
    }

    /// Parse a table from TOML.
    pub fn from_toml_str(name: impl Into<String>, content: &str) -> Result<Self> {
        let file: TableFile = toml::from_str(content)?;
        Self::from_file(name.into(), file)
    }

    fn from_file(name: String, file: TableFile) -> Result<Self> {
        let mut table = Self::new(name);
        for (rule_type, locales) in [
            (PluralRuleType::Cardinal, file.supplemental.cardinal),
            (PluralRuleType::Ordinal, file.supplemental.ordinal),
        ] {
            for (locale, counts) in locales {
                let mut rules = Vec::with_capacity(counts.len());
                for (count, condition) in counts {
                    let keyword = count.strip_prefix(COUNT_PREFIX).ok_or_else(|| {
                        PluralError::rule_data(&locale, format!("unexpected key {:?}", count))
                    })?;
                    let category: PluralCategory = keyword.parse().map_err(|_| {
                        PluralError::rule_data(&locale, format!("unknown plural category {:?}", keyword))
                    })?;
                    rules.push((category, condition));
                }
                table.insert(&locale, rule_type, rules)?;
            }
        }
        Ok(table)
    }

    /// Add or replace the rules of one locale.
    ///
    /// `other` entries are dropped since `other` is always implicit.
    pub fn insert<S: Into<String>>(
        &mut self,
        locale: &str,
        rule_type: PluralRuleType,
        rules: impl IntoIterator<Item = (PluralCategory, S)>,
    ) -> Result<()> {
        let key = Locale::parse(locale)
            .map_err(|_| PluralError::rule_data(locale, "invalid locale key"))?
            .key();

        let mut rules: Vec<(PluralCategory, String)> = rules
            .into_iter()
            .filter(|(category, _)| *category != PluralCategory::Other)
            .map(|(category, condition)| (category, condition.into()))
            .collect();
        rules.sort_by_key(|(category, _)| *category);

        self.table_mut(rule_type).insert(key, rules);
        Ok(())
    }

    /// Number of locales with rules of the given type.
    pub fn len(&self, rule_type: PluralRuleType) -> usize {
        self.table(rule_type).len()
    }

    /// Whether the table holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.cardinal.is_empty() && self.ordinal.is_empty()
    }

    fn table(&self, rule_type: PluralRuleType) -> &Table {
        match rule_type {
            PluralRuleType::Cardinal => &self.cardinal,
            PluralRuleType::Ordinal => &self.ordinal,
        }
    }

    fn table_mut(&mut self, rule_type: PluralRuleType) -> &mut Table {
        match rule_type {
            PluralRuleType::Cardinal => &mut self.cardinal,
            PluralRuleType::Ordinal => &mut self.ordinal,
        }
    }
}

impl RuleProvider for TableRules {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, key: &str, rule_type: PluralRuleType) -> Result<Option<RuleDefinitions<'_>>> {
        Ok(self.table(rule_type).get(key).map(|rules| {
            rules
                .iter()
                .map(|(category, condition)| (*category, condition.as_str()))
                .collect()
        }))
    }

    fn locales(&self, rule_type: PluralRuleType) -> Vec<String> {
        let mut locales: Vec<String> = self.table(rule_type).keys().cloned().collect();
        locales.sort();
        locales
    }
}
