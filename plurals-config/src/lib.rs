// Configuration for plural rule selection

pub mod builder;
pub mod env;
pub mod error;
pub mod loader;
pub mod validation;

pub use builder::ConfigBuilder;
pub use env::{ENV_PREFIX, EnvLoader};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use validation::{ConfigValidator, Validate};

use plurals_core::{PluralRuleType, PluralSelector, TableRules};
use plurals_log::{Format, Level};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest accepted `max_handles`.
pub const MAX_HANDLES_LIMIT: usize = 1 << 20;

/// Settings shared by the library, the C ABI and the CLI.
///
/// ```toml
/// rule_type = "ordinal"
/// rules_file = "cldr/plurals.json"
/// cache_rules = true
/// max_handles = 4096
/// log_level = "info"
/// log_format = "compact"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluralsConfig {
    /// Rule type used when a caller does not pick one
    pub rule_type: PluralRuleType,
    /// CLDR JSON/TOML table consulted before the built-in rules
    pub rules_file: Option<PathBuf>,
    /// Share rule sets between lookups of the same locale
    pub cache_rules: bool,
    /// Most rule set handles the C ABI keeps alive at once
    pub max_handles: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Default for PluralsConfig {
    fn default() -> Self {
        Self {
            rule_type: PluralRuleType::Cardinal,
            rules_file: None,
            cache_rules: true,
            max_handles: 4096,
            log_level: Level::Warn.as_str().to_lowercase(),
            log_format: "pretty".to_string(),
        }
    }
}

impl PluralsConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Defaults overridden by `.env` and `PLURALS_*` variables
    pub fn from_env() -> Result<Self> {
        ConfigBuilder::new().load_dotenv(None).load_env().build()
    }

    /// Defaults overridden by a config file, then by `PLURALS_*` variables
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        ConfigBuilder::new()
            .add_file(path.as_ref())
            .load_env()
            .build()
    }

    pub fn level(&self) -> Level {
        Level::parse(&self.log_level).unwrap_or(Level::Warn)
    }

    pub fn format(&self) -> Format {
        Format::parse(&self.log_format).unwrap_or(Format::Pretty)
    }

    /// Push the logging settings into `plurals-log`
    pub fn apply_logging(&self) {
        plurals_log::set_level(self.level());
        plurals_log::set_format(self.format());
    }

    /// A selector over the configured rule table (if any) and the built-in rules
    pub fn build_selector(&self) -> Result<PluralSelector> {
        let mut builder = PluralSelector::builder()
            .cache(self.cache_rules)
            .rule_type(self.rule_type);

        if let Some(path) = &self.rules_file {
            let table = TableRules::load(path)?;
            plurals_log::info!(
                target: "plurals::config",
                "using rule table {} ({} cardinal, {} ordinal locales)",
                path.display(),
                table.len(PluralRuleType::Cardinal),
                table.len(PluralRuleType::Ordinal)
            );
            builder = builder.provider(table);
        }

        Ok(builder.build())
    }
}

impl Validate for PluralsConfig {
    fn validate(&self) -> Result<()> {
        ConfigValidator::in_range(self.max_handles, 1, MAX_HANDLES_LIMIT, "max_handles")?;

        if Level::parse(&self.log_level).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of trace, debug, info, warn, error, off, got {}",
                self.log_level
            )));
        }
        ConfigValidator::one_of(
            &self.log_format.to_lowercase().as_str(),
            &["pretty", "compact", "json"],
            "log_format",
        )?;

        if let Some(path) = &self.rules_file {
            ConfigValidator::not_empty(&path.to_string_lossy(), "rules_file")?;
            ConfigValidator::has_extension(path, &["json", "toml"], "rules_file")?;
            ConfigValidator::is_file(path, "rules_file")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plurals_core::PluralCategory;

    #[test]
    fn test_default_config_is_valid() {
        let config = PluralsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.level(), Level::Warn);
        assert_eq!(config.format(), Format::Pretty);
    }

    #[test]
    fn test_missing_rules_file_fails_validation() {
        let config = PluralsConfig {
            rules_file: Some(PathBuf::from("/nonexistent/plurals.json")),
            ..PluralsConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_build_selector_with_rules_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plurals.json");
        std::fs::write(
            &path,
            r#"{"supplemental": {"plurals-type-cardinal": {"fr": {"pluralRule-count-one": "n = 1"}}}}"#,
        )
        .unwrap();

        let config = PluralsConfig {
            rules_file: Some(path),
            ..PluralsConfig::default()
        };
        config.validate().unwrap();

        let selector = config.build_selector().unwrap();
        assert_eq!(selector.select("fr", 0).unwrap(), PluralCategory::Other);
        assert_eq!(selector.select("en", 1).unwrap(), PluralCategory::One);
    }

    #[test]
    fn test_build_selector_reports_corrupt_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plurals.json");
        std::fs::write(
            &path,
            r#"{"supplemental": {"plurals-type-cardinal": {"fr": {"pluralRule-count-lots": "n = 1"}}}}"#,
        )
        .unwrap();

        let config = PluralsConfig {
            rules_file: Some(path),
            ..PluralsConfig::default()
        };
        match config.build_selector() {
            Err(ConfigError::Rules(err)) => assert!(err.is_rule_data()),
            other => panic!("expected a rules error, got {:?}", other),
        }
    }

    #[test]
    fn test_build_selector_rule_type() {
        let config = PluralsConfig {
            rule_type: PluralRuleType::Ordinal,
            cache_rules: false,
            ..PluralsConfig::default()
        };
        let selector = config.build_selector().unwrap();
        assert_eq!(selector.select("en", 3).unwrap(), PluralCategory::Few);
        assert_eq!(selector.cached_len(), 0);
    }
}
