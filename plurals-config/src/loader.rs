// Configuration file loaders

use crate::{ConfigError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
    Env,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "env" => Some(FileFormat::Env),
            _ => None,
        }
    }

    /// Detect the format of a path. `.env` files have no extension, only a name.
    pub fn from_path(path: &Path) -> Option<Self> {
        if path.file_name().and_then(|name| name.to_str()) == Some(".env") {
            return Some(FileFormat::Env);
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Configuration file loader
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Auto-detect format from the file name
    pub fn auto(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path).ok_or_else(|| {
            ConfigError::LoadError(format!("Unsupported config format: {}", path.display()))
        })?;
        Ok(Self::new(format))
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Load a file into a flat key/value map
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Map<String, Value>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        self.parse(&content)
    }

    /// Parse configuration from string
    pub fn parse(&self, content: &str) -> Result<Map<String, Value>> {
        let value = match self.format {
            FileFormat::Json => self.parse_json(content)?,
            FileFormat::Toml => self.parse_toml(content)?,
            FileFormat::Env => return Ok(self.parse_env(content)),
        };

        match value {
            Value::Object(map) => Ok(map),
            other => Err(ConfigError::ParseError(format!(
                "expected a table of settings, found {}",
                other
            ))),
        }
    }

    fn parse_json(&self, content: &str) -> Result<Value> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))
    }

    fn parse_toml(&self, content: &str) -> Result<Value> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;

        serde_json::to_value(toml_value)
            .map_err(|e| ConfigError::ParseError(format!("TOML conversion error: {}", e)))
    }

    /// `KEY=value` lines; keys and values are kept as written. Values are
    /// typed once the keys are mapped to fields, see [`env_value`].
    fn parse_env(&self, content: &str) -> Map<String, Value> {
        let mut map = Map::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                map.insert(key.to_string(), Value::String(value.to_string()));
            }
        }

        map
    }
}

/// Type a raw environment string for the setting `field`.
///
/// Only boolean and integer settings are coerced. Every other field keeps
/// the raw string, so `log_level=off` or `rules_file=2024` stay strings.
/// A value that does not coerce is kept as a string and rejected when the
/// configuration is deserialized.
pub fn env_value(field: &str, raw: &str) -> Value {
    match field {
        "cache_rules" => match raw.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Value::Bool(true),
            "false" | "no" | "off" | "0" => Value::Bool(false),
            _ => Value::String(raw.to_string()),
        },
        "max_handles" => match raw.parse::<u64>() {
            Ok(n) => Value::from(n),
            Err(_) => Value::String(raw.to_string()),
        },
        _ => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let loader = ConfigLoader::new(FileFormat::Json);
        let json = r#"{"rule_type": "ordinal", "max_handles": 64}"#;

        let map = loader.parse(json).unwrap();
        assert_eq!(map["rule_type"], "ordinal");
        assert_eq!(map["max_handles"], 64);
    }

    #[test]
    fn test_parse_json_rejects_non_table() {
        let loader = ConfigLoader::new(FileFormat::Json);
        assert!(matches!(loader.parse("[1, 2]"), Err(ConfigError::ParseError(_))));
        assert!(matches!(loader.parse("{"), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_parse_toml() {
        let loader = ConfigLoader::new(FileFormat::Toml);
        let toml = r#"
            rules_file = "cldr/plurals.json"
            cache_rules = false
        "#;

        let map = loader.parse(toml).unwrap();
        assert_eq!(map["rules_file"], "cldr/plurals.json");
        assert_eq!(map["cache_rules"], false);
    }

    #[test]
    fn test_parse_env() {
        let loader = ConfigLoader::new(FileFormat::Env);
        let env = r#"
            PLURALS_RULE_TYPE=ordinal
            PLURALS_MAX_HANDLES=42
            # Comment
            export PLURALS_LOG_FORMAT="json"
            PLURALS_CACHE_RULES=off
        "#;

        let map = loader.parse(env).unwrap();
        assert_eq!(map["PLURALS_RULE_TYPE"], "ordinal");
        assert_eq!(map["PLURALS_MAX_HANDLES"], "42");
        assert_eq!(map["PLURALS_LOG_FORMAT"], "json");
        assert_eq!(map["PLURALS_CACHE_RULES"], "off");
    }

    #[test]
    fn test_env_value_is_typed_by_field() {
        assert_eq!(env_value("cache_rules", "off"), Value::Bool(false));
        assert_eq!(env_value("cache_rules", "Yes"), Value::Bool(true));
        assert_eq!(env_value("max_handles", "42"), Value::from(42u64));
        assert_eq!(env_value("max_handles", "many"), Value::from("many"));
        assert_eq!(env_value("log_level", "off"), Value::from("off"));
        assert_eq!(env_value("rules_file", "2024"), Value::from("2024"));
        assert_eq!(env_value("rule_type", "true"), Value::from("true"));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_extension("json"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_extension("TOML"), Some(FileFormat::Toml));
        assert_eq!(FileFormat::from_extension("env"), Some(FileFormat::Env));
        assert_eq!(FileFormat::from_extension("yaml"), None);
        assert_eq!(FileFormat::from_path(Path::new("conf/.env")), Some(FileFormat::Env));
        assert!(ConfigLoader::auto("plurals.ini").is_err());
    }
}
