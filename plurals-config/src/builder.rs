// Layered construction of PluralsConfig

use crate::env::{ENV_PREFIX, EnvLoader};
use crate::loader::{ConfigLoader, FileFormat, env_value};
use crate::{ConfigError, PluralsConfig, Result, Validate};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Builder for [`PluralsConfig`]
///
/// Layers are applied lowest priority first: defaults, config files in the
/// order added, the `.env` file, environment variables, explicit overrides.
pub struct ConfigBuilder {
    prefix: String,
    load_env: bool,
    env_vars: Option<Vec<(String, String)>>,
    load_dotenv: bool,
    dotenv_path: Option<PathBuf>,
    config_files: Vec<(PathBuf, Option<FileFormat>)>,
    overrides: Map<String, Value>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            prefix: ENV_PREFIX.to_string(),
            load_env: false,
            env_vars: None,
            load_dotenv: false,
            dotenv_path: None,
            config_files: Vec::new(),
            overrides: Map::new(),
        }
    }

    /// Set environment variable prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enable loading from environment variables
    pub fn load_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    /// Load environment layers from a fixed set of variables
    pub fn env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.load_env = true;
        self.env_vars = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Enable loading from a `.env` file; `None` means `./.env` if present
    pub fn load_dotenv(mut self, path: Option<PathBuf>) -> Self {
        self.load_dotenv = true;
        self.dotenv_path = path;
        self
    }

    /// Add a configuration file, format detected from its name
    pub fn add_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_files.push((path.into(), None));
        self
    }

    /// Add a configuration file with an explicit format
    pub fn add_file_with_format(mut self, path: impl Into<PathBuf>, format: FileFormat) -> Self {
        self.config_files.push((path.into(), Some(format)));
        self
    }

    /// Set a value that overrides every other layer
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.overrides.insert(key.to_string(), value.into());
        self
    }

    /// Merge the layers, then deserialize and validate
    pub fn build(self) -> Result<PluralsConfig> {
        let mut merged = match serde_json::to_value(PluralsConfig::default()) {
            Ok(Value::Object(map)) => map,
            Ok(_) => Map::new(),
            Err(e) => return Err(ConfigError::DeserializationError(e.to_string())),
        };

        for (path, format) in &self.config_files {
            let loader = match format {
                Some(format) => ConfigLoader::new(*format),
                None => ConfigLoader::auto(path)?,
            };
            let values = loader.load_file(path)?;
            if loader.format() == FileFormat::Env {
                merged.extend(self.env_layer(&values));
            } else {
                merged.extend(values);
            }
            plurals_log::debug!(target: "plurals::config", "loaded {}", path.display());
        }

        if self.load_dotenv {
            let path = self.dotenv_path.clone().unwrap_or_else(|| PathBuf::from(".env"));
            match EnvLoader::from_dotenv(Some(self.prefix.clone()), &path) {
                Ok(loader) => merged.extend(typed(loader.load()?)),
                // The default .env is optional
                Err(_) if self.dotenv_path.is_none() => {}
                Err(e) => return Err(e),
            }
        }

        if self.load_env {
            let mut loader = EnvLoader::new(Some(self.prefix.clone()));
            if let Some(vars) = &self.env_vars {
                loader = loader.with_vars(vars.clone());
            }
            merged.extend(typed(loader.load()?));
        }

        merged.extend(self.overrides);

        let config: PluralsConfig = serde_json::from_value(Value::Object(merged))
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Keys of a `.env` style config file: strip the prefix if present,
    /// lower-case the rest.
    fn env_layer(&self, values: &Map<String, Value>) -> Map<String, Value> {
        let loader = EnvLoader::new(Some(self.prefix.clone()));
        typed(values.iter().map(|(key, value)| {
            let name = loader.strip_prefix(key).unwrap_or(key).to_lowercase();
            let raw = match value {
                Value::String(raw) => raw.clone(),
                other => other.to_string(),
            };
            (name, raw)
        }))
    }
}

fn typed(vars: impl IntoIterator<Item = (String, String)>) -> Map<String, Value> {
    vars.into_iter()
        .map(|(key, value)| {
            let value = env_value(&key, &value);
            (key, value)
        })
        .collect()
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
