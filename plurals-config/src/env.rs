// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;
use std::path::Path;

/// Prefix of every environment variable the workspace reads.
pub const ENV_PREFIX: &str = "PLURALS";

/// Environment variable loader
///
/// Variables are read from the process environment unless a fixed set is
/// supplied with [`EnvLoader::with_vars`].
pub struct EnvLoader {
    prefix: Option<String>,
    vars: Option<HashMap<String, String>>,
}

impl EnvLoader {
    /// Create a new environment loader
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix, vars: None }
    }

    /// Read from the given variables instead of the process environment
    pub fn with_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Read the variables of a `.env` file without touching the process
    /// environment
    pub fn from_dotenv(prefix: Option<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path)
            .map_err(|e| ConfigError::LoadError(format!("{}: {}", path.display(), e)))?;

        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) =
                item.map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            vars.insert(key, value);
        }
        Ok(Self::new(prefix).with_vars(vars))
    }

    /// Load all matching variables, keyed by lower-case name without the
    /// prefix (`PLURALS_MAX_HANDLES` becomes `max_handles`)
    pub fn load(&self) -> Result<HashMap<String, String>> {
        let vars: Box<dyn Iterator<Item = (String, String)>> = match &self.vars {
            Some(vars) => Box::new(vars.clone().into_iter()),
            None => Box::new(env::vars()),
        };

        let mut config = HashMap::new();
        for (key, value) in vars {
            if let Some(name) = self.strip_prefix(&key) {
                config.insert(name.to_lowercase(), value);
            }
        }

        Ok(config)
    }

    /// Load a specific variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        let full_key = match &self.prefix {
            Some(prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        };

        match &self.vars {
            Some(vars) => vars
                .get(&full_key)
                .cloned()
                .ok_or(ConfigError::EnvError(env::VarError::NotPresent)),
            None => env::var(&full_key).map_err(ConfigError::EnvError),
        }
    }

    /// Load with default value
    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var(key).unwrap_or_else(|_| default.to_string())
    }

    /// `name` without `PREFIX_`, or `None` if it lacks the prefix
    pub fn strip_prefix<'a>(&self, name: &'a str) -> Option<&'a str> {
        match &self.prefix {
            Some(prefix) => name
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix('_'))
                .filter(|rest| !rest.is_empty()),
            None => Some(name),
        }
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(Some(ENV_PREFIX.to_string()))
    }
}
