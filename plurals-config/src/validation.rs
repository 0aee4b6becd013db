// Configuration validation

use crate::{ConfigError, Result};
use std::fmt::Display;
use std::path::Path;

/// Trait for validating configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Configuration validator with rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a value is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Validate that a number is within range
    pub fn in_range<T: PartialOrd + Display>(value: T, min: T, max: T, field: &str) -> Result<()> {
        if value < min || value > max {
            return Err(ConfigError::ValidationError(format!(
                "{} must be between {} and {}, got {}",
                field, min, max, value
            )));
        }
        Ok(())
    }

    /// Validate that a value is in a list of allowed values
    pub fn one_of<T: PartialEq + Display>(value: &T, allowed: &[T], field: &str) -> Result<()> {
        if !allowed.contains(value) {
            let allowed: Vec<String> = allowed.iter().map(|a| a.to_string()).collect();
            return Err(ConfigError::ValidationError(format!(
                "{} must be one of {}, got {}",
                field,
                allowed.join(", "),
                value
            )));
        }
        Ok(())
    }

    /// Validate that a path names an existing regular file
    pub fn is_file(path: &Path, field: &str) -> Result<()> {
        if !path.is_file() {
            return Err(ConfigError::ValidationError(format!(
                "{} must be an existing file, got {}",
                field,
                path.display()
            )));
        }
        Ok(())
    }

    /// Validate that a path has one of the given extensions
    pub fn has_extension(path: &Path, extensions: &[&str], field: &str) -> Result<()> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if !extensions.contains(&ext.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "{} must end in .{}, got {}",
                field,
                extensions.join(" or ."),
                path.display()
            )));
        }
        Ok(())
    }
}
