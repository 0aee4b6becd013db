//! Error types for plural rule operations

use thiserror::Error;

/// Errors that can occur while resolving locales or building rule sets.
///
/// An unknown locale is not an error: it yields a rule set that only
/// produces `other`.
#[derive(Debug, Error)]
pub enum PluralError {
    /// Empty or malformed locale identifier
    #[error("Invalid locale: {0:?}")]
    InvalidLocale(String),

    /// Rule data exists for the locale but cannot be used
    #[error("Corrupt plural rule data for {locale}: {reason}")]
    RuleData { locale: String, reason: String },

    /// Value that cannot be decomposed into plural operands
    #[error("Invalid plural operand: {0}")]
    InvalidOperand(String),

    /// Unknown plural category keyword or ordinal
    #[error("Invalid plural category: {0}")]
    InvalidCategory(String),

    /// Unknown rule type keyword
    #[error("Invalid plural rule type: {0}")]
    InvalidRuleType(String),

    /// Rule table file with an extension we cannot read
    #[error("Unsupported rule table format: {0}")]
    UnsupportedFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PluralError {
    /// Shorthand for a [`PluralError::RuleData`] error.
    pub fn rule_data(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RuleData {
            locale: locale.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error came from rule data rather than caller input.
    pub fn is_rule_data(&self) -> bool {
        matches!(self, Self::RuleData { .. })
    }
}
