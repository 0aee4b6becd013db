//! Errors and status codes of the C ABI.

use crate::handle::HandleError;
use plurals_core::PluralError;
use std::ffi::c_int;
use thiserror::Error;

/// Success.
pub const PLURALS_OK: c_int = 0;
/// A required pointer argument was null.
pub const PLURALS_ERR_NULL_POINTER: c_int = -1;
/// A string argument was not valid UTF-8.
pub const PLURALS_ERR_INVALID_UTF8: c_int = -2;
/// The locale name was empty or malformed.
pub const PLURALS_ERR_INVALID_LOCALE: c_int = -3;
/// Rule data for the locale exists but is corrupt.
pub const PLURALS_ERR_RULE_DATA: c_int = -4;
/// The handle was never issued.
pub const PLURALS_ERR_INVALID_HANDLE: c_int = -5;
/// The handle was already finalized.
pub const PLURALS_ERR_ALREADY_RELEASED: c_int = -6;
/// Too many live handles.
pub const PLURALS_ERR_LIMIT_REACHED: c_int = -7;
/// A decimal string could not be decomposed into operands.
pub const PLURALS_ERR_INVALID_OPERAND: c_int = -8;
/// The runtime configuration could not be loaded.
pub const PLURALS_ERR_CONFIG: c_int = -9;
/// Any other failure.
pub const PLURALS_ERR_INTERNAL: c_int = -10;
/// The rule type was neither `PLURALS_CARDINAL` nor `PLURALS_ORDINAL`.
pub const PLURALS_ERR_INVALID_RULE_TYPE: c_int = -11;

#[derive(Debug, Error)]
pub enum FfiError {
    #[error(transparent)]
    Handle(#[from] HandleError),

    #[error("{0} is null")]
    NullPointer(&'static str),

    #[error("{0} is not valid UTF-8")]
    InvalidUtf8(&'static str),

    #[error(transparent)]
    Plural(#[from] PluralError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl FfiError {
    /// Stable negative status code reported across the C boundary.
    pub fn status(&self) -> c_int {
        match self {
            FfiError::Handle(HandleError::InvalidHandle(_)) => PLURALS_ERR_INVALID_HANDLE,
            FfiError::Handle(HandleError::AlreadyReleased(_)) => PLURALS_ERR_ALREADY_RELEASED,
            FfiError::Handle(HandleError::LimitReached(_)) => PLURALS_ERR_LIMIT_REACHED,
            FfiError::NullPointer(_) => PLURALS_ERR_NULL_POINTER,
            FfiError::InvalidUtf8(_) => PLURALS_ERR_INVALID_UTF8,
            FfiError::Plural(PluralError::InvalidLocale(_)) => PLURALS_ERR_INVALID_LOCALE,
            FfiError::Plural(PluralError::RuleData { .. }) => PLURALS_ERR_RULE_DATA,
            FfiError::Plural(PluralError::InvalidOperand(_)) => PLURALS_ERR_INVALID_OPERAND,
            FfiError::Plural(PluralError::InvalidRuleType(_)) => PLURALS_ERR_INVALID_RULE_TYPE,
            FfiError::Plural(_) => PLURALS_ERR_INTERNAL,
            FfiError::Config(_) => PLURALS_ERR_CONFIG,
        }
    }
}

pub type Result<T> = std::result::Result<T, FfiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_distinct_and_negative() {
        let codes = [
            PLURALS_ERR_NULL_POINTER,
            PLURALS_ERR_INVALID_UTF8,
            PLURALS_ERR_INVALID_LOCALE,
            PLURALS_ERR_RULE_DATA,
            PLURALS_ERR_INVALID_HANDLE,
            PLURALS_ERR_ALREADY_RELEASED,
            PLURALS_ERR_LIMIT_REACHED,
            PLURALS_ERR_INVALID_OPERAND,
            PLURALS_ERR_CONFIG,
            PLURALS_ERR_INTERNAL,
            PLURALS_ERR_INVALID_RULE_TYPE,
        ];
        for (i, a) in codes.iter().enumerate() {
            assert!(*a < 0);
            assert!(codes[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            FfiError::from(HandleError::AlreadyReleased(7)).status(),
            PLURALS_ERR_ALREADY_RELEASED
        );
        assert_eq!(
            FfiError::from(PluralError::InvalidLocale(String::new())).status(),
            PLURALS_ERR_INVALID_LOCALE
        );
        assert_eq!(
            FfiError::from(PluralError::rule_data("en", "bad")).status(),
            PLURALS_ERR_RULE_DATA
        );
        assert_eq!(FfiError::NullPointer("name").status(), PLURALS_ERR_NULL_POINTER);
        assert_eq!(
            FfiError::from(PluralError::InvalidRuleType("7".to_string())).status(),
            PLURALS_ERR_INVALID_RULE_TYPE
        );
    }
}
