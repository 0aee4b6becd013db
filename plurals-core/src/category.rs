//! Plural categories and rule types.

use crate::{PluralError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CLDR plural categories.
///
/// The declaration order is the evaluation priority: a rule set tests
/// `Zero` first and falls back to `Other` last. Not every language uses
/// every category, but `Other` is always reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    /// Zero items (Arabic, Latvian, Welsh)
    Zero,
    /// One item (most languages)
    One,
    /// Two items (Arabic, Hebrew, Welsh, Slovenian)
    Two,
    /// Few items (Slavic languages, Arabic)
    Few,
    /// Many items (Slavic languages, Arabic, French millions)
    Many,
    /// All other cases
    Other,
}

impl PluralCategory {
    /// All categories in evaluation order.
    pub const ALL: [PluralCategory; 6] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Few,
        Self::Many,
        Self::Other,
    ];

    /// Compact ordinal used at foreign boundaries.
    ///
    /// The mapping is fixed: zero=0, one=1, two=2, few=3, many=4, other=5.
    /// Callers persist and compare these numbers, so it must never change.
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Few => 3,
            Self::Many => 4,
            Self::Other => 5,
        }
    }

    /// Inverse of [`PluralCategory::ordinal`].
    pub fn from_ordinal(ordinal: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or_else(|| PluralError::InvalidCategory(format!("ordinal {}", ordinal)))
    }

    /// CLDR keyword for this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl FromStr for PluralCategory {
    type Err = PluralError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "one" => Ok(Self::One),
            "two" => Ok(Self::Two),
            "few" => Ok(Self::Few),
            "many" => Ok(Self::Many),
            "other" => Ok(Self::Other),
            _ => Err(PluralError::InvalidCategory(s.to_string())),
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which family of CLDR rules to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralRuleType {
    /// Quantities: "1 file", "2 files"
    #[default]
    Cardinal,
    /// Ranks: "1st", "2nd", "3rd"
    Ordinal,
}

impl PluralRuleType {
    /// Keyword used in configuration and on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cardinal => "cardinal",
            Self::Ordinal => "ordinal",
        }
    }
}

impl FromStr for PluralRuleType {
    type Err = PluralError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cardinal" => Ok(Self::Cardinal),
            "ordinal" => Ok(Self::Ordinal),
            _ => Err(PluralError::InvalidRuleType(s.to_string())),
        }
    }
}

impl fmt::Display for PluralRuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
