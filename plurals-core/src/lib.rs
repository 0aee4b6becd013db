//! CLDR plural category selection.
//!
//! Classifies numbers into the plural categories `zero`, `one`, `two`,
//! `few`, `many` and `other` according to the rules of a locale:
//!
//! - **Locale resolution**: ICU and BCP 47 names, legacy code aliases
//! - **Operands**: integer, float and decimal string decomposition
//! - **Rule grammar**: parser and evaluator for CLDR plural conditions
//! - **Rule data**: built-in CLDR cardinal and ordinal tables, or tables
//!   loaded from CLDR JSON/TOML files
//!
//! # Quick Start
//!
//! ```
//! use plurals_core::{PluralCategory, PluralRules};
//!
//! let rules = PluralRules::for_locale("en_US")?;
//! assert_eq!(rules.select(1), PluralCategory::One);
//! assert_eq!(rules.select(5), PluralCategory::Other);
//!
//! // Visible fraction digits matter
//! assert_eq!(rules.select_str("1.0")?, PluralCategory::Other);
//!
//! // Legacy codes resolve to their current equivalents
//! let hebrew = PluralRules::for_locale("iw_IL")?;
//! assert_eq!(hebrew.select(2), PluralCategory::Two);
//! # Ok::<(), plurals_core::PluralError>(())
//! ```
//!
//! # Ordinals
//!
//! ```
//! use plurals_core::{PluralCategory, PluralRuleType, PluralRules};
//!
//! let rules = PluralRules::try_new("en", PluralRuleType::Ordinal)?;
//! assert_eq!(rules.select(22), PluralCategory::Two); // 22nd
//! assert_eq!(rules.select(13), PluralCategory::Other); // 13th
//! # Ok::<(), plurals_core::PluralError>(())
//! ```
//!
//! # Custom Rule Tables
//!
//! ```rust,ignore
//! use plurals_core::{PluralSelector, TableRules};
//!
//! let selector = PluralSelector::builder()
//!     .provider(TableRules::load("cldr/plurals.json")?)
//!     .build();
//! let category = selector.select("pt_PT", 1)?;
//! ```

mod category;
mod condition;
mod data;
mod error;
mod locale;
mod operands;
mod provider;
mod rules;
mod selector;

pub use category::{PluralCategory, PluralRuleType};
pub use condition::{Condition, ConditionParseError, Expr, Operand, Relation, RelationKind};
pub use error::PluralError;
pub use locale::{LEGACY_LANGUAGE_ALIASES, Locale, ResolvedLocale, resolve};
pub use operands::{MAX_DIGITS, PluralOperands};
pub use provider::{BuiltinRules, RuleDefinitions, RuleProvider, TableRules};
pub use rules::{PluralRule, PluralRules};
pub use selector::{PluralSelector, PluralSelectorBuilder};

/// Result type for plural operations
pub type Result<T> = std::result::Result<T, PluralError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        PluralCategory, PluralError, PluralOperands, PluralRuleType, PluralRules, PluralSelector,
        Result, TableRules, resolve,
    };
}
