// Plurals - CLDR plural category selection for Rust
//
// This library resolves locale names, decomposes numbers into CLDR plural
// operands and selects the plural category of a value under a locale's
// cardinal or ordinal rules.

// Re-export core functionality
pub use plurals_core::*;

// Re-export logging
pub use plurals_log;

// Re-export optional crates
#[cfg(feature = "config")]
pub use plurals_config;

#[cfg(feature = "config")]
pub use plurals_config::{ConfigBuilder, ConfigError, PluralsConfig};

#[cfg(feature = "ffi")]
pub use plurals_ffi;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        PluralCategory, PluralError, PluralOperands, PluralRuleType, PluralRules, PluralSelector,
        PluralSelectorBuilder, ResolvedLocale, RuleProvider, TableRules, resolve,
    };

    #[cfg(feature = "config")]
    pub use crate::{ConfigBuilder, PluralsConfig};
}
