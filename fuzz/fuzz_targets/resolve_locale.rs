//! Fuzz target for locale resolution.

#![no_main]

use libfuzzer_sys::fuzz_target;
use plurals_core::{PluralCategory, PluralRules, resolve};

fuzz_target!(|name: &str| {
    let Ok(resolved) = resolve(name) else {
        return;
    };

    // Normalization is idempotent
    let again = resolve(&resolved.key()).expect("normalized key must resolve");
    assert_eq!(again.key(), resolved.key());
    assert!(resolved.lookup_keys().iter().any(|key| key == resolved.language()));

    // A name that resolves always yields rules
    let rules = PluralRules::for_locale(name).expect("resolved locale must build");
    assert!(rules.categories().contains(&PluralCategory::Other));
});
