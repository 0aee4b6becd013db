//! C ABI for plural category selection.
//!
//! Rule sets live in a process-wide registry and are addressed by opaque
//! `int64_t` handles. Misusing a handle (finalizing it twice, using it after
//! finalization, passing a value that was never issued) is reported with a
//! negative status code instead of touching freed memory.
//!
//! ```c
//! int64_t rules;
//! if (plurals_for_locale("iw_IL", &rules) == PLURALS_OK) {
//!     int category = plurals_quantity_for_int(rules, 2);  /* 2: "two" */
//!     plurals_finalize(rules);
//!     plurals_finalize(rules);  /* PLURALS_ERR_ALREADY_RELEASED */
//! }
//! ```
//!
//! Categories cross the boundary as their fixed ordinals: zero=0, one=1,
//! two=2, few=3, many=4, other=5.
//!
//! The runtime reads its settings (`rules_file`, `cache_rules`,
//! `max_handles`, logging) from `.env` and `PLURALS_*` variables on first use.

pub mod error;
pub mod handle;

pub use error::*;
pub use handle::{Handle, HandleError, HandleRegistry};

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use plurals_config::PluralsConfig;
use plurals_core::{PluralCategory, PluralOperands, PluralRuleType, PluralRules, PluralSelector};
use std::cell::RefCell;
use std::ffi::{CStr, CString, c_char, c_int};
use std::sync::Arc;

/// Version of the C ABI. Bumped on any incompatible change.
pub const ABI_VERSION: u32 = 1;

/// `rule_type` argument of [`plurals_for_locale_with_type`].
pub const PLURALS_CARDINAL: c_int = 0;
pub const PLURALS_ORDINAL: c_int = 1;

struct Runtime {
    selector: std::result::Result<PluralSelector, String>,
    registry: Mutex<HandleRegistry<PluralRules>>,
}

impl Runtime {
    fn from_env() -> Self {
        let config = PluralsConfig::from_env();
        let max_handles = config
            .as_ref()
            .map_or(PluralsConfig::default().max_handles, |config| config.max_handles);

        let selector = config
            .and_then(|config| {
                config.apply_logging();
                config.build_selector()
            })
            .map_err(|e| {
                plurals_log::error!(target: "plurals::ffi", "runtime configuration failed: {}", e);
                e.to_string()
            });

        Self {
            selector,
            registry: Mutex::new(HandleRegistry::new(max_handles)),
        }
    }

    fn selector(&self) -> Result<&PluralSelector> {
        self.selector
            .as_ref()
            .map_err(|message| FfiError::Config(message.clone()))
    }
}

static RUNTIME: Lazy<Runtime> = Lazy::new(Runtime::from_env);

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

// ============================================================================
// Safe API
// ============================================================================

/// Cardinal rules for a locale.
///
/// Unknown locales are not an error; their rules always select `other`.
pub fn for_locale(name: &str) -> Result<Handle> {
    for_locale_with_type(name, PluralRuleType::Cardinal)
}

/// Rules of a given type for a locale.
pub fn for_locale_with_type(name: &str, rule_type: PluralRuleType) -> Result<Handle> {
    let rules = RUNTIME.selector()?.rules_for(name, rule_type)?;
    let handle = RUNTIME.registry.lock().insert_shared(rules)?;
    plurals_log::trace!(target: "plurals::ffi", "issued handle {:#x} for {:?}", handle, name);
    Ok(handle)
}

/// The rule set behind a live handle.
pub fn rules(handle: Handle) -> Result<Arc<PluralRules>> {
    Ok(RUNTIME.registry.lock().get(handle)?)
}

/// Category of an integer.
pub fn quantity_for_int(handle: Handle, value: i64) -> Result<PluralCategory> {
    Ok(rules(handle)?.select(value))
}

/// Category of a decimal string such as `"1.50"`.
pub fn quantity_for_decimal(handle: Handle, value: &str) -> Result<PluralCategory> {
    let operands: PluralOperands = value.parse()?;
    Ok(rules(handle)?.select(operands))
}

/// Release a handle.
pub fn finalize(handle: Handle) -> Result<()> {
    RUNTIME.registry.lock().remove(handle)?;
    plurals_log::trace!(target: "plurals::ffi", "released handle {:#x}", handle);
    Ok(())
}

/// Number of handles not yet finalized.
pub fn live_handles() -> usize {
    RUNTIME.registry.lock().len()
}

// ============================================================================
// C ABI
// ============================================================================

fn report(err: FfiError) -> c_int {
    plurals_log::debug!(target: "plurals::ffi", "{}", err);
    let status = err.status();
    LAST_ERROR.with(|last| *last.borrow_mut() = Some(err.to_string()));
    status
}

unsafe fn c_str<'a>(ptr: *const c_char, what: &'static str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(FfiError::NullPointer(what));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| FfiError::InvalidUtf8(what))
}

fn rule_type_from_c(rule_type: c_int) -> Result<PluralRuleType> {
    match rule_type {
        PLURALS_CARDINAL => Ok(PluralRuleType::Cardinal),
        PLURALS_ORDINAL => Ok(PluralRuleType::Ordinal),
        other => Err(plurals_core::PluralError::InvalidRuleType(other.to_string()).into()),
    }
}

/// Create cardinal rules for a locale and store the handle in `out`.
///
/// Returns `PLURALS_OK` or a negative status code.
///
/// # Safety
/// `name` must be null or a valid null-terminated string. `out` must be null
/// or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn plurals_for_locale(name: *const c_char, out: *mut Handle) -> c_int {
    unsafe { plurals_for_locale_with_type(name, PLURALS_CARDINAL, out) }
}

/// Create rules of a given type (`PLURALS_CARDINAL` or `PLURALS_ORDINAL`).
///
/// # Safety
/// Same as [`plurals_for_locale`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn plurals_for_locale_with_type(
    name: *const c_char,
    rule_type: c_int,
    out: *mut Handle,
) -> c_int {
    if out.is_null() {
        return report(FfiError::NullPointer("out"));
    }
    let result = unsafe { c_str(name, "name") }.and_then(|name| {
        let rule_type = rule_type_from_c(rule_type)?;
        for_locale_with_type(name, rule_type)
    });
    match result {
        Ok(handle) => {
            unsafe { *out = handle };
            PLURALS_OK
        }
        Err(e) => report(e),
    }
}

/// Category ordinal (0..=5) of an integer, or a negative status code.
#[unsafe(no_mangle)]
pub extern "C" fn plurals_quantity_for_int(handle: Handle, value: i32) -> c_int {
    match quantity_for_int(handle, i64::from(value)) {
        Ok(category) => c_int::from(category.ordinal()),
        Err(e) => report(e),
    }
}

/// Category ordinal (0..=5) of a decimal string, or a negative status code.
///
/// # Safety
/// `value` must be null or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn plurals_quantity_for_decimal(handle: Handle, value: *const c_char) -> c_int {
    let result = unsafe { c_str(value, "value") }.and_then(|value| quantity_for_decimal(handle, value));
    match result {
        Ok(category) => c_int::from(category.ordinal()),
        Err(e) => report(e),
    }
}

/// Release a handle. A second call for the same handle returns
/// `PLURALS_ERR_ALREADY_RELEASED`.
#[unsafe(no_mangle)]
pub extern "C" fn plurals_finalize(handle: Handle) -> c_int {
    match finalize(handle) {
        Ok(()) => PLURALS_OK,
        Err(e) => report(e),
    }
}

/// Static keyword of a category ordinal (`"one"`), or null if out of range.
#[unsafe(no_mangle)]
pub extern "C" fn plurals_category_name(ordinal: c_int) -> *const c_char {
    let Ok(ordinal) = u8::try_from(ordinal) else {
        return std::ptr::null();
    };
    match PluralCategory::from_ordinal(ordinal) {
        Ok(PluralCategory::Zero) => c"zero".as_ptr(),
        Ok(PluralCategory::One) => c"one".as_ptr(),
        Ok(PluralCategory::Two) => c"two".as_ptr(),
        Ok(PluralCategory::Few) => c"few".as_ptr(),
        Ok(PluralCategory::Many) => c"many".as_ptr(),
        Ok(PluralCategory::Other) => c"other".as_ptr(),
        Err(_) => std::ptr::null(),
    }
}

/// Message of the last error on this thread, or null.
///
/// The returned string must be freed with `plurals_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn plurals_last_error() -> *mut c_char {
    LAST_ERROR.with(|last| match last.borrow().as_deref() {
        Some(message) => CString::new(message.replace('\0', " "))
            .map_or(std::ptr::null_mut(), CString::into_raw),
        None => std::ptr::null_mut(),
    })
}

/// Free a string returned by this library.
///
/// # Safety
/// `s` must be null or a pointer returned by `plurals_last_error` that has
/// not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn plurals_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Version of the C ABI this library implements.
#[unsafe(no_mangle)]
pub extern "C" fn plurals_abi_version() -> u32 {
    ABI_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_api_round_trip() {
        let handle = for_locale("en").unwrap();
        assert_eq!(quantity_for_int(handle, 1).unwrap(), PluralCategory::One);
        assert_eq!(quantity_for_int(handle, 2).unwrap(), PluralCategory::Other);
        assert_eq!(quantity_for_decimal(handle, "1.0").unwrap(), PluralCategory::Other);
        finalize(handle).unwrap();

        assert!(matches!(
            finalize(handle),
            Err(FfiError::Handle(HandleError::AlreadyReleased(_)))
        ));
        assert!(matches!(
            quantity_for_int(handle, 1),
            Err(FfiError::Handle(HandleError::AlreadyReleased(_)))
        ));
    }

    #[test]
    fn test_rule_type_from_c() {
        assert_eq!(rule_type_from_c(PLURALS_CARDINAL).unwrap(), PluralRuleType::Cardinal);
        assert_eq!(rule_type_from_c(PLURALS_ORDINAL).unwrap(), PluralRuleType::Ordinal);
        assert_eq!(rule_type_from_c(7).unwrap_err().status(), PLURALS_ERR_INVALID_RULE_TYPE);
        assert_eq!(rule_type_from_c(-1).unwrap_err().status(), PLURALS_ERR_INVALID_RULE_TYPE);
    }

    #[test]
    fn test_category_names() {
        for category in PluralCategory::ALL {
            let name = plurals_category_name(c_int::from(category.ordinal()));
            let name = unsafe { CStr::from_ptr(name) }.to_str().unwrap();
            assert_eq!(name, category.as_str());
        }
        assert!(plurals_category_name(6).is_null());
        assert!(plurals_category_name(-1).is_null());
    }
}
