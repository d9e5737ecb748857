//! C ABI for hosts embedding the resolver.
//!
//! Ownership: strings returned by [`tagsieve_resolve_query`] are allocated by
//! Rust and must be released with [`tagsieve_string_free`] exactly once.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use log::warn;

use crate::resolve_query_json;

#[unsafe(no_mangle)]
/// Resolve `query` against the JSON dictionary `dictionary_json`.
///
/// Returns a newly allocated NUL-terminated string, or null when either
/// argument is null or not valid UTF-8. If the dictionary cannot be decoded
/// the query is returned unchanged.
///
/// # Safety
/// - `query` and `dictionary_json` must each be null or point to a valid
///   NUL-terminated string that stays alive for the duration of the call.
/// - The returned pointer must be passed to `tagsieve_string_free`.
pub unsafe extern "C" fn tagsieve_resolve_query(
    query: *const c_char,
    dictionary_json: *const c_char,
) -> *mut c_char {
    // SAFETY: forwarded caller contract.
    let Some(query) = (unsafe { borrow_c_str(query, "query") }) else {
        return ptr::null_mut();
    };
    // SAFETY: forwarded caller contract.
    let Some(dictionary_json) = (unsafe { borrow_c_str(dictionary_json, "dictionary_json") })
    else {
        return ptr::null_mut();
    };

    let resolved = match resolve_query_json(query, dictionary_json) {
        Ok(resolved) => resolved,
        Err(err) => {
            warn!("tag dictionary could not be decoded, returning query unchanged: {err}");
            query.to_string()
        }
    };

    match CString::new(resolved) {
        Ok(owned) => owned.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[unsafe(no_mangle)]
/// Release a string returned by `tagsieve_resolve_query`.
///
/// # Safety
/// - `value` must be null or a pointer returned by `tagsieve_resolve_query`
///   that has not been freed yet.
pub unsafe extern "C" fn tagsieve_string_free(value: *mut c_char) {
    if value.is_null() {
        return;
    }
    // SAFETY: `value` came from `CString::into_raw` and is freed once.
    drop(unsafe { CString::from_raw(value) });
}

/// # Safety
/// `raw` must be null or point to a valid NUL-terminated string.
unsafe fn borrow_c_str<'a>(raw: *const c_char, field: &'static str) -> Option<&'a str> {
    if raw.is_null() {
        warn!("{field} pointer is null");
        return None;
    }

    // SAFETY: `raw` is non-null and expected to be a NUL-terminated C string.
    let c_str = unsafe { CStr::from_ptr(raw) };
    match c_str.to_str() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("{field} must be valid UTF-8: {err}");
            None
        }
    }
}
