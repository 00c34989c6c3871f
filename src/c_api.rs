// C entry points for storefront clients that are not written in Rust.
// Strings returned here must be released with `catalog_free_string`.
use crate::core::resolver::AttributeResolver;
use std::ffi::{c_char, CStr, CString};
use std::panic::catch_unwind;
use std::ptr;
use std::sync::OnceLock;
use tracing::error;

static RESOLVER: OnceLock<AttributeResolver> = OnceLock::new();

fn resolver() -> &'static AttributeResolver {
    RESOLVER.get_or_init(AttributeResolver::reference)
}

fn to_json(colors: &[String]) -> String {
    serde_json::to_string(colors).unwrap_or_else(|_| "[]".to_string())
}

fn into_c_string(json: String) -> *mut c_char {
    CString::new(json)
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}

/// Resolves `name` against the reference dictionaries and returns the colors
/// as a JSON array. A NULL `name` yields the baseline colors; invalid UTF-8
/// is decoded lossily.
///
/// # Safety
/// `name` must be NULL or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn catalog_resolve_colors(name: *const c_char) -> *mut c_char {
    let name = if name.is_null() {
        None
    } else {
        Some(CStr::from_ptr(name).to_string_lossy().into_owned())
    };

    let result = catch_unwind(|| {
        let resolution = resolver().resolve_product_name(name.as_deref());
        to_json(&resolution.colors)
    });
    let json = result.unwrap_or_else(|_| {
        error!("panic while resolving colors, returning baseline");
        to_json(&resolver().config().baseline_colors)
    });
    into_c_string(json)
}

/// # Safety
/// `s` must be NULL or a pointer previously returned by this library.
#[no_mangle]
pub unsafe extern "C" fn catalog_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: Option<&str>) -> Vec<String> {
        let input = name.map(|n| CString::new(n).unwrap());
        let raw = unsafe {
            catalog_resolve_colors(input.as_ref().map_or(ptr::null(), |c| c.as_ptr()))
        };
        assert!(!raw.is_null());
        let json = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_string();
        unsafe { catalog_free_string(raw) };
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_resolves_reference_name() {
        assert_eq!(call(Some("Anillo con Corazón")), vec!["dorado", "negro", "plateado"]);
    }

    #[test]
    fn test_null_name_returns_baseline() {
        assert_eq!(call(None), vec!["negro", "azul", "blanco"]);
    }

    #[test]
    fn test_free_accepts_null() {
        unsafe { catalog_free_string(ptr::null_mut()) };
    }
}
