// File: src/c_api.rs
// C entry points. Panics are caught at the boundary; strings handed out must be
// released with `spelling_variants_free_string`.
use crate::Engine;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::ptr;
use std::sync::OnceLock;

static ENGINE: OnceLock<Engine> = OnceLock::new();

fn engine() -> &'static Engine {
    ENGINE.get_or_init(Engine::new)
}

/// Borrows a C string as UTF-8, treating null and invalid UTF-8 as empty.
unsafe fn borrow_str<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    CStr::from_ptr(s).to_str().unwrap_or("")
}

fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Builds the shared engine from a `.json`/`.bin` config, or the reference
/// config when `config_path` is null or unreadable. Only the first call has
/// any effect. Returns `true` when this call installed the engine.
///
/// # Safety
/// `config_path` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn spelling_variants_init(config_path: *const c_char) -> bool {
    let path = borrow_str(config_path);
    let result = catch_unwind(|| {
        let engine = if path.is_empty() {
            Engine::new()
        } else {
            Engine::from_file_or_new(Path::new(path))
        };
        ENGINE.set(engine).is_ok()
    });
    match result {
        Ok(installed) => {
            tracing::debug!(installed, "spelling engine initialized");
            installed
        }
        Err(_) => {
            tracing::error!("panic during spelling engine initialization");
            false
        }
    }
}

/// Sorted distinct variants of a raw word as a JSON array string.
///
/// # Safety
/// `word` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn spelling_variants_generate(word: *const c_char) -> *mut c_char {
    let word = borrow_str(word);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let variants = engine().spell(word);
        serde_json::to_string(&variants).unwrap_or_else(|_| "[]".to_string())
    }));
    let json = result.unwrap_or_else(|_| {
        tracing::error!("panic in spelling_variants_generate");
        "[]".to_string()
    });
    into_c_string(json)
}

/// Headword query for a raw word, or null when none can be built.
///
/// # Safety
/// `word` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn spelling_variants_query(word: *const c_char) -> *mut c_char {
    let word = borrow_str(word);
    let result = catch_unwind(AssertUnwindSafe(|| engine().query(word)));
    match result {
        Ok(Ok(query)) => into_c_string(query),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "could not build query");
            ptr::null_mut()
        }
        Err(_) => {
            tracing::error!("panic in spelling_variants_query");
            ptr::null_mut()
        }
    }
}

/// # Safety
/// `s` must be null or a pointer returned by this library, freed at most once.
#[no_mangle]
pub unsafe extern "C" fn spelling_variants_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
