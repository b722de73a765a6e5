//! Raw native types crossing the FFI boundary

use glogbridge_core::NativeSeverity;
use std::ffi::{c_char, c_void};

/// A native log field descriptor
///
/// Layout matches the native logging subsystem bit-for-bit. The `length`
/// field follows the wire convention: `-1` denotes a null-terminated text
/// value, `0` denotes empty, and any positive value is an exact raw-byte
/// count.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawLogField {
    pub key: *const c_char,
    pub value: *const c_void,
    pub length: isize,
}

/// Outcome a writer reports back to the native fallback chain
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterOutput {
    /// The event was not consumed; the native side should try another writer
    Unhandled = 0,
    Handled = 1,
}

/// Native field-pointer writer function
///
/// The default, standard-stream, and structured-journal writers all share
/// this signature; they differ only in the function pointer.
///
/// # Safety
/// `fields` must point to `n_fields` valid descriptors for the duration of
/// the call. The callee must not retain the pointers past its return.
pub type NativeWriterFn = unsafe extern "C" fn(
    severity: NativeSeverity,
    fields: *const RawLogField,
    n_fields: usize,
    user_data: *mut c_void,
) -> WriterOutput;

/// Legacy single-message native handler function
///
/// Carries only domain, severity, and message; structured fields cannot be
/// transmitted through this signature.
///
/// # Safety
/// `domain` and `message` are null-terminated strings valid for the
/// duration of the call.
pub type LegacyLogFn = unsafe extern "C" fn(
    domain: *const c_char,
    severity: NativeSeverity,
    message: *const c_char,
    user_data: *mut c_void,
);

/// Opaque user-data token forwarded verbatim to native callbacks
#[derive(Debug, Clone, Copy)]
pub struct UserData(*mut c_void);

impl UserData {
    pub const fn null() -> Self {
        Self(std::ptr::null_mut())
    }

    pub const fn new(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    pub const fn as_ptr(self) -> *mut c_void {
        self.0
    }
}

impl Default for UserData {
    fn default() -> Self {
        Self::null()
    }
}

// The token is never dereferenced here; it is handed to exactly one
// synchronous native call at a time.
unsafe impl Send for UserData {}
unsafe impl Sync for UserData {}
