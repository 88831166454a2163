//! C-compatible FFI for the DIGIPIN codec.
//!
//! The API follows a status-code pattern: `0` indicates success and negative
//! numbers indicate errors. Strings returned through out-parameters are
//! allocated by this library and must be released with
//! [`digipin_string_free`].

use crate::Digipin;
use crate::error::ErrorKind;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_double, c_int};
use std::ptr;

/// Generic success status.
pub const DIGIPIN_OK: c_int = 0;
/// Returned when the provided arguments are null or otherwise invalid.
pub const DIGIPIN_ERR_INVALID_ARGUMENT: c_int = -1;
/// Returned when the coordinate is outside the codec's domain.
pub const DIGIPIN_ERR_OUT_OF_BOUNDS: c_int = -2;
/// Returned when the code is malformed.
pub const DIGIPIN_ERR_INVALID_CODE: c_int = -3;
/// Returned when an internal operation fails.
pub const DIGIPIN_ERR_OPERATION_FAILED: c_int = -4;

fn status_for(kind: ErrorKind) -> c_int {
    match kind {
        ErrorKind::InvalidLatitude | ErrorKind::InvalidLongitude => DIGIPIN_ERR_INVALID_ARGUMENT,
        ErrorKind::OutOfBounds => DIGIPIN_ERR_OUT_OF_BOUNDS,
        ErrorKind::InvalidFormat | ErrorKind::InvalidCharacter | ErrorKind::InvalidLength => {
            DIGIPIN_ERR_INVALID_CODE
        }
        _ => DIGIPIN_ERR_OPERATION_FAILED,
    }
}

/// Encodes a coordinate with the default configuration.
///
/// On success `*out_code` receives a newly allocated, null-terminated code.
///
/// # Safety
/// `out_code` must be a valid pointer to writable storage for one pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn digipin_encode(
    latitude: c_double,
    longitude: c_double,
    out_code: *mut *mut c_char,
) -> c_int {
    if out_code.is_null() {
        return DIGIPIN_ERR_INVALID_ARGUMENT;
    }
    unsafe { *out_code = ptr::null_mut() };

    let code = match Digipin::global().encode(latitude, longitude) {
        Ok(outcome) => outcome.into_inner(),
        Err(e) => return status_for(e.kind()),
    };

    match CString::new(code.into_string()) {
        Ok(c_string) => {
            unsafe { *out_code = c_string.into_raw() };
            DIGIPIN_OK
        }
        Err(_) => DIGIPIN_ERR_OPERATION_FAILED,
    }
}

/// Decodes a code into its center coordinate.
///
/// # Safety
/// `code` must point to a valid, null-terminated string; `out_latitude` and
/// `out_longitude` must be valid writable pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn digipin_decode(
    code: *const c_char,
    out_latitude: *mut c_double,
    out_longitude: *mut c_double,
) -> c_int {
    if code.is_null() || out_latitude.is_null() || out_longitude.is_null() {
        return DIGIPIN_ERR_INVALID_ARGUMENT;
    }

    let code_str = match unsafe { CStr::from_ptr(code) }.to_str() {
        Ok(s) => s,
        Err(_) => return DIGIPIN_ERR_INVALID_CODE,
    };

    match Digipin::global().decode(code_str) {
        Ok(outcome) => {
            let center = outcome.center();
            unsafe {
                *out_latitude = center.latitude();
                *out_longitude = center.longitude();
            }
            DIGIPIN_OK
        }
        Err(e) => status_for(e.kind()),
    }
}

/// Returns `1` when `code` is a well-formed code, `0` otherwise.
///
/// # Safety
/// `code` must be null or point to a valid, null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn digipin_is_valid_code(code: *const c_char) -> c_int {
    if code.is_null() {
        return 0;
    }

    match unsafe { CStr::from_ptr(code) }.to_str() {
        Ok(s) => Digipin::global().is_valid_code(s) as c_int,
        Err(_) => 0,
    }
}

/// Frees a string returned by this library.
///
/// # Safety
/// `s` must be null or a pointer previously returned through an out-parameter
/// of this library, and must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn digipin_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let mut out: *mut c_char = ptr::null_mut();
        let status = unsafe { digipin_encode(28.6139, 77.2090, &mut out) };
        assert_eq!(status, DIGIPIN_OK);
        assert!(!out.is_null());

        let code = unsafe { CStr::from_ptr(out) }.to_str().unwrap().to_owned();
        assert_eq!(code, "39J438TJC7");

        let (mut lat, mut lon) = (0.0, 0.0);
        let status = unsafe { digipin_decode(out, &mut lat, &mut lon) };
        assert_eq!(status, DIGIPIN_OK);
        assert!((lat - 28.6139).abs() < 1e-4);
        assert!((lon - 77.2090).abs() < 1e-4);

        unsafe { digipin_string_free(out) };
    }

    #[test]
    fn test_error_statuses() {
        let mut out: *mut c_char = ptr::null_mut();
        assert_eq!(
            unsafe { digipin_encode(0.0, 0.0, &mut out) },
            DIGIPIN_ERR_OUT_OF_BOUNDS
        );
        assert!(out.is_null());
        assert_eq!(
            unsafe { digipin_encode(95.0, 0.0, &mut out) },
            DIGIPIN_ERR_INVALID_ARGUMENT
        );
        assert_eq!(
            unsafe { digipin_encode(20.0, 80.0, ptr::null_mut()) },
            DIGIPIN_ERR_INVALID_ARGUMENT
        );

        let bad = CString::new("ABCDEFGHIJ").unwrap();
        let (mut lat, mut lon) = (0.0, 0.0);
        assert_eq!(
            unsafe { digipin_decode(bad.as_ptr(), &mut lat, &mut lon) },
            DIGIPIN_ERR_INVALID_CODE
        );
    }

    #[test]
    fn test_is_valid_code() {
        let good = CString::new("39J-438-TJC7").unwrap();
        let bad = CString::new("39J").unwrap();
        assert_eq!(unsafe { digipin_is_valid_code(good.as_ptr()) }, 1);
        assert_eq!(unsafe { digipin_is_valid_code(bad.as_ptr()) }, 0);
        assert_eq!(unsafe { digipin_is_valid_code(ptr::null()) }, 0);
    }
}
