// ============================================================================
// Caller Buffers
// NUL-terminated output into caller-provided byte slices
// ============================================================================

use crate::numeric::{RomanError, RomanResult};
use std::ffi::CStr;

/// Copy `text` into `out` followed by a NUL byte and return `text.len()`.
///
/// # Errors
/// Returns `OutputTooSmall` (and leaves `out` holding the empty string) if
/// `out` cannot hold `text.len() + 1` bytes.
pub fn write_terminated(text: &str, out: &mut [u8]) -> RomanResult<usize> {
    let needed = text.len() + 1;
    if out.len() < needed {
        clear(out);
        return Err(RomanError::OutputTooSmall {
            needed,
            available: out.len(),
        });
    }

    out[..text.len()].copy_from_slice(text.as_bytes());
    out[text.len()] = 0;
    Ok(text.len())
}

/// Write the outcome of a fixed-capacity operation into `out`.
///
/// On error the buffer is left holding the empty string.
pub fn fill<S: AsRef<str>>(out: &mut [u8], result: RomanResult<S>) -> RomanResult<usize> {
    match result {
        Ok(text) => write_terminated(text.as_ref(), out),
        Err(error) => {
            clear(out);
            Err(error)
        },
    }
}

/// Set the first byte to NUL, if there is one.
#[inline]
pub fn clear(out: &mut [u8]) {
    if let Some(first) = out.first_mut() {
        *first = 0;
    }
}

/// Read back the text in a NUL-terminated buffer.
///
/// `None` if there is no terminator or the text is not UTF-8.
pub fn terminated_str(buf: &[u8]) -> Option<&str> {
    CStr::from_bytes_until_nul(buf).ok()?.to_str().ok()
}
