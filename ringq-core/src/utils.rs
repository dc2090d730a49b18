//! # Common Utilities
//!
//! Byte-level helpers for NUL-terminated text.

/// Length of `text` up to, not including, its first NUL byte.
pub fn terminated_len(text: &str) -> usize {
    text.bytes().position(|b| b == 0).unwrap_or(text.len())
}

/// Copy `src` into `dst` as a NUL-terminated string.
///
/// At most `dst.len() - 1` bytes are copied; the remainder of the buffer up
/// to the final byte is zero-filled and the final byte is always NUL.
/// Returns the number of bytes of `src` copied. A zero-length `dst` is left
/// untouched.
pub fn copy_nul_terminated(src: &[u8], dst: &mut [u8]) -> usize {
    let Some(limit) = dst.len().checked_sub(1) else {
        return 0;
    };
    let copied = src.len().min(limit);
    dst[..copied].copy_from_slice(&src[..copied]);
    dst[copied..].fill(0);
    copied
}
