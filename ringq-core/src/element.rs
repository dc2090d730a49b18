//! # Element Store
//!
//! An `Element` is the payload carried by one queue node: an owned copy of
//! the caller's text.
//!
//! ## Ownership
//!
//! - Each element owns its buffer exclusively; `Element` is not `Clone`.
//! - Removing an element from a queue moves it to the caller, who becomes
//!   its only owner.
//! - `release` consumes the element, so releasing twice does not compile.

use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::utils::{copy_nul_terminated, terminated_len};

/// Owned text payload of a queue node
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    value: String,
}

impl Element {
    /// Copy `text` into freshly reserved storage.
    ///
    /// The copy stops at the first NUL byte, if any. Fails with
    /// `Error::Allocation` when the buffer cannot be reserved.
    pub fn new(text: &str) -> Result<Self> {
        let len = terminated_len(text);
        let mut value = String::new();
        value
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { requested: len + 1 })?;
        value.push_str(&text[..len]);
        Ok(Self { value })
    }

    /// Borrow the stored text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Length of the stored text in bytes, terminator excluded
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Copy the value into `buf` as a NUL-terminated string, truncating to
    /// `buf.len() - 1` bytes. Returns the number of bytes copied.
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        copy_nul_terminated(self.value.as_bytes(), buf)
    }

    /// Take the text out, consuming the element
    pub fn into_value(self) -> String {
        self.value
    }

    /// Free the text buffer and the element record
    pub fn release(self) {
        trace!(len = self.value.len(), "Releasing element");
        drop(self);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
