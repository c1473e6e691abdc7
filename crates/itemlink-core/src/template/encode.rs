//! Encoding of substituted values.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How a field value is written into the resolved reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueEncoding {
    /// Percent-encode everything outside the RFC 3986 unreserved set.
    #[default]
    Percent,
    /// Insert the value's display string unchanged.
    Raw,
}

impl ValueEncoding {
    pub fn apply(self, value: &str) -> Cow<'_, str> {
        match self {
            ValueEncoding::Raw => Cow::Borrowed(value),
            ValueEncoding::Percent if value.bytes().all(is_unreserved) => Cow::Borrowed(value),
            ValueEncoding::Percent => Cow::Owned(percent_encode(value)),
        }
    }
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Percent-encodes the UTF-8 bytes of `input`, keeping unreserved characters.
pub fn percent_encode(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0f) as usize] as char);
        }
    }
    out
}
