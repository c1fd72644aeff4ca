//! `encodeURIComponent`-compatible percent-encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};

/// Characters `encodeURIComponent` leaves intact: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const FRAGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a serialized client state for use in a URL fragment.
///
/// The service decodes the fragment with `decodeURIComponent`, so the
/// encode set must match the browser's exactly.
#[must_use]
pub fn encode_fragment(input: &str) -> String {
    percent_encode(input.as_bytes(), FRAGMENT_ENCODE_SET).to_string()
}
