// Fixed-width MQCHAR field helpers.
//
// MQCHAR fields are left-justified and blank padded, never NUL terminated.
// Reading back strips trailing blanks and NULs.

use crate::Core::constants::MQ_BLANK;
use crate::Core::error::{MarshalError, Result};
use crate::MQOD::Structs::Field;
use tracing::warn;

/// What to do when a short string is longer than its wire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlengthPolicy {
    /// Fail the encode with [`MarshalError::FieldTooLong`].
    #[default]
    Reject,
    /// Cut at the last UTF-8 character boundary that fits and log a warning.
    Truncate,
}

/// Write `value` into `dest`, blank padding the remainder.
pub fn set_fixed_string(
    dest: &mut [u8],
    field: Field,
    value: &str,
    policy: OverlengthPolicy,
) -> Result<()> {
    let max = dest.len();
    let bytes = value.as_bytes();

    let copy_len = if bytes.len() <= max {
        bytes.len()
    } else {
        match policy {
            OverlengthPolicy::Reject => {
                return Err(MarshalError::FieldTooLong {
                    field,
                    len: bytes.len(),
                    max,
                });
            }
            OverlengthPolicy::Truncate => {
                let cut = floor_char_boundary(value, max);
                warn!(
                    field = %field,
                    len = bytes.len(),
                    max,
                    kept = cut,
                    "truncating overlength field"
                );
                cut
            }
        }
    };

    dest[..copy_len].copy_from_slice(&bytes[..copy_len]);
    dest[copy_len..].fill(MQ_BLANK);
    Ok(())
}

/// Fill a fixed-width field with blanks.
pub fn blank_fixed_string(dest: &mut [u8]) {
    dest.fill(MQ_BLANK);
}

/// Read a fixed-width field, stripping trailing blanks and NULs.
pub fn get_fixed_string(src: &[u8]) -> String {
    let end = src
        .iter()
        .rposition(|&b| b != MQ_BLANK && b != 0)
        .map_or(0, |i| i + 1);
    String::from_utf8_lossy(&src[..end]).into_owned()
}

/// Copy up to `dest.len()` bytes of `src`; bytes past `src.len()` become zero.
pub fn copy_fixed_bytes(dest: &mut [u8], src: &[u8]) {
    let n = dest.len().min(src.len());
    dest[..n].copy_from_slice(&src[..n]);
    dest[n..].fill(0);
}

// Largest index <= max that lies on a char boundary of `s`.
fn floor_char_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}
