//! Operand value resolution.
//!
//! Relative branch distances and signed literals are stored as
//! two's-complement bit strings of their field width. Every other kind is an
//! unsigned magnitude.

use crate::OperandField;

/// Resolve a raw extracted field into its semantic value.
#[inline]
pub fn resolve_value(raw: u16, field: OperandField) -> i32 {
    if field.kind.is_signed() {
        sign_recover(raw, field.mask)
    } else {
        i32::from(raw)
    }
}

/// Reinterpret `raw` as a two's-complement number of `mask`'s width.
///
/// `mask` must be contiguous from bit 0; the catalogs guarantee this for
/// every signed field.
pub fn sign_recover(raw: u16, mask: u16) -> i32 {
    let mask = i32::from(mask);
    let raw = i32::from(raw);
    let msb = (mask + 1) >> 1;
    if raw & msb == 0 {
        return raw;
    }
    let magnitude = (!raw + 1) & mask;
    -magnitude
}
