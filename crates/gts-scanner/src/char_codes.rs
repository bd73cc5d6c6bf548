//! Character classification helpers.

#[inline]
#[must_use]
pub const fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

#[inline]
#[must_use]
pub const fn is_decimal_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
#[must_use]
pub const fn is_identifier_part(b: u8) -> bool {
    is_letter(b) || is_decimal_digit(b)
}

/// Digits (and `_` separators) valid in a numeric literal body.
///
/// Hex digits are accepted in every base; the scanner does not validate literal
/// values, it only delimits them.
#[inline]
#[must_use]
pub const fn is_number_part(b: u8) -> bool {
    b.is_ascii_hexdigit() || b == b'_'
}

#[inline]
#[must_use]
pub const fn is_horizontal_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r')
}
