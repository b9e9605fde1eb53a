//! HUB-3 character set and payload-unit accounting
//!
//! Length limits in HUB-3 are counted in payload units rather than code
//! points: ASCII letters, digits, space and a small punctuation set count
//! as one unit, the ten Croatian diacritics count as two. Anything else is
//! outside the alphabet.

/// Punctuation allowed as single-unit characters
pub const SINGLE_UNIT_PUNCTUATION: &[char] = &[
    ' ', ',', '.', ':', '-', '+', '?', '\'', '/', '(', ')',
];

/// Croatian diacritics, each encoded as two payload units
pub const DOUBLE_UNIT_CHARACTERS: &[char] = &['Š', 'Đ', 'Č', 'Ć', 'Ž', 'š', 'đ', 'č', 'ć', 'ž'];

/// Number of payload units `c` occupies, or `None` if it is not in the alphabet
pub fn char_units(c: char) -> Option<usize> {
    if c.is_ascii_alphanumeric() || SINGLE_UNIT_PUNCTUATION.contains(&c) {
        Some(1)
    } else if DOUBLE_UNIT_CHARACTERS.contains(&c) {
        Some(2)
    } else {
        None
    }
}

/// Encoded length of `value` in payload units.
///
/// Returns `None` as soon as a character outside the HUB-3 alphabet is
/// found. The empty string has length 0.
pub fn payload_length(value: &str) -> Option<usize> {
    value.chars().map(char_units).sum()
}

/// Whether every character of `value` is in the HUB-3 alphabet
pub fn is_encodable(value: &str) -> bool {
    payload_length(value).is_some()
}

/// Fold the Croatian diacritics to their base ASCII letters.
///
/// Some PDF417 renderers only accept single-byte text; they get the
/// transliterated payload. Other characters pass through unchanged.
pub fn transliterate(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            'č' | 'ć' => 'c',
            'Č' | 'Ć' => 'C',
            'š' => 's',
            'Š' => 'S',
            'đ' => 'd',
            'Đ' => 'D',
            'ž' => 'z',
            'Ž' => 'Z',
            other => other,
        })
        .collect()
}
