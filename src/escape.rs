//! Escaping of characters that carry meaning in pattern text.

/// The marker placed in front of every escaped character.
pub const ESCAPE_MARKER: char = '\\';

/// Insert [`ESCAPE_MARKER`] before every occurrence of a character in `special`.
///
/// All other characters are copied through untouched. Each input character
/// is inspected once, so the order of `special` has no effect on the result.
pub fn escape_special(text: &str, special: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if special.contains(&ch) {
            out.push(ESCAPE_MARKER);
        }
        out.push(ch);
    }
    out
}

/// Single-character form of [`escape_special`].
pub fn escape_char(ch: char, special: &[char]) -> String {
    let mut buf = [0u8; 4];
    escape_special(ch.encode_utf8(&mut buf), special)
}
