//! String helpers shared by the validators

/// Strip leading and trailing space characters.
///
/// Only `' '` is removed; tabs and newlines are kept, matching what the
/// browser scripts have always done.
pub fn trim(s: &str) -> &str {
    s.trim_matches(' ')
}

/// Length in characters, not bytes
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_letter_or_digit(c: char) -> bool {
    is_letter(c) || is_digit(c)
}
