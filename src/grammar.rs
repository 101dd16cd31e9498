use lazy_static::lazy_static;
use regex::Regex;

/// Length of the base segment, the part the check digits are computed from
pub const BASE_LENGTH: usize = 12;
/// Length of a full identifier once the mask is removed
pub const CNPJ_LENGTH: usize = 14;

pub(crate) const ZEROED_CNPJ: &str = "00000000000000";
pub(crate) const ZEROED_BASE: &str = "000000000000";

lazy_static! {
    // `[0-9]` rather than `\d`, which would accept any unicode digit
    static ref DISALLOWED_CHARACTERS: Regex = Regex::new(r"[^A-Z0-9./\-]").unwrap();
    static ref BASE_FORMAT: Regex = Regex::new(r"^[A-Z0-9]{12}$").unwrap();
    static ref CNPJ_FORMAT: Regex = Regex::new(r"^[A-Z0-9]{12}[0-9]{2}$").unwrap();
}

/// Whitespace and line terminators removed around a candidate: every unicode
/// `White_Space` character except NEL (U+0085), plus the byte order mark
/// (U+FEFF) that often leads the first field of a UTF-8 export.
fn is_surrounding_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Trims and uppercases the input. Returns `None` if anything other than
/// letters, digits or mask punctuation remains.
pub(crate) fn normalize(input: &str) -> Option<String> {
    let upper = input
        .trim_matches(is_surrounding_whitespace)
        .to_uppercase();
    if DISALLOWED_CHARACTERS.is_match(&upper) {
        None
    } else {
        Some(upper)
    }
}

pub(crate) fn is_valid_base(unmasked: &str) -> bool {
    BASE_FORMAT.is_match(unmasked) && unmasked != ZEROED_BASE
}

pub(crate) fn is_valid_cnpj_format(unmasked: &str) -> bool {
    CNPJ_FORMAT.is_match(unmasked) && unmasked != ZEROED_CNPJ
}
