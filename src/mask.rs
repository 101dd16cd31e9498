use crate::grammar::CNPJ_LENGTH;

/// Punctuation used to format a CNPJ for display
pub const MASK_CHARACTERS: &[char] = &['.', '-', '/'];

// XX.XXX.XXX/XXXX-XX
const MASK_LAYOUT: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Removes every mask character (`.`, `-`, `/`), leaving everything else untouched.
pub fn strip_mask(input: &str) -> String {
    input.chars().filter(|c| !MASK_CHARACTERS.contains(c)).collect()
}

/// Formats an identifier in the canonical `XX.XXX.XXX/XXXX-XX` layout.
///
/// Any existing mask is removed first. Returns `None` unless what remains is
/// 14 ASCII letters or digits. Check digits are not verified.
pub fn apply_mask(identifier: &str) -> Option<String> {
    let unmasked = strip_mask(identifier);
    if unmasked.len() != CNPJ_LENGTH || !unmasked.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    let mut masked = String::with_capacity(CNPJ_LENGTH + MASK_LAYOUT.len());
    for (idx, c) in unmasked.chars().enumerate() {
        if let Some((_, separator)) = MASK_LAYOUT.iter().find(|(pos, _)| *pos == idx) {
            masked.push(*separator);
        }
        masked.push(c);
    }
    Some(masked)
}
