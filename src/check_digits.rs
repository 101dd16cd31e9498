use crate::candidate::Candidate;
use crate::error::CheckDigitError;
use crate::grammar::{is_valid_base, normalize, BASE_LENGTH};
use crate::mask::strip_mask;
use crate::observability::metrics::record_unlabeled_check_digit_error;

// https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
// The first check digit uses WEIGHTS[1..=12], the second uses WEIGHTS[0..12]
// plus the first check digit weighted by WEIGHTS[12].
const CHECK_DIGIT_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Computes the two check digits of a 12 character base.
///
/// The base may be masked and in any case. Fails with
/// [`CheckDigitError::MissingInput`] for an absent value,
/// [`CheckDigitError::DisallowedCharacters`] when anything other than letters,
/// digits or mask punctuation is present, and [`CheckDigitError::InvalidBase`]
/// when the unmasked value is not 12 alphanumeric characters or is all zeros.
///
/// Failures are counted, without labels, on the recorder installed at the
/// time of the call.
pub fn compute_check_digits<C: Candidate>(base: C) -> Result<String, CheckDigitError> {
    let base = prepare_base(base).map_err(|err| {
        record_unlabeled_check_digit_error(err);
        err
    })?;
    Ok(check_digits_of_valid_base(&base))
}

/// Normalizes and unmasks a base, checking it can be used for check-digit computation.
pub(crate) fn prepare_base<C: Candidate>(base: C) -> Result<String, CheckDigitError> {
    let base = base.to_candidate().ok_or(CheckDigitError::MissingInput)?;
    let normalized = normalize(&base).ok_or(CheckDigitError::DisallowedCharacters)?;
    let unmasked = strip_mask(&normalized);
    if !is_valid_base(&unmasked) {
        return Err(CheckDigitError::InvalidBase);
    }
    Ok(unmasked)
}

/// Check digits of a base that already went through `prepare_base` (or an
/// equivalent format check): exactly 12 ASCII characters of `[A-Z0-9]`.
pub(crate) fn check_digits_of_valid_base(base: &str) -> String {
    let base = base.as_bytes();
    let first = reduce(first_digit_sum(base));
    let second = reduce(second_digit_sum(base, first));
    format!("{first}{second}")
}

// '0'..='9' map to 0..=9 and 'A'..='Z' to 17..=42
#[inline]
fn char_value(c: u8) -> u32 {
    u32::from(c - b'0')
}

fn first_digit_sum(base: &[u8]) -> u32 {
    base.iter()
        .zip(&CHECK_DIGIT_WEIGHTS[1..=BASE_LENGTH])
        .map(|(c, weight)| char_value(*c) * weight)
        .sum()
}

fn second_digit_sum(base: &[u8], first_digit: u32) -> u32 {
    let base_sum: u32 = base
        .iter()
        .zip(&CHECK_DIGIT_WEIGHTS[..BASE_LENGTH])
        .map(|(c, weight)| char_value(*c) * weight)
        .sum();
    base_sum + first_digit * CHECK_DIGIT_WEIGHTS[BASE_LENGTH]
}

#[inline]
fn reduce(sum: u32) -> u32 {
    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}
