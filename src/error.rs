use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;

/// Reasons a base segment is refused by [`compute_check_digits`](crate::compute_check_digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CheckDigitError {
    /// No value was supplied at all
    #[error("Cannot compute check digits: missing/invalid input")]
    MissingInput,

    /// The value contains something other than letters, digits and mask punctuation
    #[error("Cannot compute check digits: contains disallowed characters")]
    DisallowedCharacters,

    /// After removing the mask, the value is not 12 alphanumeric characters (or is all zeros)
    #[error("Cannot compute check digits: invalid base for check-digit computation")]
    InvalidBase,
}

impl CheckDigitError {
    /// Stable snake_case identifier of the error kind, suitable for metric labels.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CnpjParseError {
    #[error("CNPJ is missing")]
    MissingInput,

    #[error("CNPJ contains disallowed characters")]
    DisallowedCharacters,

    #[error("CNPJ must be 12 alphanumeric characters followed by 2 digits")]
    InvalidFormat,

    #[error("CNPJ check digits do not match: expected {expected}, found {found}")]
    CheckDigitMismatch { expected: String, found: String },
}

impl CnpjParseError {
    pub fn code(&self) -> &'static str {
        self.into()
    }
}
