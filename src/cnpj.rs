use crate::candidate::Candidate;
use crate::check_digits::{check_digits_of_valid_base, prepare_base};
use crate::error::{CheckDigitError, CnpjParseError};
use crate::grammar::{is_valid_cnpj_format, normalize, BASE_LENGTH};
use crate::mask::{apply_mask, strip_mask};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A CNPJ whose format and check digits have been verified.
///
/// Always stored in its normalized form: 14 uppercase characters, no mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Parses a candidate identifier, masked or not, in any case.
    pub fn parse<C: Candidate>(candidate: C) -> Result<Self, CnpjParseError> {
        let candidate = candidate
            .to_candidate()
            .ok_or(CnpjParseError::MissingInput)?;
        let normalized = normalize(&candidate).ok_or(CnpjParseError::DisallowedCharacters)?;
        let unmasked = strip_mask(&normalized);
        if !is_valid_cnpj_format(&unmasked) {
            return Err(CnpjParseError::InvalidFormat);
        }

        let (base, found) = unmasked.split_at(BASE_LENGTH);
        let expected = check_digits_of_valid_base(base);
        if expected != found {
            return Err(CnpjParseError::CheckDigitMismatch {
                expected,
                found: found.to_string(),
            });
        }
        Ok(Cnpj(unmasked))
    }

    /// Completes a 12 character base with its check digits.
    pub fn from_base<C: Candidate>(base: C) -> Result<Self, CheckDigitError> {
        let mut cnpj = prepare_base(base)?;
        let check_digits = check_digits_of_valid_base(&cnpj);
        cnpj.push_str(&check_digits);
        Ok(Cnpj(cnpj))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn base(&self) -> &str {
        &self.0[..BASE_LENGTH]
    }

    pub fn check_digits(&self) -> &str {
        &self.0[BASE_LENGTH..]
    }

    /// The identifier in the `XX.XXX.XXX/XXXX-XX` layout
    pub fn masked(&self) -> String {
        // a parsed identifier always has the shape `apply_mask` expects
        apply_mask(&self.0).unwrap_or_else(|| self.0.clone())
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cnpj {
    type Err = CnpjParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cnpj::parse(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = CnpjParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cnpj::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(value: Cnpj) -> Self {
        value.0
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
