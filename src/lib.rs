// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod candidate;
mod check_digits;
mod cnpj;
mod error;
mod grammar;
mod mask;
mod observability;
mod validator;

// This is the public API of the CNPJ library
pub use candidate::Candidate;
pub use check_digits::compute_check_digits;
pub use cnpj::Cnpj;
pub use error::{CheckDigitError, CnpjParseError};
pub use grammar::{BASE_LENGTH, CNPJ_LENGTH};
pub use mask::{apply_mask, strip_mask, MASK_CHARACTERS};
pub use observability::labels::Labels;
pub use validator::{is_valid, CnpjValidator, Validator, ValidatorConfig};
