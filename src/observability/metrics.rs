use crate::error::CheckDigitError;
use crate::observability::labels::{Labels, NO_LABEL};
use metrics::{counter, Counter};
use strum::IntoEnumIterator;

const RESULT: &str = "result";
const KIND: &str = "kind";

pub struct Metrics {
    pub valid_identifiers: Counter,
    pub invalid_identifiers: Counter,
    // one counter per `CheckDigitError` variant, in declaration order
    check_digit_errors: Vec<Counter>,
}

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        Metrics {
            valid_identifiers: counter!(
                "cnpj.validations",
                labels.clone_with_labels(&[(RESULT, "valid")])
            ),
            invalid_identifiers: counter!(
                "cnpj.validations",
                labels.clone_with_labels(&[(RESULT, "invalid")])
            ),
            check_digit_errors: CheckDigitError::iter()
                .map(|error| {
                    counter!(
                        "cnpj.check_digit_errors",
                        labels.clone_with_labels(&[(KIND, error.code())])
                    )
                })
                .collect(),
        }
    }

    pub fn record_validation(&self, is_valid: bool) {
        if is_valid {
            self.valid_identifiers.increment(1);
        } else {
            self.invalid_identifiers.increment(1);
        }
    }

    pub fn record_check_digit_error(&self, error: CheckDigitError) {
        if let Some(counter) = CheckDigitError::iter()
            .position(|kind| kind == error)
            .and_then(|idx| self.check_digit_errors.get(idx))
        {
            counter.increment(1);
        }
    }
}

/// Counts a validation on the current recorder, without caching the handle.
pub fn record_unlabeled_validation(is_valid: bool) {
    let result = if is_valid { "valid" } else { "invalid" };
    counter!("cnpj.validations", RESULT => result).increment(1);
}

/// Counts a check-digit failure on the current recorder, without caching the handle.
pub fn record_unlabeled_check_digit_error(error: CheckDigitError) {
    counter!("cnpj.check_digit_errors", KIND => error.code()).increment(1);
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new(&NO_LABEL)
    }
}
