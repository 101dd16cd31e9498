use crate::candidate::Candidate;
use crate::check_digits::{check_digits_of_valid_base, prepare_base};
use crate::cnpj::Cnpj;
use crate::error::CheckDigitError;
use crate::observability::labels::Labels;
use crate::observability::metrics::{record_unlabeled_validation, Metrics};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Checks a whole candidate identifier, masked or not, in any case.
///
/// Never fails: anything that cannot be read as a CNPJ is simply invalid.
/// The outcome is counted, without labels, on the recorder installed at the
/// time of the call.
pub fn is_valid<C: Candidate>(candidate: C) -> bool {
    let is_valid = Cnpj::parse(candidate).is_ok();
    record_unlabeled_validation(is_valid);
    is_valid
}

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ValidatorConfig {
    /// Extra labels attached to every metric emitted by the validator
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> CnpjValidator {
        CnpjValidator {
            metrics: Metrics::new(&self.labels),
        }
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

/// CNPJ validator reporting its outcomes through `metrics`.
///
/// Counter handles are resolved once, when the validator is built, against the
/// recorder installed at that time. The free functions [`is_valid`] and
/// [`compute_check_digits`](crate::compute_check_digits) resolve theirs on
/// every call instead, without labels.
pub struct CnpjValidator {
    metrics: Metrics,
}

impl Default for CnpjValidator {
    fn default() -> Self {
        ValidatorConfig::default().build()
    }
}

impl CnpjValidator {
    pub fn is_valid<C: Candidate>(&self, candidate: C) -> bool {
        let is_valid = Cnpj::parse(candidate).is_ok();
        self.metrics.record_validation(is_valid);
        is_valid
    }

    pub fn compute_check_digits<C: Candidate>(&self, base: C) -> Result<String, CheckDigitError> {
        let base = prepare_base(base).map_err(|err| {
            self.metrics.record_check_digit_error(err);
            err
        })?;
        Ok(check_digits_of_valid_base(&base))
    }
}

impl Validator for CnpjValidator {
    fn is_valid_match(&self, candidate: &str) -> bool {
        self.is_valid(candidate)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    #[test]
    fn test_valid_cnpj_ids() {
        let valid_ids = vec![
            "12ABC34501DE35",
            "A1B2C3D4E5F668",
            "0001A1B2C3D480",
            "Z9Y8X7W6V5U429",
            "1A2B3C4D5E6F34",
            "12.ABC.345/01DE-35",
            // numeric-only identifiers remain valid
            "11.444.777/0001-61",
            "00.623.904/0001-73",
            "12345678901230",
            // case and surrounding whitespace don't matter
            "a1b2c3d4e5f668",
            "12.AbC.345/01dE-35",
            " \t12ABC34501DE35\n",
        ];
        for id in valid_ids {
            assert!(is_valid(id), "expected valid: {id}");
        }
    }

    #[test]
    fn test_invalid_cnpj_ids() {
        let invalid_ids = vec![
            // wrong check digits
            "12ABC34501DE00",
            "A1B2C3D4E5F678",
            "12.ABC.345/01DE-00",
            "00.623.904/0001-71",
            // wrong length
            "1234567890123",
            "12ABC34501DE",
            "12ABC34501D",
            "12ABC34501DE351",
            "",
            // letters in the check digits
            "A1B2C3D4E5F6G7",
            // disallowed characters
            "12ABC!4501DE35",
            "12AB#C34501DE35",
            "12ABC 34501DE35",
            "12ABC34501DE3５",
            // all zeros, whatever the arithmetic says
            "00000000000000",
            "00.000.000/0000-00",
        ];
        for id in invalid_ids {
            assert!(!is_valid(id), "expected invalid: {id}");
        }
    }

    #[test]
    fn test_absent_and_non_text_candidates() {
        assert!(!is_valid(None::<&str>));
        assert!(!is_valid(None::<String>));
        assert!(is_valid(Some("12ABC34501DE35")));
        assert!(is_valid(String::from("12ABC34501DE35")));
        assert!(is_valid(11_444_777_000_161_u64));
        // the leading zeros of a numeric value cannot be recovered
        assert!(!is_valid(623_904_000_173_u64));
    }

    #[test]
    fn test_round_trip() {
        let bases = vec![
            "12ABC34501DE",
            "ABCDEFGHIJKL",
            "ZZZZZZZZZZZZ",
            "000000000001",
            "99999999999Z",
            "10000000000A",
        ];
        for base in bases {
            let check_digits = crate::compute_check_digits(base).unwrap();
            assert!(is_valid(format!("{base}{check_digits}")), "base: {base}");
        }
    }

    #[test]
    fn test_validator_trait() {
        let validators: Vec<Box<dyn Validator>> = vec![
            Box::new(CnpjValidator::default()),
            Box::new(ValidatorConfig::new().build()),
        ];
        for validator in validators {
            assert!(validator.is_valid_match("12.ABC.345/01DE-35"));
            assert!(!validator.is_valid_match("12.ABC.345/01DE-53"));
        }
    }

    #[test]
    fn test_config_json() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"labels": {"service": "onboarding"}}"#).unwrap();
        assert_eq!(
            config,
            ValidatorConfig::new().labels(Labels::new(&[("service", "onboarding")]))
        );

        let config: ValidatorConfig = serde_json::from_str(r#"{"labels": null}"#).unwrap();
        assert_eq!(config, ValidatorConfig::default());

        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_validator_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let validator = ValidatorConfig::new()
                .labels(Labels::new(&[("service", "onboarding")]))
                .build();
            assert!(validator.is_valid("12ABC34501DE35"));
            assert!(!validator.is_valid("12ABC34501DE00"));
            assert_eq!(
                validator.compute_check_digits(None::<&str>),
                Err(CheckDigitError::MissingInput)
            );
            assert_eq!(validator.compute_check_digits("12ABC34501DE").unwrap(), "35");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let counter_value = |name: &'static str, label: Label| {
            let key = CompositeKey::new(
                Counter,
                Key::from_parts(name, vec![Label::new("service", "onboarding"), label]),
            );
            snapshot.get(&key).map(|value| &value.2)
        };

        assert_eq!(
            counter_value("cnpj.validations", Label::new("result", "valid")),
            Some(&DebugValue::Counter(1))
        );
        assert_eq!(
            counter_value("cnpj.validations", Label::new("result", "invalid")),
            Some(&DebugValue::Counter(1))
        );
        assert_eq!(
            counter_value(
                "cnpj.check_digit_errors",
                Label::new("kind", "missing_input")
            ),
            Some(&DebugValue::Counter(1))
        );
        assert_eq!(
            counter_value(
                "cnpj.check_digit_errors",
                Label::new("kind", "disallowed_characters")
            ),
            Some(&DebugValue::Counter(0))
        );
    }
}
