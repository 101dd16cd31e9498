#![allow(clippy::print_stdout)]

use afl::fuzz;
use dd_cnpj::{apply_mask, compute_check_digits, is_valid, strip_mask, Cnpj};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    let stripped = strip_mask(input);
    assert_eq!(strip_mask(&stripped), stripped);

    let valid = is_valid(input);
    let parsed = Cnpj::parse(input);
    assert_eq!(valid, parsed.is_ok());

    if let Ok(cnpj) = parsed {
        assert!(is_valid(cnpj.masked()));
        assert_eq!(
            compute_check_digits(cnpj.base()).as_deref(),
            Ok(cnpj.check_digits())
        );
        // masking the stripped input changes nothing about its validity
        if let Some(masked) = apply_mask(&stripped) {
            assert!(is_valid(masked));
        }
    }

    if let Ok(check_digits) = compute_check_digits(input) {
        #[cfg(feature = "manual_test")]
        println!("Check digits: {:?}", check_digits);

        assert_eq!(check_digits.len(), 2);
        let cnpj = Cnpj::from_base(input).expect("base accepted by compute_check_digits");
        assert_eq!(cnpj.check_digits(), check_digits);
        assert!(is_valid(cnpj.as_str()));
    }
}
