use std::{sync::Arc, thread};

use crate::{
    ConstantsProvider, DefaultConstants, DefaultExtensionPatterns, ViabilityChecker,
    VIABILITY_CHECKER, errors::{CharacterClassError, ViabilityPatternError},
    is_viable_phone_number, MIN_LENGTH_FOR_NSN,
};

fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

#[test]
fn shorter_than_min_length_is_never_viable() {
    init_logger();
    assert_eq!(MIN_LENGTH_FOR_NSN, 2);
    for input in ["", "1", "+", "\u{FF11}", "x", "-"] {
        assert!(!is_viable_phone_number(input), "{input:?} should not be viable");
    }
}

#[test]
fn short_numbers_without_punctuation() {
    init_logger();
    assert!(is_viable_phone_number("12"));
    assert!(is_viable_phone_number("15"));
    assert!(is_viable_phone_number("\u{0661}\u{0662}"));
    assert!(!is_viable_phone_number("1-"));
    assert!(!is_viable_phone_number("12-"));
    assert!(!is_viable_phone_number("+12"));
    assert!(!is_viable_phone_number("1 2"));
}

#[test]
fn international_and_national_forms() {
    init_logger();
    assert!(is_viable_phone_number("+1 650 253 0000"));
    assert!(is_viable_phone_number("650-253-0000"));
    assert!(is_viable_phone_number("(650) 253-0000"));
    assert!(is_viable_phone_number("+44 20 8765 4321"));
    assert!(is_viable_phone_number("020 8765 4321"));
    assert!(is_viable_phone_number("011 15-1234-5678"));
    assert!(is_viable_phone_number("123"));
    assert!(is_viable_phone_number("++1 650"));
    assert!(is_viable_phone_number("*123"));
    assert!(is_viable_phone_number("1*2*3"));
    // star is a separator only, not trailing punctuation
    assert!(!is_viable_phone_number("123*"));
}

#[test]
fn full_width_and_arabic_indic_digits() {
    init_logger();
    // full-width plus, digits and hyphen
    assert!(is_viable_phone_number("\u{FF0B}\u{FF11}\u{FF0D}\u{FF16}\u{FF15}\u{FF10}"));
    assert!(is_viable_phone_number("\u{0660}\u{0661}\u{0662}\u{0663}"));
    assert!(is_viable_phone_number("\u{06F0}\u{06F1}\u{06F2} \u{06F3}"));
    assert!(is_viable_phone_number("+44\u{2013}2087654321"));
}

#[test]
fn extensions() {
    init_logger();
    assert!(is_viable_phone_number("650-253-0000 ext. 123"));
    assert!(is_viable_phone_number("0011 54 9 11 8765 4321 ext. 1234"));
    assert!(is_viable_phone_number("650-253-0000 x123"));
    assert!(is_viable_phone_number("650-253-0000;ext=123"));
    assert!(is_viable_phone_number("650-253-0000 extension 12"));
    assert!(is_viable_phone_number("650-253-0000 - 503#"));
    assert!(is_viable_phone_number("650-253-0000,,123"));
    assert!(!is_viable_phone_number("650-253-0000 ext."));
    assert!(!is_viable_phone_number("650-253-0000 ext. 123 ext. 4"));
}

#[test]
fn extension_labels_ignore_case() {
    init_logger();
    for label in ["ext.", "Ext.", "EXT.", "eXt.", "EXTN", "Extension"] {
        let number = format!("650-253-0000 {label} 123");
        assert!(is_viable_phone_number(&number), "{number:?} should be viable");
    }
    assert!(is_viable_phone_number("650-253-0000 X123"));
}

#[test]
fn letters_outside_extension_are_rejected() {
    init_logger();
    assert!(!is_viable_phone_number("abcd"));
    assert!(!is_viable_phone_number("1-800-FLOWERS"));
    assert!(!is_viable_phone_number("650-CALL-NOW"));
    assert!(!is_viable_phone_number("ext. 123"));
}

#[test]
fn invalid_codepoints_are_rejected() {
    init_logger();
    let invalid_inputs = vec![
        "+44\u{96}2087654321",   // C1 control
        "+44\u{fffe}2087654321", // noncharacter
        "+44\u{0}2087654321",
        "650\t253\t0000",
        "\u{1F4DE} 650 253 0000",
    ];
    for input in invalid_inputs {
        assert!(!is_viable_phone_number(input), "{input:?} should not be viable");
    }
}

#[test]
fn repeated_calls_agree() {
    init_logger();
    for input in ["12", "+1 650 253 0000", "abcd", "12-", ""] {
        let first = is_viable_phone_number(input);
        for _ in 0..10 {
            assert_eq!(is_viable_phone_number(input), first);
        }
    }
}

#[test]
fn concurrent_first_use_sees_one_pattern() {
    init_logger();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let viable = is_viable_phone_number("+1 650 253 0000");
                (viable, VIABILITY_CHECKER.pattern().as_str().as_ptr() as usize)
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
    assert!(results.iter().all(|(viable, _)| *viable));
    assert!(results.windows(2).all(|pair| pair[0].1 == pair[1].1));
}

#[test]
fn custom_checker_shares_default_pattern() {
    init_logger();
    crate::init();
    let checker = ViabilityChecker::with_providers(&DefaultConstants, &DefaultExtensionPatterns).unwrap();
    assert_eq!(checker.pattern().as_str(), VIABILITY_CHECKER.pattern().as_str());
    assert_eq!(
        checker.pattern().as_str().as_ptr(),
        VIABILITY_CHECKER.pattern().as_str().as_ptr()
    );
    let shared = Arc::new(checker);
    let worker = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || shared.is_viable_phone_number("650-253-0000 ext. 123"))
    };
    assert!(worker.join().unwrap());
}

struct BrokenPunctuation;

impl ConstantsProvider for BrokenPunctuation {
    fn min_length_for_nsn(&self) -> usize {
        DefaultConstants.min_length_for_nsn()
    }

    fn valid_digits(&self) -> &str {
        DefaultConstants.valid_digits()
    }

    // hyphen moved to the end
    fn valid_punctuation(&self) -> &str {
        " ./-"
    }

    fn plus_chars(&self) -> &str {
        DefaultConstants.plus_chars()
    }
}

#[test]
fn malformed_configuration_fails_at_construction() {
    init_logger();
    let err = ViabilityChecker::with_providers(&BrokenPunctuation, &DefaultExtensionPatterns)
        .unwrap_err();
    assert_eq!(
        err,
        ViabilityPatternError::InvalidCharacterClass {
            name: "punctuation",
            source: CharacterClassError::AmbiguousHyphen { position: 3 },
        }
    );
}
