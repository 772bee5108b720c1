use proptest::prelude::*;

use randstr_core::alphabet::SPECIAL_CHARACTERS;
use randstr_core::{
	CharClasses, Error, GenerationRequest, Generator, LetterPolicy, contains_digit, generate, generate_with_digits,
	is_all_lowercase, is_all_uppercase,
};

proptest! {
	#[test]
	fn length_is_respected(length in 0i64..256, digits in any::<bool>()) {
		let s = generate_with_digits(length, digits).unwrap();
		prop_assert_eq!(s.chars().count() as i64, length);
	}

	#[test]
	fn negative_lengths_fail(length in i64::MIN..0, digits in any::<bool>(), upper in any::<bool>(), lower in any::<bool>()) {
		prop_assert_eq!(generate(length), Err(Error::InvalidArgument { length }));
		prop_assert_eq!(
			Generator::new().generate_with(length, digits, upper, lower),
			Err(Error::InvalidArgument { length })
		);
	}

	#[test]
	fn digit_guarantee_holds(length in 1i64..64) {
		let s = generate_with_digits(length, true).unwrap();
		prop_assert!(contains_digit(Some(s.as_str())));
	}

	#[test]
	fn letters_only_has_no_digit(length in 0i64..64, upper in any::<bool>(), lower in any::<bool>()) {
		let s = Generator::new().generate_with(length, false, upper, lower).unwrap();
		prop_assert!(!contains_digit(Some(s.as_str())));
	}

	#[test]
	fn bounded_attempts_still_guarantee_digit(length in 1i64..16, cap in 1usize..4) {
		let request = GenerationRequest::new(length).with_digits(true).with_max_attempts(cap);
		let s = Generator::new().generate_request(&request).unwrap();
		prop_assert_eq!(s.len() as i64, length);
		prop_assert!(s.contains_digit());
	}

	#[test]
	fn lowercase_words_classify(word in "[a-z]{1,24}") {
		prop_assert!(is_all_lowercase(Some(word.as_str())));
		prop_assert!(!is_all_uppercase(Some(word.as_str())));
	}

	#[test]
	fn uppercasing_flips_classification(word in "[a-z]{1,24}") {
		let upper = word.to_uppercase();
		prop_assert!(upper.is_all_uppercase());
		prop_assert!(!upper.is_all_lowercase());
	}

	#[test]
	fn special_characters_are_case_neutral(word in "[A-Z]{1,8}", idx in 0usize..SPECIAL_CHARACTERS.len()) {
		let special = SPECIAL_CHARACTERS.as_bytes()[idx] as char;
		let mixed = format!("{special}{word}{special}");
		prop_assert!(is_all_uppercase(Some(mixed.as_str())));
	}

	#[test]
	fn blank_input_is_never_classified(spaces in " {0,8}") {
		prop_assert!(!contains_digit(Some(spaces.as_str())));
		prop_assert!(!is_all_lowercase(Some(spaces.as_str())));
		prop_assert!(!is_all_uppercase(Some(spaces.as_str())));
	}
}

#[test]
fn absent_input_is_false() {
	assert!(!contains_digit(None));
	assert!(!is_all_lowercase(None));
	assert!(!is_all_uppercase(None));
}

#[test]
fn zero_length_is_empty_for_all_flags() {
	let mut generator = Generator::new();
	for digits in [false, true] {
		for upper in [false, true] {
			for lower in [false, true] {
				assert_eq!(generator.generate_with(0, digits, upper, lower).unwrap(), "");
			}
		}
	}
}

#[test]
fn strict_request_from_json() {
	let request: GenerationRequest =
		serde_json::from_str(r#"{"length": 10, "include_lowercase": false, "letter_policy": "strict"}"#).unwrap();
	assert_eq!(request.letter_policy, LetterPolicy::Strict);
	let s = Generator::new().generate_request(&request).unwrap();
	assert_eq!(s.len(), 10);
	assert!(is_all_uppercase(Some(s.as_str())));
}
