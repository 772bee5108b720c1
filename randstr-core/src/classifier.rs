use crate::alphabet::SPECIAL_CHARACTERS;

/// Direction of a case-consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
	Lower,
	Upper,
}

/// Returns `true` if `sequence` contains at least one ASCII digit.
///
/// Absent, empty and whitespace-only input yields `false`.
pub fn contains_digit(sequence: Option<&str>) -> bool {
	match non_blank(sequence) {
		Some(s) => s.chars().any(|c| c.is_ascii_digit()),
		None => false,
	}
}

/// Returns `true` if every non-special character of `sequence` is lowercase.
///
/// Characters from [`SPECIAL_CHARACTERS`] are skipped. Anything else without a
/// distinct uppercase form (digits, whitespace) disqualifies the string.
/// Absent, empty and whitespace-only input yields `false`.
pub fn is_all_lowercase(sequence: Option<&str>) -> bool {
	has_only_case(sequence, Case::Lower)
}

/// Returns `true` if every non-special character of `sequence` is uppercase.
///
/// Mirror of [`is_all_lowercase`].
pub fn is_all_uppercase(sequence: Option<&str>) -> bool {
	has_only_case(sequence, Case::Upper)
}

fn non_blank(sequence: Option<&str>) -> Option<&str> {
	sequence.filter(|s| !s.trim().is_empty())
}

fn has_only_case(sequence: Option<&str>, case: Case) -> bool {
	let Some(s) = non_blank(sequence) else {
		return false;
	};

	s.chars()
		.filter(|c| !SPECIAL_CHARACTERS.contains(*c))
		.all(|c| has_case(c, case))
}

/// A character has a case when folding it the other way changes it.
fn has_case(c: char, case: Case) -> bool {
	match case {
		Case::Lower => !c.to_uppercase().eq(std::iter::once(c)),
		Case::Upper => !c.to_lowercase().eq(std::iter::once(c)),
	}
}

/// Method-call form of the classifier predicates.
pub trait CharClasses {
	fn contains_digit(&self) -> bool;
	fn is_all_lowercase(&self) -> bool;
	fn is_all_uppercase(&self) -> bool;
}

impl CharClasses for str {
	fn contains_digit(&self) -> bool {
		contains_digit(Some(self))
	}

	fn is_all_lowercase(&self) -> bool {
		is_all_lowercase(Some(self))
	}

	fn is_all_uppercase(&self) -> bool {
		is_all_uppercase(Some(self))
	}
}
