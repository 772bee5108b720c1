use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// How the case flags of a request select letter classes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LetterPolicy {
	/// Both letter classes are always included; `include_uppercase` and
	/// `include_lowercase` have no effect. Matches the historical output of
	/// the four-flag generator.
	#[default]
	Legacy,

	/// The case flags select letter classes. Deselecting everything is an error.
	Strict,
}

/// Parameters for a single generation call.
///
/// All fields except `length` have defaults, so a request can be
/// deserialized from any serde format with only `length` present.
/// A missing `length` or an unknown key is a deserialization error.
///
/// # Defaults
/// - `include_digits`: `false`
/// - `include_uppercase`, `include_lowercase`: `true`
/// - `letter_policy`: [`LetterPolicy::Legacy`]
/// - `max_attempts`: `None` (rejection sampling is unbounded)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GenerationRequest {
	/// Number of characters to produce. Negative values are rejected.
	pub length: i64,

	/// Add digits to the alphabet and guarantee at least one in the output.
	#[serde(default)]
	pub include_digits: bool,

	/// Select uppercase letters. Only honoured under [`LetterPolicy::Strict`].
	#[serde(default = "enabled")]
	pub include_uppercase: bool,

	/// Select lowercase letters. Only honoured under [`LetterPolicy::Strict`].
	#[serde(default = "enabled")]
	pub include_lowercase: bool,

	#[serde(default)]
	pub letter_policy: LetterPolicy,

	/// Number of rejected candidates after which a digit is forced into the
	/// last candidate instead of drawing another one.
	///
	/// This bounds the running time but slightly skews the output
	/// distribution compared to pure rejection sampling.
	#[serde(default)]
	pub max_attempts: Option<NonZeroUsize>,
}

fn enabled() -> bool {
	true
}

impl Default for GenerationRequest {
	fn default() -> Self {
		Self {
			length: 0,
			include_digits: false,
			include_uppercase: true,
			include_lowercase: true,
			letter_policy: LetterPolicy::Legacy,
			max_attempts: None,
		}
	}
}

impl GenerationRequest {
	/// Creates a letters-only request of the given length.
	pub fn new(length: i64) -> Self {
		Self { length, ..Self::default() }
	}

	pub fn with_digits(mut self, include_digits: bool) -> Self {
		self.include_digits = include_digits;
		self
	}

	/// Sets both case flags at once.
	pub fn with_case(mut self, include_uppercase: bool, include_lowercase: bool) -> Self {
		self.include_uppercase = include_uppercase;
		self.include_lowercase = include_lowercase;
		self
	}

	pub fn with_letter_policy(mut self, letter_policy: LetterPolicy) -> Self {
		self.letter_policy = letter_policy;
		self
	}

	/// Caps rejection sampling. `0` restores the unbounded behaviour.
	pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
		self.max_attempts = NonZeroUsize::new(max_attempts);
		self
	}
}
