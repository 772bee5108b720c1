use log::{debug, trace, warn};

use crate::alphabet::{Alphabet, DIGITS};
use crate::classifier::contains_digit;
use crate::error::{Error, Result};
use crate::request::GenerationRequest;
use crate::source::{RandomSource, SecureSource};

/// Random string generator.
///
/// # Responsibilities
/// - Resolve a request into a composite [`Alphabet`]
/// - Draw each position uniformly from that alphabet
/// - Regenerate whole candidates until one contains a digit, when digits are requested
///
/// The generator holds nothing but its random source, so one instance can
/// serve any number of requests.
#[derive(Debug, Clone, Default)]
pub struct Generator<S = SecureSource> {
	source: S,
}

impl Generator<SecureSource> {
	/// Creates a generator drawing from the thread-local secure generator.
	pub fn new() -> Self {
		Self { source: SecureSource::new() }
	}
}

impl<S: RandomSource> Generator<S> {
	/// Creates a generator drawing from `source`.
	pub fn with_source(source: S) -> Self {
		Self { source }
	}

	/// Consumes the generator and returns its source.
	pub fn into_source(self) -> S {
		self.source
	}

	/// Generates a string of uppercase and lowercase letters.
	///
	/// # Errors
	/// Returns [`Error::InvalidArgument`] if `length` is negative.
	pub fn generate(&mut self, length: i64) -> Result<String> {
		self.generate_with_digits(length, false)
	}

	/// Generates a string of letters, with digits mixed in when
	/// `include_digits` is set. In that case the result always contains at
	/// least one digit.
	///
	/// # Errors
	/// Returns [`Error::InvalidArgument`] if `length` is negative.
	pub fn generate_with_digits(&mut self, length: i64, include_digits: bool) -> Result<String> {
		self.generate_with(length, include_digits, true, true)
	}

	/// Four-flag form of [`Generator::generate_with_digits`].
	///
	/// The case flags are accepted but, as with every request using
	/// [`LetterPolicy::Legacy`](crate::LetterPolicy::Legacy), they do not narrow
	/// the alphabet. Use [`Generator::generate_request`] with
	/// [`LetterPolicy::Strict`](crate::LetterPolicy::Strict) to honour them.
	///
	/// # Errors
	/// Returns [`Error::InvalidArgument`] if `length` is negative.
	pub fn generate_with(
		&mut self,
		length: i64,
		include_digits: bool,
		include_uppercase: bool,
		include_lowercase: bool,
	) -> Result<String> {
		let request = GenerationRequest::new(length)
			.with_digits(include_digits)
			.with_case(include_uppercase, include_lowercase);
		self.generate_request(&request)
	}

	/// Generates a string for a fully specified request.
	///
	/// # Behavior
	/// - A zero length returns `""` without drawing anything.
	/// - Without digits, a single candidate is drawn and returned.
	/// - With digits, whole candidates are drawn until one contains a digit.
	///   If `max_attempts` is set and reached, one random position of the last
	///   candidate is overwritten with a random digit instead.
	///
	/// # Errors
	/// - [`Error::InvalidArgument`] if `length` is negative.
	/// - [`Error::LengthTooLarge`] if `length` does not fit in `usize`.
	/// - [`Error::EmptyAlphabet`] if the strict policy leaves nothing to draw from.
	pub fn generate_request(&mut self, request: &GenerationRequest) -> Result<String> {
		let length = checked_length(request.length)?;
		if length == 0 {
			return Ok(String::new());
		}

		let alphabet = Alphabet::compose(
			request.include_digits,
			request.include_uppercase,
			request.include_lowercase,
			request.letter_policy,
		);
		if alphabet.is_empty() {
			return Err(Error::EmptyAlphabet);
		}
		debug!("Generating {} chars from a {}-symbol alphabet", length, alphabet.len());

		if !request.include_digits {
			return Ok(self.sample(&alphabet, length));
		}

		let mut attempts: usize = 0;
		loop {
			let candidate = self.sample(&alphabet, length);
			attempts += 1;
			if contains_digit(Some(candidate.as_str())) {
				trace!("Accepted candidate after {} attempt(s)", attempts);
				return Ok(candidate);
			}
			trace!("Rejected candidate {} without digit", attempts);

			if let Some(max) = request.max_attempts {
				if attempts >= max.get() {
					warn!("No digit after {} attempts, forcing one", attempts);
					return Ok(self.force_digit(candidate));
				}
			}
		}
	}

	/// Draws `length` symbols independently and uniformly.
	fn sample(&mut self, alphabet: &Alphabet, length: usize) -> String {
		let symbols = alphabet.as_bytes();
		(0..length)
			.map(|_| symbols[self.source.next_index(symbols.len())] as char)
			.collect()
	}

	/// Overwrites one random position with a random digit.
	fn force_digit(&mut self, mut candidate: String) -> String {
		let position = self.source.next_index(candidate.len());
		let digit = DIGITS[self.source.next_index(DIGITS.len())] as char;
		// Candidates are ASCII, so every byte offset is a char boundary
		candidate.replace_range(position..=position, digit.encode_utf8(&mut [0; 4]));
		candidate
	}
}

/// Converts a requested length, telling negative values apart from ones
/// too large for the target's `usize`.
fn checked_length(length: i64) -> Result<usize> {
	if length < 0 {
		return Err(Error::InvalidArgument { length });
	}
	usize::try_from(length).map_err(|_| Error::LengthTooLarge { length })
}
