//! Random string generation and character classification.
//!
//! This crate provides:
//! - Uniform random strings over letters, optionally with digits
//! - A hard "at least one digit" guarantee through whole-string rejection sampling
//! - Predicates classifying strings as digit-containing, all-lowercase or all-uppercase
//!
//! Randomness is drawn from a cryptographically secure generator by default.
//! Tests and callers needing reproducibility can inject their own [`RandomSource`].

/// Constant character sets and the per-request composite alphabet.
pub mod alphabet;

/// Pure predicates over strings (digits, letter case).
pub mod classifier;

/// Error type shared by the whole crate.
pub mod error;

/// Random string generator with rejection sampling.
pub mod generator;

/// Serializable generation request and its policies.
pub mod request;

/// Injected randomness capability.
pub mod source;

pub use alphabet::Alphabet;
pub use classifier::{CharClasses, contains_digit, is_all_lowercase, is_all_uppercase};
pub use error::{Error, Result};
pub use generator::Generator;
pub use request::{GenerationRequest, LetterPolicy};
pub use source::{RandomSource, SecureSource};

/// Generates a letters-only string of `length` characters.
///
/// Uses a fresh secure source for each call.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `length` is negative.
pub fn generate(length: i64) -> Result<String> {
	Generator::new().generate(length)
}

/// Generates a string of `length` characters, guaranteeing a digit when
/// `include_digits` is set.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `length` is negative.
pub fn generate_with_digits(length: i64, include_digits: bool) -> Result<String> {
	Generator::new().generate_with_digits(length, include_digits)
}
