/// Errors raised by string generation.
///
/// Classification never fails; malformed or absent input simply yields `false`.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
	/// The requested length was negative.
	#[error("Length must not be negative (got {length})")]
	InvalidArgument { length: i64 },

	/// The requested length does not fit in memory on this target.
	#[error("Length {length} exceeds the maximum supported on this platform")]
	LengthTooLarge { length: i64 },

	/// No character class was selected under [`LetterPolicy::Strict`](crate::LetterPolicy::Strict).
	#[error("No character class selected, alphabet is empty")]
	EmptyAlphabet,
}

pub type Result<T> = std::result::Result<T, Error>;
