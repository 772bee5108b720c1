use crate::request::LetterPolicy;

/// ASCII digits, `0` to `9`.
pub const DIGITS: &[u8] = b"0123456789";

/// ASCII uppercase letters, `A` to `Z`.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII lowercase letters, `a` to `z`.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Punctuation the classifier treats as case-neutral.
pub const SPECIAL_CHARACTERS: &str = "~`'\"!@#$%^&*()-_+=,.;\\|{}[]";

/// The alphabet a single generation call draws from.
///
/// Built by concatenating the selected character classes in a fixed order:
/// digits, then uppercase, then lowercase. It lives only for the duration of
/// one call and is never shared.
///
/// # Invariants
/// - Symbols are ASCII, so byte length equals character count
/// - Under [`LetterPolicy::Legacy`] both letter classes are always present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
	symbols: Vec<u8>,
}

impl Alphabet {
	/// Builds the composite alphabet for a request.
	///
	/// Under [`LetterPolicy::Legacy`] the case flags are ignored and both letter
	/// classes are included. Under [`LetterPolicy::Strict`] they select the
	/// letter classes, which may leave the alphabet empty.
	pub fn compose(
		include_digits: bool,
		include_uppercase: bool,
		include_lowercase: bool,
		policy: LetterPolicy,
	) -> Self {
		let (uppercase, lowercase) = match policy {
			LetterPolicy::Legacy => (true, true),
			LetterPolicy::Strict => (include_uppercase, include_lowercase),
		};

		let mut symbols = Vec::with_capacity(DIGITS.len() + UPPERCASE.len() + LOWERCASE.len());
		if include_digits {
			symbols.extend_from_slice(DIGITS);
		}
		if uppercase {
			symbols.extend_from_slice(UPPERCASE);
		}
		if lowercase {
			symbols.extend_from_slice(LOWERCASE);
		}

		Self { symbols }
	}

	/// Number of symbols to choose from.
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	/// Returns `true` when no class was selected.
	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}

	/// Raw ASCII symbols, in composition order.
	pub fn as_bytes(&self) -> &[u8] {
		&self.symbols
	}

	/// Returns the symbol at `index`, or `None` when out of range.
	pub fn symbol(&self, index: usize) -> Option<char> {
		self.symbols.get(index).map(|&b| b as char)
	}

	/// Returns `true` if `c` can be drawn from this alphabet.
	pub fn contains(&self, c: char) -> bool {
		c.is_ascii() && self.symbols.contains(&(c as u8))
	}
}
