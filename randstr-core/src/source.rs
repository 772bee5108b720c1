use rand::rngs::ThreadRng;
use rand::{CryptoRng, Rng};

/// A source of uniform random indices.
///
/// The generator only ever asks for "an index in `[0, bound)`", so this is
/// the whole capability it needs. Production code uses [`SecureSource`];
/// tests can plug in a seeded or scripted implementation.
pub trait RandomSource {
	/// Draws an index uniformly in `[0, bound)`.
	///
	/// Callers never pass `bound == 0`.
	fn next_index(&mut self, bound: usize) -> usize;
}

/// Random source backed by a cryptographically secure generator.
///
/// The `CryptoRng` bound keeps weak generators out at compile time. The
/// default is the thread-local ChaCha generator from `rand`, reseeded from the
/// operating system.
#[derive(Debug, Clone)]
pub struct SecureSource<R = ThreadRng> {
	rng: R,
}

impl SecureSource<ThreadRng> {
	pub fn new() -> Self {
		Self { rng: rand::rng() }
	}
}

impl Default for SecureSource<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: CryptoRng> SecureSource<R> {
	/// Wraps an existing cryptographically secure generator.
	///
	/// Useful with a seeded `StdRng` for reproducible output.
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}
}

impl<R: CryptoRng> RandomSource for SecureSource<R> {
	fn next_index(&mut self, bound: usize) -> usize {
		self.rng.random_range(0..bound)
	}
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
	fn next_index(&mut self, bound: usize) -> usize {
		(**self).next_index(bound)
	}
}
