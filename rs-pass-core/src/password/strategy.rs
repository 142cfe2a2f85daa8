//! Contract shared by all password generation strategies.

use crate::error::Result;
use crate::random::RandomSource;

/// Turns a target length and a random source into one candidate string.
///
/// Strategies hold only their own configuration; the random source is
/// borrowed per call so a single entropy handle serves every strategy
/// without ever being cloned or re-seeded. Each call is independent and
/// produces a candidate owned exclusively by the caller.
pub trait GenerationStrategy {
	/// Generates one candidate of exactly `length` characters.
	///
	/// # Errors
	/// Strategy-specific configuration errors (`NoCharacterSets`,
	/// `EmptyAlphabet`, `EmptyPattern`) and any failure surfaced by the
	/// random source.
	fn generate(&self, length: usize, rng: &mut dyn RandomSource) -> Result<String>;
}
