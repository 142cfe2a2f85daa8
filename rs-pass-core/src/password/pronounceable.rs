//! Syllable-based pronounceable strategy.

use super::strategy::GenerationStrategy;
use crate::error::{PasswordError, Result};
use crate::random::RandomSource;

/// Two-character consonant+vowel syllables the strategy concatenates.
#[rustfmt::skip]
const SYLLABLES: [&str; 95] = [
	"ba", "be", "bi", "bo", "bu", "ca", "ce", "ci", "co", "cu",
	"da", "de", "di", "do", "du", "fa", "fe", "fi", "fo", "fu",
	"ga", "ge", "gi", "go", "gu", "ha", "he", "hi", "ho", "hu",
	"ja", "je", "ji", "jo", "ju", "ka", "ke", "ki", "ko", "ku",
	"la", "le", "li", "lo", "lu", "ma", "me", "mi", "mo", "mu",
	"na", "ne", "ni", "no", "nu", "pa", "pe", "pi", "po", "pu",
	"ra", "re", "ri", "ro", "ru", "sa", "se", "si", "so", "su",
	"ta", "te", "ti", "to", "tu", "va", "ve", "vi", "vo", "vu",
	"wa", "we", "wi", "wo", "wu", "ya", "ye", "yi", "yo", "yu",
	"za", "ze", "zi", "zo", "zu",
];

/// Builds approximately pronounceable passwords from random syllables,
/// with optional capitalization and digit interjection.
///
/// # Behavior
/// Syllables are appended until the accumulator reaches the target
/// length, then the accumulator is truncated to the exact length.
/// After each syllable:
/// - with odds of one in `capital_one_in` (and an accumulator of at
///   least two characters), the character two positions from the end is
///   uppercased;
/// - with odds of one in `digit_one_in` (and the target length not yet
///   reached), a single random digit is appended.
///
/// # Notes
/// - Truncation can cut a syllable or a trailing digit in half. That is
///   accepted behavior, not a defect.
/// - The odds draws are consumed even when the trailing guard rejects
///   the effect, keeping the draw sequence independent of accumulator
///   state.
#[derive(Debug, Clone)]
pub struct PronounceableStrategy {
	include_capitals: bool,
	include_numbers: bool,
	capital_one_in: u32,
	digit_one_in: u32,
}

impl Default for PronounceableStrategy {
	fn default() -> Self {
		Self {
			include_capitals: true,
			include_numbers: true,
			capital_one_in: 3,
			digit_one_in: 4,
		}
	}
}

impl PronounceableStrategy {
	/// Creates a strategy with capitals and digits enabled, at the
	/// default odds of 1 in 3 and 1 in 4.
	pub fn new() -> Self {
		Self::default()
	}

	/// Enables or disables random capitalization.
	pub fn set_include_capitals(&mut self, include: bool) {
		self.include_capitals = include;
	}

	/// Enables or disables digit interjection.
	pub fn set_include_numbers(&mut self, include: bool) {
		self.include_numbers = include;
	}

	/// Sets the capitalization odds to one in `one_in`.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `one_in` is zero.
	pub fn set_capital_one_in(&mut self, one_in: u32) -> Result<()> {
		if one_in == 0 {
			return Err(PasswordError::InvalidConfiguration(
				"Capitalization odds must be at least 1".to_owned(),
			));
		}
		self.capital_one_in = one_in;
		Ok(())
	}

	/// Sets the digit-interjection odds to one in `one_in`.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `one_in` is zero.
	pub fn set_digit_one_in(&mut self, one_in: u32) -> Result<()> {
		if one_in == 0 {
			return Err(PasswordError::InvalidConfiguration(
				"Digit odds must be at least 1".to_owned(),
			));
		}
		self.digit_one_in = one_in;
		Ok(())
	}
}

impl GenerationStrategy for PronounceableStrategy {
	fn generate(&self, length: usize, rng: &mut dyn RandomSource) -> Result<String> {
		let mut password: Vec<char> = Vec::with_capacity(length + 2);

		while password.len() < length {
			let index = rng.sample(0, (SYLLABLES.len() - 1) as u32)? as usize;
			password.extend(SYLLABLES[index].chars());

			if self.include_capitals
				&& rng.sample(0, self.capital_one_in - 1)? == 0
				&& password.len() >= 2
			{
				let i = password.len() - 2;
				password[i] = password[i].to_ascii_uppercase();
			}

			if self.include_numbers
				&& rng.sample(0, self.digit_one_in - 1)? == 0
				&& password.len() < length
			{
				let digit = rng.sample(0, 9)?;
				password.push((b'0' + digit as u8) as char);
			}
		}

		password.truncate(length);
		Ok(password.into_iter().collect())
	}
}
