//! Character-set composition strategy.

use super::charset::CharacterSet;
use super::strategy::GenerationStrategy;
use crate::error::{PasswordError, Result};
use crate::random::RandomSource;

/// Draws from the union of configured character sets, guaranteeing at
/// least one character from each set whenever the requested length
/// permits.
///
/// # Responsibilities
/// - Keep the configured sets in registration order
/// - Seed the output with one guaranteed character per set
/// - Fill the remainder from the union alphabet and shuffle
///
/// # Behavior
/// The guaranteed-inclusion pass walks the sets in registration order;
/// when the requested length is smaller than the number of sets, only
/// the first `length` sets contribute and the rest are skipped. A
/// Fisher-Yates shuffle over the finished buffer decorrelates each
/// position from the set that produced it, so the guaranteed characters
/// do not cluster at the front.
#[derive(Debug, Default)]
pub struct StandardStrategy {
	sets: Vec<CharacterSet>,
}

impl StandardStrategy {
	/// Creates a strategy with no character sets configured.
	pub fn new() -> Self {
		Self { sets: Vec::new() }
	}

	/// Creates a strategy from an ordered list of character sets.
	pub fn with_sets(sets: Vec<CharacterSet>) -> Self {
		Self { sets }
	}

	/// Appends a character set. Registration order is generation order.
	pub fn add_character_set(&mut self, set: CharacterSet) {
		self.sets.push(set);
	}

	/// Removes all configured character sets.
	pub fn clear_character_sets(&mut self) {
		self.sets.clear();
	}

	/// Returns the configured sets in registration order.
	pub fn character_sets(&self) -> &[CharacterSet] {
		&self.sets
	}
}

/// Uniformly samples one character from a non-empty alphabet.
fn sample_char(alphabet: &[char], rng: &mut dyn RandomSource) -> Result<char> {
	let index = rng.sample(0, (alphabet.len() - 1) as u32)? as usize;
	Ok(alphabet[index])
}

impl GenerationStrategy for StandardStrategy {
	fn generate(&self, length: usize, rng: &mut dyn RandomSource) -> Result<String> {
		if self.sets.is_empty() {
			return Err(PasswordError::NoCharacterSets);
		}

		let union: Vec<char> = self
			.sets
			.iter()
			.flat_map(|set| set.characters().chars())
			.collect();
		if union.is_empty() {
			return Err(PasswordError::EmptyAlphabet);
		}

		let mut password: Vec<char> = Vec::with_capacity(length);

		// One guaranteed character per set, in registration order.
		// Sets whose alphabet is empty contribute nothing here.
		for set in &self.sets {
			if password.len() >= length {
				break;
			}
			let alphabet: Vec<char> = set.characters().chars().collect();
			if alphabet.is_empty() {
				continue;
			}
			password.push(sample_char(&alphabet, rng)?);
		}

		// Fill the remaining positions from the union alphabet.
		while password.len() < length {
			password.push(sample_char(&union, rng)?);
		}

		// Fisher-Yates, from the last position down to 1.
		for i in (1..password.len()).rev() {
			let j = rng.sample(0, i as u32)? as usize;
			password.swap(i, j);
		}

		Ok(password.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::{ScriptedSource, SecureRandomSource};

	#[test]
	fn test_no_sets_fails() {
		let strategy = StandardStrategy::new();
		let mut rng = SecureRandomSource::new().unwrap();
		assert_eq!(
			strategy.generate(12, &mut rng),
			Err(PasswordError::NoCharacterSets)
		);
	}

	#[test]
	fn test_empty_union_fails() {
		let strategy = StandardStrategy::with_sets(vec![CharacterSet::Symbol(String::new())]);
		let mut rng = SecureRandomSource::new().unwrap();
		assert_eq!(
			strategy.generate(12, &mut rng),
			Err(PasswordError::EmptyAlphabet)
		);
	}

	#[test]
	fn test_each_set_is_represented() {
		let strategy = StandardStrategy::with_sets(vec![
			CharacterSet::Lowercase,
			CharacterSet::Uppercase,
			CharacterSet::Digit,
			CharacterSet::default_symbols(),
		]);
		let mut rng = SecureRandomSource::new().unwrap();

		for _ in 0..50 {
			let password = strategy.generate(8, &mut rng).unwrap();
			assert_eq!(password.chars().count(), 8);
			assert!(password.chars().any(|c| c.is_ascii_lowercase()));
			assert!(password.chars().any(|c| c.is_ascii_uppercase()));
			assert!(password.chars().any(|c| c.is_ascii_digit()));
			assert!(password.chars().any(|c| !c.is_ascii_alphanumeric()));
		}
	}

	#[test]
	fn test_length_shorter_than_set_count() {
		// Only the first two sets get their guaranteed character; the
		// fill pass never runs.
		let strategy = StandardStrategy::with_sets(vec![
			CharacterSet::Lowercase,
			CharacterSet::Uppercase,
			CharacterSet::Digit,
			CharacterSet::default_symbols(),
		]);
		let mut rng = SecureRandomSource::new().unwrap();

		for _ in 0..20 {
			let password = strategy.generate(2, &mut rng).unwrap();
			assert_eq!(password.chars().count(), 2);
			assert!(password.chars().any(|c| c.is_ascii_lowercase()));
			assert!(password.chars().any(|c| c.is_ascii_uppercase()));
		}
	}

	#[test]
	fn test_draw_order_is_guarantee_fill_shuffle() {
		// Draws: guarantee '0', fill '1' and '2', then shuffle picks
		// j=0 for i=2 (swap) and j=1 for i=1 (no-op): "012" -> "210".
		let strategy = StandardStrategy::with_sets(vec![CharacterSet::Digit]);
		let mut rng = ScriptedSource::new(vec![0, 1, 2, 0, 1]);
		assert_eq!(strategy.generate(3, &mut rng).unwrap(), "210");
	}

	#[test]
	fn test_add_and_clear_sets() {
		let mut strategy = StandardStrategy::new();
		strategy.add_character_set(CharacterSet::Digit);
		strategy.add_character_set(CharacterSet::Lowercase);
		assert_eq!(
			strategy.character_sets(),
			&[CharacterSet::Digit, CharacterSet::Lowercase]
		);
		strategy.clear_character_sets();
		assert!(strategy.character_sets().is_empty());
	}
}
