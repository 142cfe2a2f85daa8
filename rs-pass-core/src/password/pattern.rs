//! Template-driven strategy.

use super::strategy::GenerationStrategy;
use crate::error::{PasswordError, Result};
use crate::random::RandomSource;

const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT_CHARS: &str = "0123456789";
const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Emits characters following a template of class markers and literals.
///
/// Template characters `L`, `U`, `D` and `S` stand for a random
/// lowercase letter, uppercase letter, digit or symbol; every other
/// template character is emitted verbatim. When the requested length
/// exceeds the template, the template repeats cyclically.
///
/// The class alphabets are fixed and internal to this strategy; they
/// are independent of whatever character sets the standard strategy is
/// configured with.
#[derive(Debug, Clone)]
pub struct PatternStrategy {
	pattern: String,
}

impl PatternStrategy {
	/// Creates a strategy for the given template.
	pub fn new<S: Into<String>>(pattern: S) -> Self {
		Self { pattern: pattern.into() }
	}

	/// Replaces the template.
	pub fn set_pattern<S: Into<String>>(&mut self, pattern: S) {
		self.pattern = pattern.into();
	}

	/// Returns the current template.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Resolves one template character to an output character.
	fn class_char(marker: char, rng: &mut dyn RandomSource) -> Result<char> {
		let alphabet = match marker {
			'L' => LOWERCASE_CHARS,
			'U' => UPPERCASE_CHARS,
			'D' => DIGIT_CHARS,
			'S' => SYMBOL_CHARS,
			literal => return Ok(literal),
		};
		// The class alphabets are ASCII, so byte indexing is safe.
		let index = rng.sample(0, (alphabet.len() - 1) as u32)? as usize;
		Ok(alphabet.as_bytes()[index] as char)
	}
}

impl GenerationStrategy for PatternStrategy {
	fn generate(&self, length: usize, rng: &mut dyn RandomSource) -> Result<String> {
		if self.pattern.is_empty() {
			return Err(PasswordError::EmptyPattern);
		}

		let template: Vec<char> = self.pattern.chars().collect();
		let mut password = String::with_capacity(length);
		for i in 0..length {
			let marker = template[i % template.len()];
			password.push(Self::class_char(marker, rng)?);
		}

		Ok(password)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::{ScriptedSource, SecureRandomSource};

	#[test]
	fn test_empty_pattern_fails() {
		let strategy = PatternStrategy::new("");
		let mut rng = SecureRandomSource::new().unwrap();
		assert_eq!(
			strategy.generate(8, &mut rng),
			Err(PasswordError::EmptyPattern)
		);
	}

	#[test]
	fn test_template_repeats_cyclically() {
		let strategy = PatternStrategy::new("LUD");
		let mut rng = SecureRandomSource::new().unwrap();

		let password: Vec<char> = strategy.generate(7, &mut rng).unwrap().chars().collect();
		assert_eq!(password.len(), 7);
		for i in [0, 3, 6] {
			assert!(password[i].is_ascii_lowercase(), "position {} in {:?}", i, password);
		}
		for i in [1, 4] {
			assert!(password[i].is_ascii_uppercase(), "position {} in {:?}", i, password);
		}
		for i in [2, 5] {
			assert!(password[i].is_ascii_digit(), "position {} in {:?}", i, password);
		}
	}

	#[test]
	fn test_literals_pass_through() {
		// 'a', '-' and 'b' are not class markers; no draws happen.
		let strategy = PatternStrategy::new("a-b");
		let mut rng = ScriptedSource::new(vec![]);
		assert_eq!(strategy.generate(5, &mut rng).unwrap(), "a-ba-");
	}

	#[test]
	fn test_class_markers_index_their_alphabets() {
		let strategy = PatternStrategy::new("LUDS");
		let mut rng = ScriptedSource::new(vec![0, 0, 0, 0]);
		assert_eq!(strategy.generate(4, &mut rng).unwrap(), "aA0!");
	}

	#[test]
	fn test_set_pattern_replaces_template() {
		let mut strategy = PatternStrategy::new("LLLL");
		strategy.set_pattern("DD");
		assert_eq!(strategy.pattern(), "DD");

		let mut rng = ScriptedSource::new(vec![3, 7, 9]);
		assert_eq!(strategy.generate(3, &mut rng).unwrap(), "379");
	}
}
