//! Generation configuration shared between the facade and its callers.

use serde::{Deserialize, Serialize};

use super::charset::{CharacterSet, DEFAULT_SYMBOLS};
use crate::error::{PasswordError, Result};

/// Smallest password length the policy accepts.
pub const MIN_LENGTH: usize = 8;

/// Largest password length the policy accepts.
pub const MAX_LENGTH: usize = 128;

/// Value object describing one generation request.
///
/// `GenerationConfig` contains both **composition switches** (which
/// character sets participate, which strategy runs) and the **target
/// length**, kept behind a validating setter.
///
/// # Responsibilities
/// - Track the inclusion flags, custom symbol alphabet and target length
/// - Derive the ordered list of enabled character sets for the standard
///   strategy
///
/// # Invariants
/// - `length` is always within `[MIN_LENGTH, MAX_LENGTH]`
/// - The custom symbol alphabet, when unset, falls back to
///   [`DEFAULT_SYMBOLS`]
///
/// The caller owns the configuration and may mutate it between calls;
/// a single generation call only reads it. Sharing one instance across
/// threads while mutating it is the caller's problem to serialize.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
	/// Target password length. Kept private so the policy range holds.
	length: usize,

	/// Include `a`-`z` in standard generation.
	pub include_lowercase: bool,

	/// Include `A`-`Z` in standard generation.
	pub include_uppercase: bool,

	/// Include `0`-`9` in standard generation.
	pub include_digits: bool,

	/// Include the symbol alphabet in standard generation.
	pub include_symbols: bool,

	/// Custom symbol alphabet; `None` means the documented default.
	custom_symbols: Option<String>,

	/// Generate syllable-based pronounceable passwords instead of
	/// character-set composition.
	pub pronounceable: bool,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			length: 16,
			include_lowercase: true,
			include_uppercase: true,
			include_digits: true,
			include_symbols: true,
			custom_symbols: None,
			pronounceable: false,
		}
	}
}

impl GenerationConfig {
	/// Returns the configured target length.
	pub fn length(&self) -> usize {
		self.length
	}

	/// Sets the target length.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `length` is outside
	/// `[MIN_LENGTH, MAX_LENGTH]`.
	pub fn set_length(&mut self, length: usize) -> Result<()> {
		if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
			return Err(PasswordError::InvalidConfiguration(format!(
				"Length must be between {} and {}, got {}",
				MIN_LENGTH, MAX_LENGTH, length
			)));
		}
		self.length = length;
		Ok(())
	}

	/// Returns the active symbol alphabet (custom, or the default).
	pub fn symbols(&self) -> &str {
		self.custom_symbols.as_deref().unwrap_or(DEFAULT_SYMBOLS)
	}

	/// Replaces the symbol alphabet wholesale.
	pub fn set_symbols<S: Into<String>>(&mut self, symbols: S) {
		self.custom_symbols = Some(symbols.into());
	}

	/// True if at least one of the four inclusion flags is set.
	pub fn has_any_set(&self) -> bool {
		self.include_lowercase
			|| self.include_uppercase
			|| self.include_digits
			|| self.include_symbols
	}

	/// Builds the enabled character sets in their fixed registration
	/// order: lowercase, uppercase, digits, symbols.
	pub fn enabled_sets(&self) -> Vec<CharacterSet> {
		let mut sets = Vec::new();
		if self.include_lowercase {
			sets.push(CharacterSet::Lowercase);
		}
		if self.include_uppercase {
			sets.push(CharacterSet::Uppercase);
		}
		if self.include_digits {
			sets.push(CharacterSet::Digit);
		}
		if self.include_symbols {
			sets.push(CharacterSet::Symbol(self.symbols().to_owned()));
		}
		sets
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config() {
		let config = GenerationConfig::default();
		assert_eq!(config.length(), 16);
		assert!(config.include_lowercase);
		assert!(config.include_uppercase);
		assert!(config.include_digits);
		assert!(config.include_symbols);
		assert!(!config.pronounceable);
		assert_eq!(config.symbols(), DEFAULT_SYMBOLS);
	}

	#[test]
	fn test_set_length_enforces_policy_range() {
		let mut config = GenerationConfig::default();
		assert!(config.set_length(7).is_err());
		assert!(config.set_length(129).is_err());
		assert!(config.set_length(8).is_ok());
		assert_eq!(config.length(), 8);
		assert!(config.set_length(128).is_ok());
		assert_eq!(config.length(), 128);
	}

	#[test]
	fn test_rejected_length_leaves_config_untouched() {
		let mut config = GenerationConfig::default();
		config.set_length(20).unwrap();
		assert!(config.set_length(500).is_err());
		assert_eq!(config.length(), 20);
	}

	#[test]
	fn test_custom_symbols_replace_default() {
		let mut config = GenerationConfig::default();
		config.set_symbols("#!%");
		assert_eq!(config.symbols(), "#!%");
	}

	#[test]
	fn test_enabled_sets_order() {
		let config = GenerationConfig::default();
		let sets = config.enabled_sets();
		assert_eq!(sets.len(), 4);
		assert_eq!(sets[0], CharacterSet::Lowercase);
		assert_eq!(sets[1], CharacterSet::Uppercase);
		assert_eq!(sets[2], CharacterSet::Digit);
		assert_eq!(sets[3], CharacterSet::Symbol(DEFAULT_SYMBOLS.to_owned()));

		let mut partial = GenerationConfig::default();
		partial.include_uppercase = false;
		partial.include_symbols = false;
		let sets = partial.enabled_sets();
		assert_eq!(sets, vec![CharacterSet::Lowercase, CharacterSet::Digit]);
	}

	#[test]
	fn test_has_any_set() {
		let mut config = GenerationConfig::default();
		assert!(config.has_any_set());
		config.include_lowercase = false;
		config.include_uppercase = false;
		config.include_digits = false;
		config.include_symbols = false;
		assert!(!config.has_any_set());
	}

	#[test]
	fn test_serde_round_trip() {
		let mut config = GenerationConfig::default();
		config.set_length(24).unwrap();
		config.set_symbols("@#");
		let json = serde_json::to_string(&config).unwrap();
		let restored: GenerationConfig = serde_json::from_str(&json).unwrap();
		assert_eq!(restored, config);
	}
}
