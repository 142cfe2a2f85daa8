//! Error types for the rs-pass core library.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, PasswordError>;

/// Errors produced by the password generation core.
///
/// Every fallible operation returns one of these kinds; nothing is
/// swallowed or retried internally. The caller decides presentation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
	/// The OS entropy source could not be opened or produced no data.
	/// Fatal at construction time; never downgraded to a weaker generator.
	#[error("Entropy source unavailable: {0}")]
	EntropyUnavailable(String),

	/// `sample` was called with `min > max`. Caller misuse.
	#[error("Invalid sampling range: min {min} is greater than max {max}")]
	InvalidRange {
		min: u32,
		max: u32,
	},

	/// The standard strategy was asked to generate with zero character sets.
	#[error("No character sets configured")]
	NoCharacterSets,

	/// The union of all configured alphabets contains no characters.
	#[error("No characters available for generation")]
	EmptyAlphabet,

	/// The pattern strategy was given an empty template.
	#[error("Pattern cannot be empty")]
	EmptyPattern,

	/// The configuration rejects generation before any randomness is consumed.
	#[error("Invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// Batch size outside the accepted policy bounds.
	#[error("Batch count must be between 1 and 100, got {count}")]
	InvalidBatchCount {
		count: usize,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_invalid_range() {
		let err = PasswordError::InvalidRange { min: 9, max: 3 };
		assert_eq!(
			format!("{}", err),
			"Invalid sampling range: min 9 is greater than max 3"
		);
	}

	#[test]
	fn test_display_no_character_sets() {
		let err = PasswordError::NoCharacterSets;
		assert_eq!(format!("{}", err), "No character sets configured");
	}

	#[test]
	fn test_display_invalid_batch_count() {
		let err = PasswordError::InvalidBatchCount { count: 101 };
		assert_eq!(
			format!("{}", err),
			"Batch count must be between 1 and 100, got 101"
		);
	}

	#[test]
	fn test_error_equality() {
		assert_eq!(PasswordError::EmptyPattern, PasswordError::EmptyPattern);
		assert_ne!(
			PasswordError::EmptyPattern,
			PasswordError::EmptyAlphabet
		);
	}
}
