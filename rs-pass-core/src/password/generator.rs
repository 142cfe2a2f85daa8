//! High-level facade binding configuration, strategies and validation.

use log::debug;

use super::config::{GenerationConfig, MAX_LENGTH, MIN_LENGTH};
use super::pronounceable::PronounceableStrategy;
use super::standard::StandardStrategy;
use super::strategy::GenerationStrategy;
use super::validator::{
	CharacterTypeValidator, MaxLengthValidator, MinLengthValidator, ValidationOutcome,
	ValidationPipeline,
};
use crate::error::{PasswordError, Result};
use crate::random::SecureRandomSource;

/// Largest batch a single call may request.
pub const MAX_BATCH: usize = 100;

/// High-level password generator bound to one configuration.
///
/// # Responsibilities
/// - Own the entropy source for the lifetime of the generator
/// - Pick the generation strategy implied by the configuration
/// - Offer single, batch and validation-only entry points
///
/// # Notes
/// - The configuration can be mutated freely between calls; a single
///   call reads a consistent snapshot since nothing here suspends.
/// - Candidates are returned by value and never retained.
pub struct PasswordGenerator {
	config: GenerationConfig,
	rng: SecureRandomSource,
}

impl PasswordGenerator {
	/// Creates a generator with the default configuration.
	///
	/// # Errors
	/// Returns `EntropyUnavailable` if the OS entropy source cannot be
	/// opened. Fatal; there is no fallback.
	pub fn new() -> Result<Self> {
		Self::with_config(GenerationConfig::default())
	}

	/// Creates a generator with the given configuration.
	///
	/// # Errors
	/// Returns `EntropyUnavailable` if the OS entropy source cannot be
	/// opened.
	pub fn with_config(config: GenerationConfig) -> Result<Self> {
		Ok(Self {
			config,
			rng: SecureRandomSource::new()?,
		})
	}

	/// Returns the active configuration.
	pub fn config(&self) -> &GenerationConfig {
		&self.config
	}

	/// Returns the active configuration for in-place mutation.
	pub fn config_mut(&mut self) -> &mut GenerationConfig {
		&mut self.config
	}

	/// Replaces the active configuration.
	pub fn set_config(&mut self, config: GenerationConfig) {
		self.config = config;
	}

	/// Generates one candidate under the active configuration.
	///
	/// The pronounceable flag selects the strategy; otherwise the
	/// standard strategy runs over the enabled character sets.
	///
	/// # Errors
	/// - `InvalidConfiguration` if standard mode is selected and no
	///   character set is enabled. Checked before any randomness is
	///   consumed.
	/// - Strategy and entropy-source errors are propagated as-is.
	pub fn generate(&mut self) -> Result<String> {
		if self.config.pronounceable {
			debug!("generating {} character pronounceable password", self.config.length());
			let strategy = PronounceableStrategy::new();
			return strategy.generate(self.config.length(), &mut self.rng);
		}

		if !self.config.has_any_set() {
			return Err(PasswordError::InvalidConfiguration(
				"At least one character type must be enabled".to_owned(),
			));
		}

		debug!("generating {} character standard password", self.config.length());
		let strategy = StandardStrategy::with_sets(self.config.enabled_sets());
		strategy.generate(self.config.length(), &mut self.rng)
	}

	/// Generates `count` candidates. Duplicates across the batch are
	/// possible and not filtered.
	///
	/// # Errors
	/// - `InvalidBatchCount` if `count` is zero or exceeds [`MAX_BATCH`],
	///   rejected before any generation occurs.
	/// - The first `generate` failure aborts the batch.
	pub fn generate_batch(&mut self, count: usize) -> Result<Vec<String>> {
		if count == 0 || count > MAX_BATCH {
			return Err(PasswordError::InvalidBatchCount { count });
		}

		debug!("generating batch of {} passwords", count);
		let mut passwords = Vec::with_capacity(count);
		for _ in 0..count {
			passwords.push(self.generate()?);
		}
		Ok(passwords)
	}

	/// Runs the configuration-implied rules against a candidate without
	/// generating anything. Pure; no randomness is consumed.
	///
	/// The implied pipeline checks the policy length bounds and the
	/// presence of every enabled character category.
	pub fn validate(&self, candidate: &str) -> ValidationOutcome {
		self.build_pipeline().validate(candidate)
	}

	/// Assembles the validation pipeline implied by the configuration.
	fn build_pipeline(&self) -> ValidationPipeline {
		let mut pipeline = ValidationPipeline::new();
		pipeline.add_rule(MinLengthValidator::new(MIN_LENGTH));
		pipeline.add_rule(MaxLengthValidator::new(MAX_LENGTH));
		pipeline.add_rule(CharacterTypeValidator::new(
			self.config.include_uppercase,
			self.config.include_lowercase,
			self.config.include_digits,
			self.config.include_symbols,
		));
		pipeline
	}
}
