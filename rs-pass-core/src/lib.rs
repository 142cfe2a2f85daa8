//! Secure password generation and validation library.
//!
//! This crate provides a composable password engine including:
//! - An OS-backed random source with unbiased range sampling
//! - Character-set, pattern and pronounceable generation strategies
//! - A rule-based validation pipeline with entropy scoring
//! - A high-level facade for single, batch and validation-only use
//!
//! Generation and validation are synchronous and self-contained: every
//! call reads a configuration snapshot, consumes the borrowed random
//! source and returns an owned result. The library never prints;
//! presentation belongs to the caller.

/// Error kinds shared across the crate.
pub mod error;

/// Core password generation and validation logic.
pub mod password;

/// Uniform sampling over the OS entropy source.
///
/// Exposed so callers can supply their own `RandomSource` to a strategy,
/// typically for deterministic tests.
pub mod random;
