//! Error types for the cipher engine
//!
//! Every error is a construction-time or request-time caller mistake. None
//! are retried internally: the engine either has a valid configuration or
//! refuses to exist.

use thiserror::Error;

/// Errors that can occur while building or driving an Enigma machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnigmaError {
    /// Supplied wiring table is not a bijection over the alphabet
    #[error("Invalid permutation: {reason}")]
    InvalidPermutation { reason: String },

    /// A plugboard pair reuses a symbol or pairs a symbol with itself
    #[error("Invalid plugboard configuration: {reason}")]
    InvalidPlugboardConfig { reason: String },

    /// Reflector wiring has a fixed point or is not an involution
    #[error("Invalid reflector configuration: {reason}")]
    InvalidReflectorConfig { reason: String },

    /// Rotor notch or initial offset outside the alphabet range
    #[error("Invalid rotor configuration: {what} {value} outside [0, {limit})")]
    InvalidRotorConfig {
        what: &'static str,
        value: usize,
        limit: usize,
    },

    /// Request-time symbol outside the configured alphabet
    #[error("Symbol {symbol:?} is not in the machine alphabet")]
    InvalidSymbol { symbol: char },
}
