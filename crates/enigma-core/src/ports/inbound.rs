//! Inbound port: the cipher engine's driving API
//!
//! Presentation layers (animation, command-line front ends) drive the engine
//! through [`CipherApi`] and consume [`TraceRecord`] values read-only. They
//! never mutate engine state directly; a multi-symbol message trace is just
//! repeated single-symbol calls.

use serde::Serialize;

use crate::domain::trace::TraceRecord;
use crate::error::EnigmaError;

/// The engine's one call boundary.
///
/// Calls on the same instance must be strictly sequential; every method that
/// mutates rotor offsets takes `&mut self`. Callers needing concurrency
/// serialize access or construct independent engines.
pub trait CipherApi {
    /// Encipher a single symbol, advancing the rotor stack once beforehand.
    ///
    /// Fails with [`EnigmaError::InvalidSymbol`] for symbols outside the
    /// machine alphabet; a rejected symbol does not step the rotors.
    fn encipher_one(&mut self, symbol: char) -> Result<TraceRecord, EnigmaError>;

    /// Current rotor offsets in right, middle, left order.
    fn offsets(&self) -> [usize; 3];

    /// Reset the rotor offsets without rebuilding the machine. Fails with
    /// [`EnigmaError::InvalidRotorConfig`] on out-of-range values, leaving
    /// the offsets unchanged.
    fn set_offsets(&mut self, offsets: [usize; 3]) -> Result<(), EnigmaError>;

    /// Read-only view of the machine state for inspection tooling.
    fn snapshot(&self) -> MachineSnapshot;
}

/// Read-only view of one rotor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RotorSnapshot {
    /// Display name, e.g. `"Rotor III"`.
    pub name: String,
    /// Notch letter.
    pub notch: char,
    /// Current offset in `[0, 26)`.
    pub offset: usize,
    /// Current offset as the letter showing in the rotor window.
    pub position: char,
}

/// Read-only view of the whole machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MachineSnapshot {
    /// Rotors in signal-entry order: right, middle, left.
    pub rotors: [RotorSnapshot; 3],
    /// Reflector display name.
    pub reflector: String,
}
