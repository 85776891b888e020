//! Machine configuration and validation
//!
//! A [`MachineConfig`] is the single configuration type the engine is built
//! from: rotor choice and order, initial offsets, reflector choice, and the
//! plugboard pair list. It is plain data with serde derives so collaborators
//! can supply configurations as values; validation happens here and again,
//! fail-closed, at engine construction.

use serde::{Deserialize, Serialize};

use crate::domain::alphabet::{Alphabet, ALPHABET_SIZE};
use crate::domain::catalog::{ReflectorModel, RotorModel};
use crate::domain::plugboard::Plugboard;
use crate::error::EnigmaError;

/// Complete machine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotor models in signal-entry order: right, middle, left.
    pub rotors: [RotorModel; 3],
    /// Initial rotor offsets, same order, each in `[0, 26)`.
    pub offsets: [usize; 3],
    /// Reflector model.
    pub reflector: ReflectorModel,
    /// Plugboard symbol pairs; empty for a board with no leads.
    pub plugboard_pairs: Vec<(char, char)>,
}

impl Default for MachineConfig {
    /// The reference machine: rotors III (right), II (middle), I (left),
    /// reflector B, all offsets zero, no plugboard leads.
    fn default() -> Self {
        Self {
            rotors: [RotorModel::III, RotorModel::II, RotorModel::I],
            offsets: [0, 0, 0],
            reflector: ReflectorModel::B,
            plugboard_pairs: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Validate the configuration without building an engine.
    pub fn validate(&self) -> Result<(), EnigmaError> {
        for value in self.offsets {
            if value >= ALPHABET_SIZE {
                return Err(EnigmaError::InvalidRotorConfig {
                    what: "offset",
                    value,
                    limit: ALPHABET_SIZE,
                });
            }
        }
        // Exercises the full plugboard validation (self-pairs, reuse,
        // foreign symbols)
        Plugboard::from_pairs(&self.plugboard_pairs, &Alphabet::new())?;
        Ok(())
    }
}

/// Fluent builder for [`MachineConfig`].
///
/// # Example
///
/// ```ignore
/// let config = MachineConfigBuilder::new()
///     .rotors([RotorModel::III, RotorModel::II, RotorModel::I])
///     .offsets([0, 0, 0])
///     .reflector(ReflectorModel::B)
///     .plug('C', 'Q')
///     .build()?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct MachineConfigBuilder {
    config: MachineConfig,
}

impl MachineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotor models in signal-entry order: right, middle, left.
    pub fn rotors(mut self, rotors: [RotorModel; 3]) -> Self {
        self.config.rotors = rotors;
        self
    }

    /// Initial offsets in the same order.
    pub fn offsets(mut self, offsets: [usize; 3]) -> Self {
        self.config.offsets = offsets;
        self
    }

    pub fn reflector(mut self, reflector: ReflectorModel) -> Self {
        self.config.reflector = reflector;
        self
    }

    /// Add one plugboard pair.
    pub fn plug(mut self, a: char, b: char) -> Self {
        self.config.plugboard_pairs.push((a, b));
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<MachineConfig, EnigmaError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
