//! Umkehrwalze: the reflector
//!
//! A fixed involutive permutation with no moving state. It turns the signal
//! back toward the rotor stack, and because it never maps a contact to
//! itself, the machine can never encipher a symbol to itself.

use crate::domain::permutation::Permutation;
use crate::error::EnigmaError;

/// The reflector. Has no offset and never steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    wiring: Permutation,
}

impl Reflector {
    /// Build a reflector from a wiring permutation.
    ///
    /// Fails with [`EnigmaError::InvalidReflectorConfig`] if the wiring is
    /// not an involution or maps any contact to itself.
    pub fn new(name: impl Into<String>, wiring: Permutation) -> Result<Self, EnigmaError> {
        let name = name.into();
        if !wiring.is_involution() {
            return Err(EnigmaError::InvalidReflectorConfig {
                reason: format!("{name} wiring is not an involution"),
            });
        }
        if wiring.has_fixed_point() {
            return Err(EnigmaError::InvalidReflectorConfig {
                reason: format!("{name} wiring maps a contact to itself"),
            });
        }
        Ok(Self { name, wiring })
    }

    /// Reflect an ordinal index back toward the rotor stack.
    pub fn reflect(&self, index: usize) -> usize {
        self.wiring.apply(index)
    }

    /// Display name, e.g. `"Reflector B"`.
    pub fn name(&self) -> &str {
        &self.name
    }
}
