//! Invertible mappings over the alphabet's ordinal space
//!
//! Rotors, the reflector, and the plugboard are all permutations of the 26
//! contact positions; rotors add a rotating offset on top (see
//! [`Rotor`](super::rotor::Rotor)). The inverse table is derived once at
//! construction so the backward signal path is a constant-time lookup.

use crate::domain::alphabet::ALPHABET_SIZE;
use crate::error::EnigmaError;

/// A bijection over `[0, 26)` stored as explicit forward and inverse tables.
///
/// Construction validates the bijection; a `Permutation` value is always
/// internally consistent: `invert(apply(i)) == i` for every index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    forward: [usize; ALPHABET_SIZE],
    inverse: [usize; ALPHABET_SIZE],
}

impl Permutation {
    /// Build a permutation from an explicit forward table.
    ///
    /// Fails with [`EnigmaError::InvalidPermutation`] if any entry is outside
    /// the alphabet or appears more than once.
    pub fn from_table(forward: [usize; ALPHABET_SIZE]) -> Result<Self, EnigmaError> {
        let mut inverse = [usize::MAX; ALPHABET_SIZE];
        for (input, &output) in forward.iter().enumerate() {
            if output >= ALPHABET_SIZE {
                return Err(EnigmaError::InvalidPermutation {
                    reason: format!("entry {output} at index {input} is outside the alphabet"),
                });
            }
            if inverse[output] != usize::MAX {
                return Err(EnigmaError::InvalidPermutation {
                    reason: format!(
                        "entry {output} appears at both index {} and index {input}",
                        inverse[output]
                    ),
                });
            }
            inverse[output] = input;
        }
        Ok(Self { forward, inverse })
    }

    /// Build a permutation from the letter-string notation of the published
    /// wiring tables, e.g. `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"` (input `A` maps to
    /// `E`, `B` to `K`, and so on).
    pub fn from_letters(letters: &str) -> Result<Self, EnigmaError> {
        let mut forward = [0usize; ALPHABET_SIZE];
        let mut count = 0;
        for (input, symbol) in letters.chars().enumerate() {
            if input >= ALPHABET_SIZE || !symbol.is_ascii_uppercase() {
                return Err(EnigmaError::InvalidPermutation {
                    reason: format!("wiring string {letters:?} is not 26 uppercase letters"),
                });
            }
            forward[input] = symbol as usize - 'A' as usize;
            count += 1;
        }
        if count != ALPHABET_SIZE {
            return Err(EnigmaError::InvalidPermutation {
                reason: format!("wiring string has {count} entries, expected {ALPHABET_SIZE}"),
            });
        }
        Self::from_table(forward)
    }

    /// The identity permutation: every index maps to itself.
    pub fn identity() -> Self {
        let mut table = [0usize; ALPHABET_SIZE];
        for (index, entry) in table.iter_mut().enumerate() {
            *entry = index;
        }
        Self {
            forward: table,
            inverse: table,
        }
    }

    /// Forward lookup.
    pub fn apply(&self, index: usize) -> usize {
        self.forward[index]
    }

    /// Inverse lookup: `invert(apply(i)) == i`.
    pub fn invert(&self, index: usize) -> usize {
        self.inverse[index]
    }

    /// Whether applying the permutation twice returns every index to itself.
    pub fn is_involution(&self) -> bool {
        (0..ALPHABET_SIZE).all(|index| self.forward[self.forward[index]] == index)
    }

    /// Whether any index maps to itself.
    pub fn has_fixed_point(&self) -> bool {
        (0..ALPHABET_SIZE).any(|index| self.forward[index] == index)
    }
}
