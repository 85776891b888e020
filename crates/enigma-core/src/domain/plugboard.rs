//! Steckerbrett: the plugboard
//!
//! An involutive permutation applied once on the way into the rotor stack
//! and once on the way out. Built from disjoint symbol pairs; symbols with
//! no lead plugged map to themselves.

use crate::domain::alphabet::{Alphabet, ALPHABET_SIZE};
use crate::domain::permutation::Permutation;
use crate::error::EnigmaError;

/// The plugboard. `swap(swap(i)) == i` holds for every index by
/// construction: the wiring is a union of disjoint 2-cycles plus identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plugboard {
    wiring: Permutation,
}

impl Plugboard {
    /// A board with no leads plugged: every symbol maps to itself.
    pub fn identity() -> Self {
        Self {
            wiring: Permutation::identity(),
        }
    }

    /// Build a board from symbol pairs.
    ///
    /// Fails with [`EnigmaError::InvalidPlugboardConfig`] if a pair names the
    /// same symbol twice, a symbol appears in more than one pair, or a pair
    /// uses a symbol outside the alphabet.
    pub fn from_pairs(pairs: &[(char, char)], alphabet: &Alphabet) -> Result<Self, EnigmaError> {
        let mut table = [0usize; ALPHABET_SIZE];
        for (index, entry) in table.iter_mut().enumerate() {
            *entry = index;
        }
        let mut plugged = [false; ALPHABET_SIZE];

        for &(a, b) in pairs {
            let first = alphabet.index_of(a).map_err(|_| plug_error(a))?;
            let second = alphabet.index_of(b).map_err(|_| plug_error(b))?;
            if first == second {
                return Err(EnigmaError::InvalidPlugboardConfig {
                    reason: format!("pair ({a}, {b}) plugs a symbol into itself"),
                });
            }
            if plugged[first] || plugged[second] {
                return Err(EnigmaError::InvalidPlugboardConfig {
                    reason: format!("pair ({a}, {b}) reuses an already plugged symbol"),
                });
            }
            plugged[first] = true;
            plugged[second] = true;
            table[first] = second;
            table[second] = first;
        }

        // A union of disjoint 2-cycles is always a bijection
        let wiring = Permutation::from_table(table)?;
        Ok(Self { wiring })
    }

    /// Swap an ordinal index through the board.
    pub fn swap(&self, index: usize) -> usize {
        self.wiring.apply(index)
    }
}

fn plug_error(symbol: char) -> EnigmaError {
    EnigmaError::InvalidPlugboardConfig {
        reason: format!("symbol {symbol:?} is not in the machine alphabet"),
    }
}
