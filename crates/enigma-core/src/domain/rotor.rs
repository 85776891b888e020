//! A single rotor: fixed wiring behind a rotating offset
//!
//! The internal wiring never moves; rotation desynchronizes it from the
//! fixed entry contacts. A signal entering contact `i` with the rotor at
//! offset `o` reaches wiring input `(i + o) mod 26`, and the wiring output
//! is shifted back by `o` before it leaves the rotor. The backward path is
//! the same correction around the inverse wiring.

use crate::domain::alphabet::ALPHABET_SIZE;
use crate::domain::permutation::Permutation;
use crate::error::EnigmaError;

/// One rotor. Wiring and notch are immutable after construction; only the
/// offset mutates, and only through [`Rotor::advance`] or
/// [`Rotor::set_offset`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: Permutation,
    notch: usize,
    offset: usize,
}

impl Rotor {
    /// Build a rotor at an initial offset.
    ///
    /// Fails with [`EnigmaError::InvalidRotorConfig`] if the notch or the
    /// offset is outside `[0, 26)`.
    pub fn new(
        name: impl Into<String>,
        wiring: Permutation,
        notch: usize,
        offset: usize,
    ) -> Result<Self, EnigmaError> {
        if notch >= ALPHABET_SIZE {
            return Err(EnigmaError::InvalidRotorConfig {
                what: "notch",
                value: notch,
                limit: ALPHABET_SIZE,
            });
        }
        if offset >= ALPHABET_SIZE {
            return Err(EnigmaError::InvalidRotorConfig {
                what: "offset",
                value: offset,
                limit: ALPHABET_SIZE,
            });
        }
        Ok(Self {
            name: name.into(),
            wiring,
            notch,
            offset,
        })
    }

    /// Map a signal traveling from the entry contacts toward the reflector.
    pub fn forward(&self, index: usize) -> usize {
        let contact = (index + self.offset) % ALPHABET_SIZE;
        (self.wiring.apply(contact) + ALPHABET_SIZE - self.offset) % ALPHABET_SIZE
    }

    /// Map a signal traveling back from the reflector toward the entry
    /// contacts, through the inverse wiring.
    pub fn backward(&self, index: usize) -> usize {
        let contact = (index + self.offset) % ALPHABET_SIZE;
        (self.wiring.invert(contact) + ALPHABET_SIZE - self.offset) % ALPHABET_SIZE
    }

    /// Whether the rotor currently sits on its turnover notch. Read before
    /// any advance in the same step.
    pub fn at_notch(&self) -> bool {
        self.offset == self.notch
    }

    /// Advance one position, wrapping after the last contact.
    pub fn advance(&mut self) {
        self.offset = (self.offset + 1) % ALPHABET_SIZE;
    }

    /// Current offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Reset the offset without touching wiring or notch.
    pub fn set_offset(&mut self, offset: usize) -> Result<(), EnigmaError> {
        if offset >= ALPHABET_SIZE {
            return Err(EnigmaError::InvalidRotorConfig {
                what: "offset",
                value: offset,
                limit: ALPHABET_SIZE,
            });
        }
        self.offset = offset;
        Ok(())
    }

    /// Notch position.
    pub fn notch(&self) -> usize {
        self.notch
    }

    /// Display name, e.g. `"Rotor III"`.
    pub fn name(&self) -> &str {
        &self.name
    }
}
