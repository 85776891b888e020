//! The three-rotor stack and its stepping state machine
//!
//! Rotors are ordered by signal entry: right, middle, left. The bank owns
//! the stepping protocol, including the double-step anomaly, and composes
//! the forward and backward passes while exposing each rotor's intermediate
//! output for the trace.

use crate::domain::alphabet::ALPHABET_SIZE;
use crate::domain::rotor::Rotor;
use crate::error::EnigmaError;

/// An ordered stack of exactly three rotors. Mutated only by
/// [`RotorBank::step`] (once per encipherment) and
/// [`RotorBank::set_offsets`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotorBank {
    right: Rotor,
    middle: Rotor,
    left: Rotor,
}

impl RotorBank {
    pub fn new(right: Rotor, middle: Rotor, left: Rotor) -> Self {
        Self {
            right,
            middle,
            left,
        }
    }

    /// Advance the stack by one key press.
    ///
    /// Every notch check reads the offsets as they were before this step;
    /// the three advance decisions are computed first and applied
    /// afterwards. The rules:
    ///
    /// - the right rotor always advances,
    /// - the middle rotor advances on the right rotor's carry, and also when
    ///   it sits on its own notch, in which case the left rotor advances
    ///   with it on the same press (the double-step anomaly),
    /// - the left rotor advances only on the middle rotor's notch.
    pub fn step(&mut self) {
        let right_carry = self.right.at_notch();
        let middle_at_notch = self.middle.at_notch();

        let advance_middle = right_carry || middle_at_notch;
        let advance_left = middle_at_notch;

        self.right.advance();
        if advance_middle {
            self.middle.advance();
        }
        if advance_left {
            self.left.advance();
        }
    }

    /// Forward pass, right to left. Returns the signal after each rotor in
    /// traversal order.
    pub fn forward_stages(&self, index: usize) -> [usize; 3] {
        let after_right = self.right.forward(index);
        let after_middle = self.middle.forward(after_right);
        let after_left = self.left.forward(after_middle);
        [after_right, after_middle, after_left]
    }

    /// Backward pass, left to right. Returns the signal after each rotor in
    /// traversal order.
    pub fn backward_stages(&self, index: usize) -> [usize; 3] {
        let after_left = self.left.backward(index);
        let after_middle = self.middle.backward(after_left);
        let after_right = self.right.backward(after_middle);
        [after_left, after_middle, after_right]
    }

    /// Current offsets in right, middle, left order.
    pub fn offsets(&self) -> [usize; 3] {
        [
            self.right.offset(),
            self.middle.offset(),
            self.left.offset(),
        ]
    }

    /// Reset all three offsets (right, middle, left). Validates every value
    /// before moving any rotor, so a rejected reset leaves the bank
    /// untouched.
    pub fn set_offsets(&mut self, offsets: [usize; 3]) -> Result<(), EnigmaError> {
        for value in offsets {
            if value >= ALPHABET_SIZE {
                return Err(EnigmaError::InvalidRotorConfig {
                    what: "offset",
                    value,
                    limit: ALPHABET_SIZE,
                });
            }
        }
        let [right, middle, left] = offsets;
        self.right.set_offset(right)?;
        self.middle.set_offset(middle)?;
        self.left.set_offset(left)?;
        Ok(())
    }

    pub fn right(&self) -> &Rotor {
        &self.right
    }

    pub fn middle(&self) -> &Rotor {
        &self.middle
    }

    pub fn left(&self) -> &Rotor {
        &self.left
    }
}
