//! Published wiring tables for the historical rotor and reflector set
//!
//! Wirings and turnover notches follow the published Enigma I tables:
//! <https://www.codesandciphers.org.uk/enigma/rotorspec.htm> and
//! <https://www.ciphermachinesandcryptology.com/en/enigmatech.htm>.

use serde::{Deserialize, Serialize};

use crate::domain::permutation::Permutation;
use crate::domain::reflector::Reflector;
use crate::domain::rotor::Rotor;
use crate::error::EnigmaError;

/// The five rotor models of the Enigma I set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotorModel {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorModel {
    /// Published wiring in letter-string notation, A-contact first.
    pub fn wiring(&self) -> &'static str {
        match self {
            RotorModel::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorModel::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorModel::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorModel::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorModel::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
        }
    }

    /// Turnover notch letter.
    pub fn notch(&self) -> char {
        match self {
            RotorModel::I => 'Q',
            RotorModel::II => 'E',
            RotorModel::III => 'V',
            RotorModel::IV => 'J',
            RotorModel::V => 'Z',
        }
    }

    /// Display name, e.g. `"Rotor III"`.
    pub fn display_name(&self) -> &'static str {
        match self {
            RotorModel::I => "Rotor I",
            RotorModel::II => "Rotor II",
            RotorModel::III => "Rotor III",
            RotorModel::IV => "Rotor IV",
            RotorModel::V => "Rotor V",
        }
    }

    /// Build this model's rotor at an initial offset.
    pub fn rotor(&self, offset: usize) -> Result<Rotor, EnigmaError> {
        let wiring = Permutation::from_letters(self.wiring())?;
        let notch = self.notch() as usize - 'A' as usize;
        Rotor::new(self.display_name(), wiring, notch, offset)
    }
}

/// The two reflector models carried by the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReflectorModel {
    B,
    C,
}

impl ReflectorModel {
    /// Published wiring in letter-string notation.
    pub fn wiring(&self) -> &'static str {
        match self {
            ReflectorModel::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorModel::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
        }
    }

    /// Display name, e.g. `"Reflector B"`.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReflectorModel::B => "Reflector B",
            ReflectorModel::C => "Reflector C",
        }
    }

    /// Build this model's reflector.
    pub fn reflector(&self) -> Result<Reflector, EnigmaError> {
        let wiring = Permutation::from_letters(self.wiring())?;
        Reflector::new(self.display_name(), wiring)
    }
}
