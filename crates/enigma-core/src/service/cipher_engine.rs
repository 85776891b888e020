//! Cipher Engine Service
//!
//! Orchestrates the plugboard, rotor bank, and reflector, stepping the bank
//! before each encipherment and emitting the full per-stage trace.

use tracing::{debug, info, warn};

use crate::domain::alphabet::Alphabet;
use crate::domain::config::MachineConfig;
use crate::domain::plugboard::Plugboard;
use crate::domain::reflector::Reflector;
use crate::domain::rotor_bank::RotorBank;
use crate::domain::trace::TraceRecord;
use crate::error::EnigmaError;
use crate::ports::inbound::{CipherApi, MachineSnapshot, RotorSnapshot};

/// The cipher engine.
///
/// Owns the plugboard, rotor bank, and reflector for one machine
/// configuration. The only state that changes across calls is the rotor
/// offsets; everything else is immutable after construction. Multiple
/// configurations are multiple independent instances; there is no shared or
/// process-wide state.
pub struct CipherEngine {
    alphabet: Alphabet,
    plugboard: Plugboard,
    rotors: RotorBank,
    reflector: Reflector,
}

impl CipherEngine {
    /// Build an engine from a configuration.
    ///
    /// Fails closed with the construction-time error taxonomy; no engine
    /// exists unless every component is well formed.
    pub fn new(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let alphabet = Alphabet::new();
        let plugboard = Plugboard::from_pairs(&config.plugboard_pairs, &alphabet)?;
        let rotors = RotorBank::new(
            config.rotors[0].rotor(config.offsets[0])?,
            config.rotors[1].rotor(config.offsets[1])?,
            config.rotors[2].rotor(config.offsets[2])?,
        );
        let reflector = config.reflector.reflector()?;

        info!(
            right = config.rotors[0].display_name(),
            middle = config.rotors[1].display_name(),
            left = config.rotors[2].display_name(),
            reflector = reflector.name(),
            plug_pairs = config.plugboard_pairs.len(),
            "cipher engine constructed"
        );

        Ok(Self {
            alphabet,
            plugboard,
            rotors,
            reflector,
        })
    }
}

impl CipherApi for CipherEngine {
    fn encipher_one(&mut self, symbol: char) -> Result<TraceRecord, EnigmaError> {
        // Reject before stepping so an invalid symbol leaves the offsets
        // exactly where they were.
        let index = self.alphabet.index_of(symbol).inspect_err(|_| {
            warn!(symbol = %symbol, "rejected symbol outside the machine alphabet");
        })?;

        self.rotors.step();

        let after_plugboard_in = self.plugboard.swap(index);
        let [after_right, after_middle, after_left] =
            self.rotors.forward_stages(after_plugboard_in);
        let after_reflector = self.reflector.reflect(after_left);
        let [after_left_back, after_middle_back, after_right_back] =
            self.rotors.backward_stages(after_reflector);
        let after_plugboard_out = self.plugboard.swap(after_right_back);

        let alphabet = &self.alphabet;
        let record = TraceRecord {
            input: symbol,
            after_plugboard_in: alphabet.symbol(after_plugboard_in),
            after_right_rotor: alphabet.symbol(after_right),
            after_middle_rotor: alphabet.symbol(after_middle),
            after_left_rotor: alphabet.symbol(after_left),
            after_reflector: alphabet.symbol(after_reflector),
            after_left_rotor_back: alphabet.symbol(after_left_back),
            after_middle_rotor_back: alphabet.symbol(after_middle_back),
            after_right_rotor_back: alphabet.symbol(after_right_back),
            after_plugboard_out: alphabet.symbol(after_plugboard_out),
            output: alphabet.symbol(after_plugboard_out),
        };

        debug!(
            input = %record.input,
            output = %record.output,
            offsets = ?self.rotors.offsets(),
            "enciphered symbol"
        );

        Ok(record)
    }

    fn offsets(&self) -> [usize; 3] {
        self.rotors.offsets()
    }

    fn set_offsets(&mut self, offsets: [usize; 3]) -> Result<(), EnigmaError> {
        self.rotors.set_offsets(offsets)
    }

    fn snapshot(&self) -> MachineSnapshot {
        let rotor_view = |rotor: &crate::domain::rotor::Rotor| RotorSnapshot {
            name: rotor.name().to_string(),
            notch: self.alphabet.symbol(rotor.notch()),
            offset: rotor.offset(),
            position: self.alphabet.symbol(rotor.offset()),
        };
        MachineSnapshot {
            rotors: [
                rotor_view(self.rotors.right()),
                rotor_view(self.rotors.middle()),
                rotor_view(self.rotors.left()),
            ],
            reflector: self.reflector.name().to_string(),
        }
    }
}
