//! The per-keypress signal trace
//!
//! One [`TraceRecord`] is produced atomically per encipherment and is never
//! mutated afterwards. Visualization and inspection tooling consumes it
//! read-only; [`TraceRecord::stages`] yields the stages in signal order for
//! consumers that reveal one stage at a time.

use serde::{Deserialize, Serialize};

/// Immutable snapshot of every intermediate symbol of one key press.
///
/// Field order follows the signal path: plugboard in, rotors right to left,
/// reflector, rotors left to right, plugboard out.
/// `after_plugboard_out` always equals `output`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub input: char,
    pub after_plugboard_in: char,
    pub after_right_rotor: char,
    pub after_middle_rotor: char,
    pub after_left_rotor: char,
    pub after_reflector: char,
    pub after_left_rotor_back: char,
    pub after_middle_rotor_back: char,
    pub after_right_rotor_back: char,
    pub after_plugboard_out: char,
    pub output: char,
}

impl TraceRecord {
    /// The trace as an ordered list of (stage name, symbol) entries, input
    /// first, output last.
    pub fn stages(&self) -> [(&'static str, char); 11] {
        [
            ("input", self.input),
            ("after_plugboard_in", self.after_plugboard_in),
            ("after_right_rotor", self.after_right_rotor),
            ("after_middle_rotor", self.after_middle_rotor),
            ("after_left_rotor", self.after_left_rotor),
            ("after_reflector", self.after_reflector),
            ("after_left_rotor_back", self.after_left_rotor_back),
            ("after_middle_rotor_back", self.after_middle_rotor_back),
            ("after_right_rotor_back", self.after_right_rotor_back),
            ("after_plugboard_out", self.after_plugboard_out),
            ("output", self.output),
        ]
    }
}
