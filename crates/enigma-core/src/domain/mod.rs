//! Domain Layer - Pure cipher logic
//!
//! This layer contains:
//! - The machine alphabet and its ordinal space
//! - Validated permutations (forward + derived inverse tables)
//! - Plugboard, rotors, rotor bank (stepping state machine), reflector
//! - The historical wiring catalog
//! - Machine configuration and the per-keypress trace record
//!
//! RULES:
//! - No I/O operations
//! - No logging (the service layer logs)
//! - Pure functions wherever possible; the only mutable state in the whole
//!   crate is the rotor offsets

pub mod alphabet;
pub mod catalog;
pub mod config;
pub mod permutation;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod rotor_bank;
pub mod trace;

pub use alphabet::{Alphabet, ALPHABET_SIZE};
pub use catalog::{ReflectorModel, RotorModel};
pub use config::{MachineConfig, MachineConfigBuilder};
pub use permutation::Permutation;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use rotor_bank::RotorBank;
pub use trace::TraceRecord;
