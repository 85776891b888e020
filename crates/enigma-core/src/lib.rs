//! # Enigma Core
//!
//! Deterministic Enigma rotor cipher engine that records every intermediate
//! signal stage of each encipherment as a structured [`TraceRecord`], for
//! inspection and visualization tooling.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters), scaled to a
//! single synchronous subsystem:
//!
//! - **Domain Layer** (`domain/`): Pure cipher logic, no I/O
//!   - `Alphabet`: the 26-letter ordinal space
//!   - `Permutation`: validated bijection with a derived inverse table
//!   - `Plugboard`, `Rotor`, `RotorBank`, `Reflector`: the permutation
//!     network and the stepping state machine
//!   - `catalog`: the published historical wiring tables (rotors I-V,
//!     reflectors B and C)
//!   - `MachineConfig` / `MachineConfigBuilder`: configuration with
//!     validation
//!   - `TraceRecord`: the per-keypress trace
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `CipherApi`: the one driving port
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `CipherEngine`: implements `CipherApi`
//!
//! ## Signal path
//!
//! Each key press first steps the rotor bank (the right rotor always, its
//! neighbors per the notch carries including the double-step anomaly), then
//! routes the symbol through:
//!
//! ```text
//! plugboard -> right -> middle -> left -> reflector -> left -> middle -> right -> plugboard
//! ```
//!
//! Every arrow's output is one field of the resulting trace.
//!
//! ## Invariants
//!
//! - Every permutation's forward and inverse tables are mutual inverses
//! - The plugboard is an involution; the reflector is a fixed-point-free
//!   involution
//! - The right rotor advances exactly once per encipherment; middle and left
//!   advance only per the notch rules, with all decisions read from pre-step
//!   offsets
//! - At fixed offsets the symbol mapping is a self-inverse bijection, so a
//!   message deciphers on a fresh engine with the same configuration
//! - A rejected input symbol leaves the rotor offsets untouched
//!
//! ## Usage Example
//!
//! ```ignore
//! use enigma_core::{CipherApi, CipherEngine, MachineConfigBuilder};
//! use enigma_core::{ReflectorModel, RotorModel};
//!
//! let config = MachineConfigBuilder::new()
//!     .rotors([RotorModel::III, RotorModel::II, RotorModel::I])
//!     .reflector(ReflectorModel::B)
//!     .plug('C', 'Q')
//!     .build()?;
//!
//! let mut engine = CipherEngine::new(&config)?;
//! let trace = engine.encipher_one('C')?;
//! assert_eq!(trace.output, trace.after_plugboard_out);
//! for (stage, symbol) in trace.stages() {
//!     println!("{stage}: {symbol}");
//! }
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    Alphabet, MachineConfig, MachineConfigBuilder, Permutation, Plugboard, Reflector,
    ReflectorModel, Rotor, RotorBank, RotorModel, TraceRecord, ALPHABET_SIZE,
};
pub use error::EnigmaError;
pub use ports::{CipherApi, MachineSnapshot, RotorSnapshot};
pub use service::CipherEngine;
