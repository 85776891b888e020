//! Ports Layer - Trait definitions
//!
//! One driving port: [`CipherApi`], the call boundary presentation and
//! inspection collaborators drive. The engine has no driven ports; it
//! depends on nothing external.

pub mod inbound;

pub use inbound::{CipherApi, MachineSnapshot, RotorSnapshot};
