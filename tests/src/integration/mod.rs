//! Cross-layer integration scenarios

pub mod laws;
