//! # Enigma-Trace Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Cross-layer scenarios
//! │   ├── flows.rs      # Message encipherment against pinned vectors
//! │   └── laws.rs       # Randomized cipher-law checks
//! │
//! └── benches/ (../benches/)
//!     └── cipher_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p enigma-tests
//!
//! # By category
//! cargo test -p enigma-tests integration::flows
//! cargo test -p enigma-tests integration::laws
//!
//! # Benchmarks
//! cargo bench -p enigma-tests
//! ```

#![allow(dead_code)]

pub mod integration;
