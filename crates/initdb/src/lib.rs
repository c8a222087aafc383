//! `pathpilot-initdb` library crate.
//!
//! Re-exports internal modules for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod bootstrap;
pub mod config;
pub mod error;
