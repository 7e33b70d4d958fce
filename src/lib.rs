//! verbsh - console command tokenizer and multi-word verb dispatcher.
//!
//! This library exposes the core modules for use by the binary and in
//! integration tests.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
