//! Integration tests for verbsh.
//!
//! These drive the public library API the way the binary does.

pub mod console_test;
pub mod dispatch_test;
