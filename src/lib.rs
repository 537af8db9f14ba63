// ABOUTME: Library root for crxdeploy - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod console;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod output;
pub mod sweep;
pub mod types;
