// ABOUTME: Library root for xrruntime - OpenXR runtime discovery.
// ABOUTME: The command-line front end is in main.rs.

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod runtime;
