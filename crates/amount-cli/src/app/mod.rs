//! Application-level utilities for the Amount CLI.
//!
//! This module provides:
//! - The application context (CLI args + lazily-loaded config)
//! - Config path resolution

mod context;
mod resolver;

pub use context::AppContext;
