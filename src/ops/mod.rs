//! High-level operations.
//!
//! This module contains the implementation of driver commands.

pub mod wscompile;

pub use wscompile::{plan, run};
