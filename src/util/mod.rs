//! Shared utilities

pub mod config;
pub mod fs;
pub mod process;

pub use config::{find_config, DriverConfig, CONFIG_FILE_NAME};
pub use process::ProcessBuilder;
