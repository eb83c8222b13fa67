//! wscompile driver - plans and launches the JAX-RPC wscompile tool
//!
//! This crate provides the core library functionality for the driver,
//! including classpath assembly, argument planning, toolchain lookup,
//! and tool execution.

pub mod core;
pub mod driver;
pub mod ops;
pub mod util;

pub use crate::core::config::{InvocationConfig, ProxyConfig};
pub use crate::core::host::{BuildHost, ConfigHost, InstalledJdk, JdkToolchain};

pub use driver::{Classpath, InvocationPlan};
pub use util::config::DriverConfig;
