//! Core data structures for the wscompile driver.
//!
//! This module contains the foundational types used throughout the
//! driver:
//! - Invocation settings (operation, flags, proxy)
//! - The build host surface (classpath, output directory, toolchains)

pub mod config;
pub mod host;

pub use config::{InvocationConfig, ProxyConfig, DEFAULT_PROXY_PORT};
pub use host::{
    ambient_java_home, BuildHost, ConfigHost, InstalledJdk, JdkToolchain, TOOLCHAIN_JDK, TOOL_JAVA,
    TOOL_JAVAC,
};
