//! Invocation configuration for the wscompile driver.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::util::fs::absolutize;

/// Port assumed when a proxy host is configured without one.
pub const DEFAULT_PROXY_PORT: u16 = 8080;

/// Settings for a single wscompile invocation.
///
/// Constructed once from external configuration and read-only afterwards.
/// Relative paths are resolved with [`InvocationConfig::absolutized`] before
/// the planner sees them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InvocationConfig {
    /// wscompile operation to run (e.g. "import", "gen:server").
    pub operation: String,

    /// Features to enable, comma-delimited, passed through verbatim.
    pub features: Option<String>,

    /// HTTP proxy used by the tool when fetching WSDL documents.
    pub http_proxy: Option<ProxyConfig>,

    /// Output messages about what the tool is doing.
    pub verbose: bool,

    /// Keep generated files.
    pub keep: bool,

    /// Generate debugging info.
    pub debug: bool,

    /// Optimize generated code.
    pub optimize: bool,

    /// Where to write the J2EE mapping file.
    pub mapping: Option<PathBuf>,

    /// Where to write the internal model.
    pub model: Option<PathBuf>,

    /// Where to place generated non-class files.
    pub non_class_dir: Option<PathBuf>,

    /// Where to place generated source files.
    pub generated_sources: Option<PathBuf>,

    /// Where to place generated class files.
    pub output_dir: Option<PathBuf>,

    /// JAX-RPC SI version to generate for (1.0.1, 1.0.3, or 1.1).
    pub source: Option<String>,

    /// Configuration file read by wscompile itself.
    pub config: PathBuf,

    /// Register the generated-sources directory as a compile source root.
    #[serde(default = "default_true")]
    pub add_sources: bool,

    /// Run the tool in a forked JVM when one is available.
    #[serde(default = "default_true")]
    pub fork: bool,
}

impl Default for InvocationConfig {
    fn default() -> Self {
        InvocationConfig {
            operation: String::new(),
            features: None,
            http_proxy: None,
            verbose: false,
            keep: false,
            debug: false,
            optimize: false,
            mapping: None,
            model: None,
            non_class_dir: None,
            generated_sources: None,
            output_dir: None,
            source: None,
            config: PathBuf::new(),
            add_sources: true,
            fork: true,
        }
    }
}

impl InvocationConfig {
    /// Check that the required fields are present.
    ///
    /// The operation vocabulary itself is not validated; an unknown operation
    /// surfaces from the tool's own argument parsing.
    pub fn validate(&self) -> Result<()> {
        if self.operation.is_empty() {
            bail!("no wscompile operation configured");
        }
        if self.config.as_os_str().is_empty() {
            bail!("no wscompile configuration file configured");
        }
        Ok(())
    }

    /// Resolve every relative path against `base`.
    pub fn absolutized(mut self, base: &Path) -> Self {
        self.mapping = self.mapping.map(|p| absolutize(base, &p));
        self.model = self.model.map(|p| absolutize(base, &p));
        self.non_class_dir = self.non_class_dir.map(|p| absolutize(base, &p));
        self.generated_sources = self.generated_sources.map(|p| absolutize(base, &p));
        self.output_dir = self.output_dir.map(|p| absolutize(base, &p));
        if !self.config.as_os_str().is_empty() {
            self.config = absolutize(base, &self.config);
        }
        self
    }
}

/// HTTP proxy settings, emitted as `-httpproxy:<host>:<port>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Proxy host name.
    pub host: String,

    /// Proxy port.
    pub port: Option<u16>,
}

impl ProxyConfig {
    /// The configured port, or [`DEFAULT_PROXY_PORT`] when unset.
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PROXY_PORT)
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = InvocationConfig::default();
        assert!(config.operation.is_empty());
        assert!(config.features.is_none());
        assert!(!config.keep);
        assert!(config.add_sources);
        assert!(config.fork);
    }

    #[test]
    fn test_validate_requires_operation_and_config() {
        let mut config = InvocationConfig::default();
        assert!(config.validate().is_err());

        config.operation = "import".to_string();
        assert!(config.validate().is_err());

        config.config = PathBuf::from("/ws.xml");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_proxy_port_defaults_to_8080() {
        let proxy = ProxyConfig {
            host: "proxy.example.com".to_string(),
            port: None,
        };
        assert_eq!(proxy.port_or_default(), 8080);

        let proxy = ProxyConfig {
            host: "proxy.example.com".to_string(),
            port: Some(3128),
        };
        assert_eq!(proxy.port_or_default(), 3128);
    }

    #[test]
    fn test_absolutized_resolves_relative_paths() {
        let config = InvocationConfig {
            operation: "import".to_string(),
            mapping: Some(PathBuf::from("etc/mapping.xml")),
            model: Some(PathBuf::from("/tmp/model.gz")),
            config: PathBuf::from("src/jaxrpc/config.xml"),
            ..Default::default()
        };

        let config = config.absolutized(Path::new("/work/project"));
        assert_eq!(
            config.mapping,
            Some(PathBuf::from("/work/project/etc/mapping.xml"))
        );
        assert_eq!(config.model, Some(PathBuf::from("/tmp/model.gz")));
        assert_eq!(
            config.config,
            PathBuf::from("/work/project/src/jaxrpc/config.xml")
        );
    }

    #[test]
    fn test_toml_deserialize() {
        let config: InvocationConfig = toml::from_str(
            r#"
operation = "import"
features = "wsi,documentliteral"
keep = true
config = "src/jaxrpc/config.xml"

[http_proxy]
host = "proxy.example.com"
"#,
        )
        .unwrap();

        assert_eq!(config.operation, "import");
        assert_eq!(config.features.as_deref(), Some("wsi,documentliteral"));
        assert!(config.keep);
        assert!(!config.verbose);
        assert!(config.fork);
        let proxy = config.http_proxy.unwrap();
        assert_eq!(proxy.host, "proxy.example.com");
        assert_eq!(proxy.port_or_default(), 8080);
    }
}
