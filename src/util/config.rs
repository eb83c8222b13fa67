//! Project configuration file support.
//!
//! The driver reads a single `wscompile.toml` per project:
//!
//! ```toml
//! [invocation]
//! operation = "import"
//! keep = true
//! config = "src/jaxrpc/config.xml"
//!
//! [build]
//! classpath = ["lib/jaxrpc-api.jar"]
//! output_dir = "target/classes"
//!
//! [toolchain]
//! jdk = "/opt/jdk"
//! ```
//!
//! Relative paths resolve against the directory holding the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::config::InvocationConfig;
use crate::util::fs::{absolutize, read_to_string};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "wscompile.toml";

/// The `wscompile.toml` model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Invocation settings
    pub invocation: InvocationConfig,

    /// Build settings
    pub build: BuildConfig,

    /// Toolchain settings
    pub toolchain: ToolchainConfig,
}

/// Build-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Resolved compile classpath entries
    #[serde(default)]
    pub classpath: Vec<String>,

    /// Class output directory
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            classpath: Vec::new(),
            output_dir: default_output_dir(),
        }
    }
}

/// Toolchain configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Home directory of the JDK to fork with (e.g., /opt/jdk)
    pub jdk: Option<PathBuf>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("target").join("classes")
}

impl DriverConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Resolve every relative path against `base`.
    pub fn absolutized(mut self, base: &Path) -> Self {
        self.invocation = self.invocation.absolutized(base);
        self.build.output_dir = absolutize(base, &self.build.output_dir);
        self.build.classpath = self
            .build
            .classpath
            .into_iter()
            .map(|entry| {
                if entry.is_empty() {
                    entry
                } else {
                    absolutize(base, Path::new(&entry)).display().to_string()
                }
            })
            .collect();
        self.toolchain.jdk = self.toolchain.jdk.map(|p| absolutize(base, &p));
        self
    }
}

/// Find `wscompile.toml` in `start` or the nearest ancestor directory.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = DriverConfig::default();
        assert!(config.build.classpath.is_empty());
        assert_eq!(
            config.build.output_dir,
            PathBuf::from("target").join("classes")
        );
        assert!(config.toolchain.jdk.is_none());
        assert!(config.invocation.fork);
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);

        std::fs::write(
            &path,
            r#"
[invocation]
operation = "import"
keep = true
config = "src/jaxrpc/config.xml"

[build]
classpath = ["lib/jaxrpc-api.jar", "lib/jaxrpc-impl.jar"]
output_dir = "build/classes"

[toolchain]
jdk = "/opt/jdk"
"#,
        )
        .unwrap();

        let config = DriverConfig::load(&path).unwrap();
        assert_eq!(config.invocation.operation, "import");
        assert!(config.invocation.keep);
        assert_eq!(config.build.classpath.len(), 2);
        assert_eq!(config.build.output_dir, PathBuf::from("build/classes"));
        assert_eq!(config.toolchain.jdk, Some(PathBuf::from("/opt/jdk")));
    }

    #[test]
    fn test_config_load_missing_sections_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "[invocation]\noperation = \"import\"\n").unwrap();

        let config = DriverConfig::load(&path).unwrap();
        assert_eq!(config.invocation.operation, "import");
        assert_eq!(
            config.build.output_dir,
            PathBuf::from("target").join("classes")
        );
    }

    #[test]
    fn test_config_parse_error_names_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "not toml at all [").unwrap();

        let err = DriverConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_absolutized_resolves_relative_entries() {
        let config: DriverConfig = toml::from_str(
            r#"
[invocation]
operation = "import"
config = "ws.xml"

[build]
classpath = ["lib/a.jar", "/abs/b.jar"]
output_dir = "out"

[toolchain]
jdk = "jdk-1.4"
"#,
        )
        .unwrap();

        let config = config.absolutized(Path::new("/proj"));
        assert_eq!(config.invocation.config, PathBuf::from("/proj/ws.xml"));
        assert_eq!(config.build.classpath, vec!["/proj/lib/a.jar", "/abs/b.jar"]);
        assert_eq!(config.build.output_dir, PathBuf::from("/proj/out"));
        assert_eq!(config.toolchain.jdk, Some(PathBuf::from("/proj/jdk-1.4")));
    }

    #[test]
    fn test_find_config_walks_upward() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("src").join("jaxrpc");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE_NAME), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, tmp.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_find_config_missing() {
        let tmp = TempDir::new().unwrap();
        assert!(find_config(tmp.path()).is_none());
    }
}
