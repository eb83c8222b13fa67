//! The boundary between the driver and the surrounding build system.
//!
//! Everything the invocation engine needs from its host goes through
//! [`BuildHost`]: the resolved classpath, the class output directory, an
//! optional JDK toolchain, and source-root registration for generated code.
//! [`ConfigHost`] is the implementation used by the CLI, backed by a
//! `wscompile.toml` project file.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::util::fs::normalize_path;
use crate::util::process::find_executable;

/// Toolchain kind understood by [`BuildHost::toolchain`].
pub const TOOLCHAIN_JDK: &str = "jdk";

/// Compiler tool name used to anchor tools-archive discovery.
pub const TOOL_JAVAC: &str = "javac";

/// Launcher tool name used for forked execution.
pub const TOOL_JAVA: &str = "java";

/// Build-system capabilities the driver consumes.
pub trait BuildHost {
    /// Resolved compile classpath entries.
    ///
    /// An error here is not fatal to the invocation: the controller logs it
    /// and proceeds with an empty classpath.
    fn compile_classpath(&self) -> Result<Vec<String>>;

    /// The build's class output directory.
    fn output_dir(&self) -> PathBuf;

    /// Look up a configured toolchain by kind (only "jdk" is meaningful).
    fn toolchain(&self, kind: &str) -> Option<&dyn JdkToolchain>;

    /// Installation root of the Java runtime the build itself runs on,
    /// used as the fallback for tools-archive discovery.
    fn java_home(&self) -> PathBuf;

    /// Register an additional compile source root with the build.
    fn add_source_root(&mut self, dir: &Path);
}

/// A configured JDK installation exposing named tools.
pub trait JdkToolchain {
    /// Absolute path to the named tool (e.g. "javac", "java"), if present.
    fn find_tool(&self, name: &str) -> Option<PathBuf>;
}

/// A JDK rooted at a home directory, with tools under `bin/`.
#[derive(Debug, Clone)]
pub struct InstalledJdk {
    home: PathBuf,
}

impl InstalledJdk {
    /// Create a toolchain for the JDK installed at `home`.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        InstalledJdk { home: home.into() }
    }
}

impl JdkToolchain for InstalledJdk {
    fn find_tool(&self, name: &str) -> Option<PathBuf> {
        let tool = self
            .home
            .join("bin")
            .join(format!("{}{}", name, std::env::consts::EXE_SUFFIX));
        tool.is_file().then_some(tool)
    }
}

/// [`BuildHost`] backed by a `wscompile.toml` project configuration.
///
/// The classpath and output directory come straight from the `[build]`
/// section; a `[toolchain] jdk` entry becomes the configured JDK. Source
/// roots registered during planning are collected for the caller to report.
#[derive(Debug)]
pub struct ConfigHost {
    classpath: Vec<String>,
    output_dir: PathBuf,
    jdk: Option<InstalledJdk>,
    java_home: PathBuf,
    source_roots: Vec<PathBuf>,
}

impl ConfigHost {
    /// Create a host from resolved build settings.
    ///
    /// The ambient Java installation is discovered once, here, so the rest
    /// of the engine never reads the environment.
    pub fn new(classpath: Vec<String>, output_dir: PathBuf, jdk: Option<PathBuf>) -> Self {
        ConfigHost {
            classpath,
            output_dir,
            jdk: jdk.map(InstalledJdk::new),
            java_home: ambient_java_home().unwrap_or_default(),
            source_roots: Vec::new(),
        }
    }

    /// Override the ambient Java installation root.
    pub fn with_java_home(mut self, home: PathBuf) -> Self {
        self.java_home = home;
        self
    }

    /// Source roots registered during planning.
    pub fn source_roots(&self) -> &[PathBuf] {
        &self.source_roots
    }
}

impl BuildHost for ConfigHost {
    fn compile_classpath(&self) -> Result<Vec<String>> {
        Ok(self.classpath.clone())
    }

    fn output_dir(&self) -> PathBuf {
        self.output_dir.clone()
    }

    fn toolchain(&self, kind: &str) -> Option<&dyn JdkToolchain> {
        if kind != TOOLCHAIN_JDK {
            return None;
        }
        self.jdk.as_ref().map(|jdk| jdk as &dyn JdkToolchain)
    }

    fn java_home(&self) -> PathBuf {
        self.java_home.clone()
    }

    fn add_source_root(&mut self, dir: &Path) {
        let dir = dir.to_path_buf();
        if !self.source_roots.contains(&dir) {
            self.source_roots.push(dir);
        }
    }
}

/// Installation root of the Java runtime on this machine.
///
/// `JAVA_HOME` wins when set; otherwise the root is derived from the `java`
/// executable on PATH, resolved through symlinks (`<root>/bin/java`).
pub fn ambient_java_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("JAVA_HOME") {
        if !home.is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    let java = normalize_path(&find_executable(TOOL_JAVA)?);
    Some(java.parent()?.parent()?.to_path_buf())
}
