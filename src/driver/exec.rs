//! Execution strategy: direct in-process invocation versus a forked JVM.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::host::{BuildHost, JdkToolchain, TOOLCHAIN_JDK, TOOL_JAVA};
use crate::driver::classpath::Classpath;
use crate::driver::toolchain::{locate_tools_archive, JdkPlatform, ToolsArchive};
use crate::driver::InvocationPlan;
use crate::util::process::ProcessBuilder;

/// Fully-qualified entry point of the wscompile tool.
pub const WSCOMPILE_MAIN_CLASS: &str = "com.sun.xml.rpc.tools.wscompile.Main";

/// Failures an invocation attempt can surface.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The in-process tool reported failure.
    #[error("wscompile reported failure")]
    ToolFailed,

    /// The in-process tool faulted while running.
    #[error("wscompile invocation fault")]
    ToolFault(#[source] anyhow::Error),

    /// The forked JVM exited non-zero.
    #[error("wscompile failed with exit status {code}")]
    ToolExit { code: i32 },

    /// The forked JVM could not be launched.
    #[error("failed to launch `{}`", java.display())]
    Launch {
        java: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Forking needs the tools archive on the subprocess classpath.
    #[error("tools archive not found at {}", candidate.display())]
    ToolsArchiveNotFound { candidate: PathBuf },
}

/// Result alias for invocation attempts.
pub type InvokeResult<T> = std::result::Result<T, InvokeError>;

/// Invocation mode, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecMode {
    /// Invoke the tool's entry point in the current process.
    Direct,
    /// Fork the toolchain's `java` with the tool on its classpath.
    Forked { java: PathBuf },
}

/// Pick the invocation mode.
///
/// Forking happens only when requested and the configured toolchain offers
/// a runnable `java`; everything else runs in-process. There is no fallback
/// between modes within a run.
pub fn select_mode(toolchain: Option<&dyn JdkToolchain>, fork: bool) -> ExecMode {
    if fork {
        if let Some(java) = toolchain.and_then(|tc| tc.find_tool(TOOL_JAVA)) {
            return ExecMode::Forked { java };
        }
    }
    ExecMode::Direct
}

/// In-process entry point of the wscompile tool.
///
/// Mirrors the tool's own contract: `true` means success, `false` means the
/// tool ran and reported failure, and an error is a fault during the run.
pub trait CompileTool {
    fn run(&self, args: &[String]) -> Result<bool>;
}

/// [`CompileTool`] that runs wscompile on the build's own Java runtime.
///
/// The entry class is loaded from the assembled classpath by the ambient
/// JVM; the boolean contract maps onto the process exit status.
#[derive(Debug)]
pub struct HostJavaTool {
    java_home: PathBuf,
    classpath: String,
}

impl HostJavaTool {
    /// Create a tool over the Java installation at `java_home`.
    pub fn new(java_home: impl Into<PathBuf>, classpath: impl Into<String>) -> Self {
        HostJavaTool {
            java_home: java_home.into(),
            classpath: classpath.into(),
        }
    }

    fn java_binary(&self) -> PathBuf {
        self.java_home
            .join("bin")
            .join(format!("java{}", std::env::consts::EXE_SUFFIX))
    }
}

impl CompileTool for HostJavaTool {
    fn run(&self, args: &[String]) -> Result<bool> {
        let java = self.java_binary();
        let proc = ProcessBuilder::new(&java)
            .arg("-cp")
            .arg(&self.classpath)
            .arg(WSCOMPILE_MAIN_CLASS)
            .args(args);

        tracing::debug!("running `{}`", proc.display_command());

        let status = proc
            .stream()
            .with_context(|| format!("failed to run `{}`", java.display()))?;
        Ok(status.success())
    }
}

/// Run the tool in the current process.
pub fn run_direct(tool: &dyn CompileTool, args: &[String]) -> InvokeResult<()> {
    match tool.run(args) {
        Ok(true) => Ok(()),
        Ok(false) => Err(InvokeError::ToolFailed),
        Err(cause) => Err(InvokeError::ToolFault(cause)),
    }
}

/// Fork a JVM running the tool's entry class.
///
/// The child's stdout and stderr are forwarded line by line as they arrive,
/// and its working directory is the build output directory.
pub fn run_forked(
    java: &Path,
    classpath: &Classpath,
    args: &[String],
    output_dir: &Path,
) -> InvokeResult<()> {
    let proc = ProcessBuilder::new(java)
        .arg("-cp")
        .arg(classpath.join())
        .arg(WSCOMPILE_MAIN_CLASS)
        .args(args)
        .cwd(output_dir);

    tracing::debug!("forking `{}`", proc.display_command());

    let status = proc.stream().map_err(|source| InvokeError::Launch {
        java: java.to_path_buf(),
        source,
    })?;

    if !status.success() {
        return Err(InvokeError::ToolExit {
            code: status.code().unwrap_or(-1),
        });
    }
    Ok(())
}

/// Execute a planned invocation against the host.
///
/// Forked mode extends the subprocess classpath with the tools archive (the
/// planned `-cp` tokens stay as computed) and treats a missing archive as
/// fatal; direct mode never looks for it.
pub fn execute(
    host: &dyn BuildHost,
    tool: &dyn CompileTool,
    plan: &InvocationPlan,
    fork: bool,
) -> InvokeResult<()> {
    let toolchain = host.toolchain(TOOLCHAIN_JDK);
    match select_mode(toolchain, fork) {
        ExecMode::Direct => {
            tracing::debug!("running wscompile in-process");
            run_direct(tool, &plan.args)
        }
        ExecMode::Forked { java } => {
            let archive =
                match locate_tools_archive(toolchain, &host.java_home(), JdkPlatform::host()) {
                    ToolsArchive::Found(path) => path,
                    ToolsArchive::Missing { candidate } => {
                        return Err(InvokeError::ToolsArchiveNotFound { candidate });
                    }
                };

            let mut classpath = plan.classpath.clone();
            classpath.push(archive.display().to_string());

            run_forked(&java, &classpath, &plan.args, &host.output_dir())
        }
    }
}
