//! Invocation planning and execution for the wscompile tool.
//!
//! The pieces compose one way: a [`Classpath`] and an [`InvocationConfig`]
//! become an [`InvocationPlan`] via [`plan_args`], and [`execute`] runs the
//! plan in whichever mode [`select_mode`] picks.
//!
//! [`InvocationConfig`]: crate::core::config::InvocationConfig

pub mod args;
pub mod classpath;
pub mod exec;
pub mod toolchain;

pub use args::plan_args;
pub use classpath::{Classpath, PATH_LIST_SEPARATOR};
pub use exec::{
    execute, run_direct, run_forked, select_mode, CompileTool, ExecMode, HostJavaTool,
    InvokeError, InvokeResult, WSCOMPILE_MAIN_CLASS,
};
pub use toolchain::{archive_candidate, locate_tools_archive, JdkPlatform, ToolsArchive};

/// A fully-planned invocation.
#[derive(Debug, Clone)]
pub struct InvocationPlan {
    /// Ordered wscompile tokens; the tool's config file is always last.
    pub args: Vec<String>,
    /// The classpath the arguments were planned against.
    pub classpath: Classpath,
}
