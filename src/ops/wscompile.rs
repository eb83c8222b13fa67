//! Implementation of the wscompile invocation operations.

use anyhow::Result;

use crate::core::config::InvocationConfig;
use crate::core::host::BuildHost;
use crate::driver::{execute, plan_args, Classpath, HostJavaTool, InvocationPlan};

/// Assemble the tool classpath from the host.
///
/// Resolution failure is lenient: the error is logged and the classpath
/// degrades to empty (the output directory included) rather than aborting
/// the invocation.
fn assemble_classpath(host: &dyn BuildHost) -> Classpath {
    let mut cp = Classpath::new();

    match host.compile_classpath() {
        Ok(entries) => cp.extend(entries),
        Err(e) => {
            tracing::error!("classpath setup failed: {:#}", e);
            return cp;
        }
    }

    cp.push(host.output_dir().display().to_string());
    cp
}

/// Build the invocation plan: assembled classpath plus argument vector.
///
/// Planning carries the configured side effects: output directories are
/// created and the generated-sources root is registered with the host.
pub fn plan(host: &mut dyn BuildHost, config: &InvocationConfig) -> Result<InvocationPlan> {
    config.validate()?;

    let classpath = assemble_classpath(&*host);
    let args = plan_args(config, &classpath, host)?;

    Ok(InvocationPlan { args, classpath })
}

/// Run one wscompile invocation end to end.
///
/// One attempt, one outcome: a tool failure, launch fault, or missing tools
/// archive aborts the run; only classpath resolution is treated leniently.
pub fn run(host: &mut dyn BuildHost, config: &InvocationConfig) -> Result<()> {
    let plan = plan(host, config)?;

    tracing::info!("wscompile args: {:?}", plan.args);

    let tool = HostJavaTool::new(host.java_home(), plan.classpath.join());
    execute(&*host, &tool, &plan, config.fork)?;

    tracing::info!("wscompile finished");
    Ok(())
}
