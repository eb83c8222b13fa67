//! `wscompile-driver plan` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::PlanArgs;
use wscompile::core::host::{BuildHost, ConfigHost, TOOLCHAIN_JDK};
use wscompile::driver::{locate_tools_archive, select_mode, ExecMode, JdkPlatform};
use wscompile::ops::wscompile::plan;

pub fn execute(config_path: Option<PathBuf>, args: PlanArgs) -> Result<()> {
    let config = super::load_config(config_path)?;

    let mut host = ConfigHost::new(
        config.build.classpath,
        config.build.output_dir,
        config.toolchain.jdk,
    );

    let plan = plan(&mut host, &config.invocation)?;

    if args.json {
        let mode = select_mode(host.toolchain(TOOLCHAIN_JDK), config.invocation.fork);
        let archive = locate_tools_archive(
            host.toolchain(TOOLCHAIN_JDK),
            &host.java_home(),
            JdkPlatform::host(),
        );
        let (mode_name, java) = match &mode {
            ExecMode::Direct => ("direct", None),
            ExecMode::Forked { java } => ("forked", Some(java.display().to_string())),
        };

        let event = serde_json::json!({
            "args": plan.args,
            "classpath": plan.classpath.entries(),
            "mode": mode_name,
            "java": java,
            "tools_archive": {
                "found": archive.is_found(),
                "candidate": archive.candidate().display().to_string(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&event)?);
    } else {
        for arg in &plan.args {
            println!("{}", arg);
        }
    }

    Ok(())
}
