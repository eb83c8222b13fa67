//! `wscompile-driver run` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::RunArgs;
use wscompile::core::host::ConfigHost;
use wscompile::ops::wscompile::run;
use wscompile::util::fs::ensure_dir;

pub fn execute(config_path: Option<PathBuf>, args: RunArgs) -> Result<()> {
    let config = super::load_config(config_path)?;

    let mut invocation = config.invocation;
    if args.no_fork {
        invocation.fork = false;
    }

    // Forked invocations run inside the class output directory.
    ensure_dir(&config.build.output_dir)?;

    let mut host = ConfigHost::new(
        config.build.classpath,
        config.build.output_dir,
        config.toolchain.jdk,
    );

    run(&mut host, &invocation)?;

    for root in host.source_roots() {
        eprintln!("    Source root {}", root.display());
    }
    eprintln!("    Finished wscompile `-{}`", invocation.operation);

    Ok(())
}
