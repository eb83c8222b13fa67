//! Argument planning for wscompile's flag grammar.

use anyhow::Result;

use crate::core::config::InvocationConfig;
use crate::core::host::BuildHost;
use crate::driver::classpath::Classpath;
use crate::util::fs::ensure_dir;

/// Map a configuration into the ordered wscompile argument vector.
///
/// Token order follows the tool's grammar: the operation first, then flags,
/// with the tool's own configuration file as the trailing positional
/// argument. Flag values are passed through unvalidated; a malformed value
/// surfaces from the tool's own parsing.
///
/// Planning has side effects: output directories named by the configuration
/// are created here, before execution, so the tool finds them ready, and
/// the generated-sources directory is registered with the host when
/// `add_sources` is set.
pub fn plan_args(
    config: &InvocationConfig,
    classpath: &Classpath,
    host: &mut dyn BuildHost,
) -> Result<Vec<String>> {
    let mut args = Vec::new();

    args.push(format!("-{}", config.operation));

    args.push("-cp".to_string());
    args.push(classpath.join());

    if let Some(ref features) = config.features {
        args.push(format!("-features:{}", features));
    }
    if config.keep {
        args.push("-keep".to_string());
    }
    if config.debug {
        args.push("-g".to_string());
    }
    if config.optimize {
        args.push("-O".to_string());
    }
    if let Some(ref proxy) = config.http_proxy {
        args.push(format!(
            "-httpproxy:{}:{}",
            proxy.host,
            proxy.port_or_default()
        ));
    }
    if let Some(ref mapping) = config.mapping {
        args.push("-mapping".to_string());
        args.push(mapping.display().to_string());
    }
    if let Some(ref model) = config.model {
        args.push("-model".to_string());
        args.push(model.display().to_string());
    }
    if let Some(ref dir) = config.non_class_dir {
        args.push("-nd".to_string());
        args.push(dir.display().to_string());
        ensure_dir(dir)?;
    }
    if let Some(ref dir) = config.generated_sources {
        args.push("-s".to_string());
        args.push(dir.display().to_string());
        ensure_dir(dir)?;
        if config.add_sources {
            host.add_source_root(dir);
        }
    }
    if let Some(ref dir) = config.output_dir {
        args.push("-d".to_string());
        args.push(dir.display().to_string());
        ensure_dir(dir)?;
    }
    if let Some(ref source) = config.source {
        args.push("-source".to_string());
        args.push(source.clone());
    }
    if config.verbose {
        args.push("-verbose".to_string());
    }

    args.push(config.config.display().to_string());

    Ok(args)
}
