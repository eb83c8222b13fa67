//! Command implementations

pub mod plan;
pub mod run;

use std::path::PathBuf;

use anyhow::{bail, Result};

use wscompile::util::config::{find_config, DriverConfig};
use wscompile::util::fs::normalize_path;

/// Locate and load `wscompile.toml`, resolving relative paths against
/// its directory.
fn load_config(config_path: Option<PathBuf>) -> Result<DriverConfig> {
    let config_path = match config_path {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir()?;
            match find_config(&cwd) {
                Some(path) => path,
                None => bail!(
                    "could not find `wscompile.toml` in `{}` or any parent directory",
                    cwd.display()
                ),
            }
        }
    };

    let base = match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    // Forked invocations change working directory, so the plan needs
    // absolute paths.
    let base = normalize_path(&base);

    Ok(DriverConfig::load(&config_path)?.absolutized(&base))
}
