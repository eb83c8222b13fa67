//! Locating the JDK tools archive across platform layouts.

use std::path::{Path, PathBuf};

use crate::core::host::{JdkToolchain, TOOL_JAVAC};

/// JDK layout family, as far as archive placement is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JdkPlatform {
    /// `lib/tools.jar` under the installation root.
    Generic,
    /// Apple-shipped JDKs keep the archive at `Classes/classes.jar`.
    Apple,
}

impl JdkPlatform {
    /// The platform the current process runs on.
    pub fn host() -> Self {
        if cfg!(target_os = "macos") {
            JdkPlatform::Apple
        } else {
            JdkPlatform::Generic
        }
    }

    /// Archive location under a JDK installation root.
    pub fn archive_path(&self, root: &Path) -> PathBuf {
        match self {
            JdkPlatform::Generic => root.join("lib").join("tools.jar"),
            JdkPlatform::Apple => root.join("Classes").join("classes.jar"),
        }
    }
}

/// Result of tools-archive discovery.
///
/// A miss still carries the last-computed candidate so callers can name a
/// concrete path in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolsArchive {
    /// An existing regular file.
    Found(PathBuf),
    /// No candidate exists.
    Missing { candidate: PathBuf },
}

impl ToolsArchive {
    /// The found or best-guess path.
    pub fn candidate(&self) -> &Path {
        match self {
            ToolsArchive::Found(path) => path,
            ToolsArchive::Missing { candidate } => candidate,
        }
    }

    /// Whether the archive exists.
    pub fn is_found(&self) -> bool {
        matches!(self, ToolsArchive::Found(_))
    }
}

/// Archive location implied by a compiler binary at `javac`.
///
/// JDK layouts keep `bin/` and `lib/` as siblings, so the installation root
/// is the grandparent of the compiler binary.
pub fn archive_candidate(javac: &Path, platform: JdkPlatform) -> Option<PathBuf> {
    let root = javac.parent()?.parent()?;
    Some(platform.archive_path(root))
}

/// Locate the JDK tools archive.
///
/// A configured toolchain wins: its javac anchors the candidate via
/// [`archive_candidate`]. When that yields nothing usable, the same relative
/// path is probed under `java_home`. Existence is the only check performed;
/// archive contents are never inspected.
pub fn locate_tools_archive(
    toolchain: Option<&dyn JdkToolchain>,
    java_home: &Path,
    platform: JdkPlatform,
) -> ToolsArchive {
    if let Some(javac) = toolchain.and_then(|tc| tc.find_tool(TOOL_JAVAC)) {
        if let Some(candidate) = archive_candidate(&javac, platform) {
            tracing::debug!("tools archive candidate: {}", candidate.display());
            if candidate.is_file() {
                return ToolsArchive::Found(candidate);
            }
        }
    }

    let candidate = platform.archive_path(java_home);
    tracing::debug!("tools archive candidate: {}", candidate.display());
    if candidate.is_file() {
        ToolsArchive::Found(candidate)
    } else {
        tracing::debug!("tools archive not found at {}", candidate.display());
        ToolsArchive::Missing { candidate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::InstalledJdk;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    fn jdk_with_javac(root: &Path) -> InstalledJdk {
        touch(
            &root
                .join("bin")
                .join(format!("javac{}", std::env::consts::EXE_SUFFIX)),
        );
        InstalledJdk::new(root)
    }

    #[test]
    fn test_candidate_is_grandparent_lib_tools_jar() {
        let candidate =
            archive_candidate(Path::new("/opt/jdk/bin/javac"), JdkPlatform::Generic).unwrap();
        assert_eq!(candidate, PathBuf::from("/opt/jdk/lib/tools.jar"));
    }

    #[test]
    fn test_candidate_on_apple_platform() {
        let candidate =
            archive_candidate(Path::new("/opt/jdk/bin/javac"), JdkPlatform::Apple).unwrap();
        assert_eq!(candidate, PathBuf::from("/opt/jdk/Classes/classes.jar"));
    }

    #[test]
    fn test_toolchain_archive_found() {
        let tmp = TempDir::new().unwrap();
        let jdk = jdk_with_javac(tmp.path());
        touch(&tmp.path().join("lib").join("tools.jar"));

        let archive = locate_tools_archive(
            Some(&jdk as &dyn JdkToolchain),
            Path::new("/nowhere"),
            JdkPlatform::Generic,
        );
        assert_eq!(
            archive,
            ToolsArchive::Found(tmp.path().join("lib").join("tools.jar"))
        );
    }

    #[test]
    fn test_fallback_to_java_home() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("lib").join("tools.jar"));

        let archive = locate_tools_archive(None, tmp.path(), JdkPlatform::Generic);
        assert_eq!(
            archive,
            ToolsArchive::Found(tmp.path().join("lib").join("tools.jar"))
        );
    }

    #[test]
    fn test_toolchain_miss_falls_back_to_java_home() {
        let jdk_dir = TempDir::new().unwrap();
        let jdk = jdk_with_javac(jdk_dir.path());

        let home = TempDir::new().unwrap();
        touch(&home.path().join("lib").join("tools.jar"));

        let archive = locate_tools_archive(
            Some(&jdk as &dyn JdkToolchain),
            home.path(),
            JdkPlatform::Generic,
        );
        assert_eq!(
            archive,
            ToolsArchive::Found(home.path().join("lib").join("tools.jar"))
        );
    }

    #[test]
    fn test_missing_keeps_last_candidate_for_diagnostics() {
        let home = TempDir::new().unwrap();

        let archive = locate_tools_archive(None, home.path(), JdkPlatform::Generic);
        assert!(!archive.is_found());
        assert_eq!(
            archive.candidate(),
            home.path().join("lib").join("tools.jar")
        );
    }
}
