//! Deduplicated, order-stable classpath assembly.

use std::fmt;

/// Separator between classpath entries on this platform.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: &str = ";";
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: &str = ":";

/// An insertion-ordered set of classpath entries.
///
/// Duplicates keep their first occurrence; empty entries are dropped. Entry
/// counts stay small (a dependency list plus an output directory and maybe
/// an archive), so a linear scan is all the dedup needs.
#[derive(Debug, Clone, Default)]
pub struct Classpath {
    entries: Vec<String>,
}

impl Classpath {
    /// Create an empty classpath.
    pub fn new() -> Self {
        Classpath {
            entries: Vec::new(),
        }
    }

    /// Add one entry unless it is empty or already present.
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if entry.is_empty() || self.entries.contains(&entry) {
            return;
        }
        self.entries.push(entry);
    }

    /// Add entries in order, with the same dedup rule as [`Classpath::push`].
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for entry in entries {
            self.push(entry);
        }
    }

    /// The entries in first-occurrence order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Join the entries with the platform separator.
    pub fn join(&self) -> String {
        self.entries.join(PATH_LIST_SEPARATOR)
    }
}

impl fmt::Display for Classpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_first_occurrence_order() {
        let mut cp = Classpath::new();
        cp.push("/a.jar");
        cp.push("/b.jar");
        cp.push("/a.jar");
        cp.push("/c.jar");
        cp.push("/b.jar");

        assert_eq!(cp.entries(), &["/a.jar", "/b.jar", "/c.jar"]);
    }

    #[test]
    fn test_empty_entries_are_dropped() {
        let mut cp = Classpath::new();
        cp.push("");
        cp.push("/a.jar");
        cp.push("");

        assert_eq!(cp.entries(), &["/a.jar"]);
    }

    #[test]
    fn test_join_uses_platform_separator() {
        let mut cp = Classpath::new();
        cp.push("/a.jar");
        cp.push("/b.jar");

        assert_eq!(cp.join(), format!("/a.jar{}/b.jar", PATH_LIST_SEPARATOR));
        assert_eq!(cp.to_string(), cp.join());
    }

    #[test]
    fn test_join_single_entry_has_no_separator() {
        let mut cp = Classpath::new();
        cp.push("/only.jar");

        assert_eq!(cp.join(), "/only.jar");
    }

    #[test]
    fn test_extend_dedupes_across_sources() {
        let mut cp = Classpath::new();
        cp.extend(["/dep.jar".to_string(), "/shared.jar".to_string()]);
        cp.push("/classes");
        cp.extend(["/shared.jar", "/tools.jar"]);

        assert_eq!(
            cp.entries(),
            &["/dep.jar", "/shared.jar", "/classes", "/tools.jar"]
        );
    }
}
