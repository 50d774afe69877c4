// File: src/resources.rs
// Purpose: Filesystem resource resolution with degrade-to-absent semantics

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Resolves logical resource paths (template paths, documentation paths)
/// against a filesystem root.
///
/// Missing or unreadable resources are reported as absence, never as
/// errors; failures are logged at info level.
#[derive(Debug, Clone)]
pub struct Resources {
    root: PathBuf,
}

impl Resources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read a logical resource to a string.
    pub fn read(&self, path: &str) -> Option<String> {
        self.read_file(&self.resolve(path))
    }

    /// Read a concrete file to a string.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(err) => {
                info!("Could not read resource {:?}: {}", path, err);
                None
            }
        }
    }

    /// Parent directory of a resolved resource path, when the file exists.
    pub fn resolve_dir(&self, path: &str) -> Option<PathBuf> {
        let file = self.resolve(path);
        if !file.is_file() {
            info!("Could not find directory for resource={}", path);
            return None;
        }
        file.parent().map(Path::to_path_buf)
    }

    /// Resolve a logical path against the root. Leading slashes are
    /// stripped so "/docs/intro.md" and "docs/intro.md" are equivalent.
    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_missing_resource_is_none() {
        let resources = Resources::new(".");
        assert_eq!(resources.read("does/not/exist.md"), None);
    }

    #[test]
    fn test_read_and_resolve_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("widgets");
        fs::create_dir_all(&sub).unwrap();
        let mut file = fs::File::create(sub.join("widget.html")).unwrap();
        writeln!(file, "<p>widget</p>").unwrap();

        let resources = Resources::new(dir.path());
        assert!(resources
            .read("widgets/widget.html")
            .unwrap()
            .contains("widget"));
        assert_eq!(resources.resolve_dir("widgets/widget.html"), Some(sub));
        assert_eq!(resources.resolve_dir("widgets/missing.html"), None);
    }

    #[test]
    fn test_leading_slash_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("intro.md"), "# Intro").unwrap();

        let resources = Resources::new(dir.path());
        assert_eq!(resources.read("/intro.md"), Some("# Intro".to_string()));
    }
}
