//! In-memory project directory
//!
//! Builds an immutable tree of files plus a fake `$PATH` so detection can be
//! exercised deterministically. The tree is shared through an `Arc` and never
//! mutated after [`MemoryDirBuilder::build_at`], so concurrent lookups are safe.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::interfaces::ProjectDir;
use crate::interfaces::project_dir::{is_path_like, normalize};

#[derive(Debug, Default)]
struct MemoryTree {
    files: BTreeSet<PathBuf>,
    failures: BTreeMap<PathBuf, io::ErrorKind>,
    programs: BTreeMap<String, PathBuf>,
}

impl MemoryTree {
    fn exists(&self, path: &Path) -> bool {
        // Directories exist implicitly when something lives below them
        self.files.iter().any(|f| f.starts_with(path))
    }
}

/// A [`ProjectDir`] backed by an in-memory tree
#[derive(Debug, Clone)]
pub struct MemoryDir {
    tree: Arc<MemoryTree>,
    path: PathBuf,
}

impl MemoryDir {
    pub fn builder() -> MemoryDirBuilder {
        MemoryDirBuilder::default()
    }

    /// Another node of the same tree
    pub fn at(&self, path: impl AsRef<Path>) -> MemoryDir {
        MemoryDir {
            tree: Arc::clone(&self.tree),
            path: normalize(path.as_ref()),
        }
    }
}

/// Builder for [`MemoryDir`] trees
#[derive(Debug, Default)]
pub struct MemoryDirBuilder {
    tree: MemoryTree,
}

impl MemoryDirBuilder {
    /// Add a file at an absolute path
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.tree.files.insert(normalize(path.as_ref()));
        self
    }

    /// Make probes of `path` fail with `kind`
    pub fn failing(mut self, path: impl AsRef<Path>, kind: io::ErrorKind) -> Self {
        self.tree.failures.insert(normalize(path.as_ref()), kind);
        self
    }

    /// Register a program on the fake search path
    pub fn program(mut self, name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        self.tree.programs.insert(name.into(), location.into());
        self
    }

    /// Freeze the tree and return the node at `path`
    pub fn build_at(self, path: impl AsRef<Path>) -> MemoryDir {
        MemoryDir {
            tree: Arc::new(self.tree),
            path: normalize(path.as_ref()),
        }
    }
}

impl ProjectDir for MemoryDir {
    fn path(&self) -> &Path {
        &self.path
    }

    fn file_exists(&self, relative: &Path) -> Result<bool> {
        let target = normalize(&self.path.join(relative));
        if let Some(kind) = self.tree.failures.get(&target) {
            return Err(Error::ProbeError {
                path: target,
                source: io::Error::from(*kind),
            });
        }
        Ok(self.tree.exists(&target))
    }

    fn parent(&self) -> Option<Arc<dyn ProjectDir>> {
        self.path
            .parent()
            .map(|p| Arc::new(self.at(p)) as Arc<dyn ProjectDir>)
    }

    fn look_path(&self, program: &str) -> io::Result<PathBuf> {
        if is_path_like(program) {
            let candidate = normalize(&self.path.join(program));
            if self.tree.files.contains(&candidate) {
                return Ok(candidate);
            }
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{program}: not found in {}", self.path.display()),
            ));
        }

        self.tree.programs.get(program).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{program}: executable file not found in $PATH"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryDir {
        MemoryDir::builder()
            .file("/work/settings.gradle")
            .file("/work/gradlew")
            .file("/work/services/app/build.gradle")
            .program("gradle", "/usr/bin/gradle")
            .build_at("/work/services/app")
    }

    #[test]
    fn test_file_exists() {
        let dir = sample();
        assert!(dir.file_exists(Path::new("build.gradle")).unwrap());
        assert!(!dir.file_exists(Path::new("settings.gradle")).unwrap());
        assert!(dir.at("/work").file_exists(Path::new("services")).unwrap());
    }

    #[test]
    fn test_parent_walks_to_root() {
        let dir = sample();
        let parent = dir.parent().unwrap();
        assert_eq!(parent.path(), Path::new("/work/services"));

        let root = parent.parent().unwrap().parent().unwrap();
        assert_eq!(root.path(), Path::new("/"));
        assert!(!root.has_parent());
    }

    #[test]
    fn test_look_path() {
        let dir = sample();
        assert_eq!(
            dir.look_path("gradle").unwrap(),
            PathBuf::from("/usr/bin/gradle")
        );
        assert_eq!(
            dir.at("/work").look_path("./gradlew").unwrap(),
            PathBuf::from("/work/gradlew")
        );
        assert!(dir.look_path("./gradlew").is_err());
        assert!(dir.look_path("mvn").is_err());
    }

    #[test]
    fn test_failing_probe() {
        let dir = MemoryDir::builder()
            .failing("/work/pom.xml", io::ErrorKind::PermissionDenied)
            .build_at("/work");

        let err = dir.file_exists(Path::new("pom.xml")).unwrap_err();
        assert!(matches!(err, Error::ProbeError { .. }));
    }
}
