//! Directory abstraction interface
//!
//! Detection only needs a narrow view of the filesystem: whether a marker
//! exists, what the parent directory is, and where an executable lives.
//! Keeping it behind a trait lets the resolver run against the real
//! filesystem or an in-memory tree.

use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};

/// A directory node in an ancestor chain
pub trait ProjectDir: fmt::Debug + Send + Sync {
    /// The path this node stands for, used for diagnostics and module addressing
    fn path(&self) -> &Path;

    /// Check whether `relative` exists below this directory.
    ///
    /// A missing entry is `Ok(false)`; any other I/O failure is a
    /// [`Error::ProbeError`].
    fn file_exists(&self, relative: &Path) -> Result<bool>;

    /// The enclosing directory, or `None` at the top of the tree
    fn parent(&self) -> Option<Arc<dyn ProjectDir>>;

    fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    /// Resolve `program` to a concrete executable path.
    ///
    /// Programs containing a path separator are resolved relative to this
    /// directory; bare names are looked up on the search path.
    fn look_path(&self, program: &str) -> io::Result<PathBuf>;
}

/// Probe `candidates` in order and return the first executable found.
///
/// Fails with every candidate tried and the last lookup error.
pub fn find_executable(dir: &dyn ProjectDir, candidates: &[String]) -> Result<PathBuf> {
    let mut last_error = None;

    for candidate in candidates {
        match dir.look_path(candidate) {
            Ok(path) => {
                tracing::debug!(
                    "Resolved executable {} to {} from {}",
                    candidate,
                    path.display(),
                    dir.path().display()
                );
                return Ok(path);
            }
            Err(e) => {
                tracing::trace!("Executable candidate {} not usable: {}", candidate, e);
                last_error = Some(e);
            }
        }
    }

    Err(Error::ExecutableNotFound {
        candidates: candidates.to_vec(),
        source: last_error
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no candidates given")),
    })
}

/// Whether `program` names a path rather than a bare command
pub(crate) fn is_path_like(program: &str) -> bool {
    let path = Path::new(program);
    path.is_absolute() || path.components().count() > 1
}

/// Lexically normalize a path (drop `.`, fold `..`)
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                match components.last() {
                    Some(Component::Normal(_)) => {
                        components.pop();
                    }
                    // `..` above the root is the root
                    Some(Component::RootDir | Component::Prefix(_)) => {}
                    _ => components.push(component),
                }
            }
            Component::CurDir => {}
            c => components.push(c),
        }
    }

    components.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_path_like() {
        assert!(is_path_like("./gradlew"));
        assert!(is_path_like("/usr/bin/mvn"));
        assert!(is_path_like("bin/sbt"));
        assert!(!is_path_like("gradle"));
        assert!(!is_path_like("mvn"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(Path::new("/work/app/./gradlew")),
            PathBuf::from("/work/app/gradlew")
        );
        assert_eq!(
            normalize(Path::new("/work/app/../mvnw")),
            PathBuf::from("/work/mvnw")
        );
        assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(normalize(Path::new("../../x")), PathBuf::from("../../x"));
        assert_eq!(normalize(Path::new("./../a/../../x")), PathBuf::from("../../x"));
    }
}
