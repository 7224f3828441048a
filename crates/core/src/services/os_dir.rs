//! Filesystem-backed project directory

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::interfaces::ProjectDir;
use crate::interfaces::project_dir::normalize;

/// A [`ProjectDir`] over the real filesystem and `$PATH`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsDir {
    path: PathBuf,
}

impl OsDir {
    /// Relative paths are anchored at the process working directory so the
    /// ancestor walk reaches the filesystem root.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = std::path::absolute(&path).unwrap_or(path);
        Self {
            path: normalize(&path),
        }
    }

    /// The process working directory
    pub fn current() -> io::Result<Self> {
        Ok(Self::new(env::current_dir()?))
    }
}

impl ProjectDir for OsDir {
    fn path(&self) -> &Path {
        &self.path
    }

    fn file_exists(&self, relative: &Path) -> Result<bool> {
        let target = self.path.join(relative);
        match std::fs::metadata(&target) {
            Ok(_) => Ok(true),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                Ok(false)
            }
            Err(e) => Err(Error::ProbeError {
                path: target,
                source: e,
            }),
        }
    }

    fn parent(&self) -> Option<Arc<dyn ProjectDir>> {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| Arc::new(OsDir::new(p)) as Arc<dyn ProjectDir>)
    }

    fn look_path(&self, program: &str) -> io::Result<PathBuf> {
        which::which_in(program, env::var_os("PATH"), &self.path)
            .map(|path| normalize(&path))
            .map_err(|e| io::Error::new(io::ErrorKind::NotFound, format!("{program}: {e}")))
    }
}
