//! Ordered strategy chain over all detectors

use crate::{
    build_system::BuildTool,
    command::JavaCommand,
    detectors::{
        ExecutorDetector, GradleDetector, JBangDetector, JarDetector, MavenDetector, SbtDetector,
    },
    error::{Error, Result},
};

use super::options::ExecutorOptions;

/// Picks the first detector that recognizes a directory and resolves with it.
///
/// The order is fixed: jar, maven, gradle, jbang, sbt. Marker files are not
/// mutually exclusive, so the earliest match wins and later detectors are
/// never consulted.
pub struct ExecutorResolver {
    detectors: Vec<Box<dyn ExecutorDetector>>,
}

impl ExecutorResolver {
    pub fn new() -> Self {
        Self {
            detectors: vec![
                Box::new(JarDetector),
                Box::new(MavenDetector),
                Box::new(GradleDetector),
                Box::new(JBangDetector),
                Box::new(SbtDetector),
            ],
        }
    }

    /// Tools in the order they are tried
    pub fn tools(&self) -> Vec<BuildTool> {
        self.detectors.iter().map(|d| d.tool()).collect()
    }

    /// The tool that governs the directory in `options`, if any
    pub fn detect(&self, options: &ExecutorOptions) -> Result<Option<BuildTool>> {
        Ok(self.find_detector(options)?.map(|d| d.tool()))
    }

    /// Resolve the command descriptor for the directory in `options`
    pub fn resolve(&self, options: &ExecutorOptions) -> Result<JavaCommand> {
        match self.find_detector(options)? {
            Some(detector) => detector.resolve(options),
            None => Err(Error::NoProjectDetected {
                tried: self.tools().iter().map(|t| t.name()).collect(),
            }),
        }
    }

    fn find_detector(&self, options: &ExecutorOptions) -> Result<Option<&dyn ExecutorDetector>> {
        for detector in &self.detectors {
            if detector.detect(options)? {
                tracing::debug!(
                    "Detected {} project in {}",
                    detector.tool(),
                    options.wd().path().display()
                );
                return Ok(Some(detector.as_ref()));
            }
            tracing::trace!("Not a {} project", detector.tool());
        }

        tracing::debug!(
            "No supported project detected in {}",
            options.wd().path().display()
        );
        Ok(None)
    }
}

impl Default for ExecutorResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve with the default detector chain
pub fn resolve_executor(options: &ExecutorOptions) -> Result<JavaCommand> {
    ExecutorResolver::new().resolve(options)
}
