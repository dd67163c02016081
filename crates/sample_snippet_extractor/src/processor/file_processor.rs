// crates/sample_snippet_extractor/src/processor/file_processor.rs

use std::path::{Path, PathBuf};

use crate::error::SampleError;
use crate::{extract_sample, Sample};

/// Trait that abstracts where samples come from.
pub trait SampleSource {
    /// Looks up the region `name` in the source identified by `file`.
    fn sample(&self, file: &str, name: &str) -> Result<Sample, SampleError>;
}

/// Default implementation of the `SampleSource` trait.
/// Resolves file identifiers against a root directory on disk.
pub struct FileSampleSource {
    root: PathBuf,
}

impl FileSampleSource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SampleSource for FileSampleSource {
    fn sample(&self, file: &str, name: &str) -> Result<Sample, SampleError> {
        extract_sample(&self.root, file, name)
    }
}

/// Public API function to look up a sample through a provided `SampleSource`.
pub fn sample_with_source(source: &dyn SampleSource, file: &str, name: &str) -> Result<Sample, SampleError> {
    source.sample(file, name)
}
