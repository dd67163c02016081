// crates/sample_snippet_extractor/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failures while looking up a sample region.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The region was never opened, or opened and never closed.
    #[error("Bad sample `{name}` in {file} (nonexistent or not closed)")]
    Malformed { file: String, name: String },

    #[error("Error reading sample file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SampleError {
    pub fn malformed(file: &str, name: &str) -> Self {
        SampleError::Malformed {
            file: file.to_string(),
            name: name.to_string(),
        }
    }
}
