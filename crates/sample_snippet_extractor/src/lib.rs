// crates/sample_snippet_extractor/src/lib.rs

use std::fmt;
use std::fs;
use std::path::Path;

use sample_marker::FRAGMENT_LANGUAGE;

pub mod error;
pub mod processor;
pub mod utils;

pub use error::SampleError;
pub use processor::{sample_with_source, FileSampleSource, SampleSource};
pub use utils::marker_utils::{parse_begin_marker, parse_end_marker};

use utils::marker_utils::{closes_region, opens_region};

/// A region lifted out of a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    /// File identifier exactly as the directive spelled it.
    pub file: String,
    pub name: String,
    /// Lines strictly between the markers, terminators included.
    pub body: String,
}

impl Sample {
    /// Wraps the body in the HTML comment banners and the code fence.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!-- Sampled from {} {} -->", self.file, self.name)?;
        writeln!(f, "```{}", FRAGMENT_LANGUAGE)?;
        f.write_str(&self.body)?;
        writeln!(f, "```")?;
        writeln!(f, "<!-- End sample -->")
    }
}

enum ScanState {
    Searching,
    Collecting,
}

/// Scans `content` for the region called `name`.
///
/// Only markers carrying `name` change state; markers for other regions
/// inside the requested one are copied like any other line. A repeated
/// `// sample(name)` while collecting is dropped and collection goes on.
/// The first matching `// end-sample(name)` after the opening marker ends
/// the scan.
pub fn extract_sample_from_str(content: &str, file: &str, name: &str) -> Result<Sample, SampleError> {
    let mut state = ScanState::Searching;
    let mut body = String::new();

    for line in content.split_inclusive('\n') {
        if opens_region(line, name) {
            state = ScanState::Collecting;
            continue;
        }
        match state {
            ScanState::Searching => {}
            ScanState::Collecting => {
                if closes_region(line, name) {
                    return Ok(Sample {
                        file: file.to_string(),
                        name: name.to_string(),
                        body,
                    });
                }
                body.push_str(line);
            }
        }
    }

    Err(SampleError::malformed(file, name))
}

/// Reads `root/file` and extracts the region called `name`.
///
/// Every call opens and reads the file afresh; nothing is cached.
pub fn extract_sample<P: AsRef<Path>>(root: P, file: &str, name: &str) -> Result<Sample, SampleError> {
    let path = root.as_ref().join(file);
    log::debug!("Sampling `{}` from {}", name, path.display());
    let content = fs::read_to_string(&path).map_err(|source| SampleError::Read {
        path: path.clone(),
        source,
    })?;
    extract_sample_from_str(&content, file, name)
}
