// crates/sample_code/src/config.rs

use std::path::PathBuf;

use crate::{derive_output_path, InvocationError};

/// Runtime configuration composed from the CLI.
/// Built once in `main` and handed to `run`.
#[derive(Clone, Debug)]
pub struct SampleConfig {
    pub template: PathBuf,   // must end in `.in`
    pub root: PathBuf,       // sample files resolve against this
    pub verbose: bool,
}

impl SampleConfig {
    pub fn new<T: Into<PathBuf>, R: Into<PathBuf>>(template: T, root: R) -> Self {
        Self {
            template: template.into(),
            root: root.into(),
            verbose: false,
        }
    }

    /// Where the assembled document goes. Fails when the template path
    /// lacks the `.in` suffix.
    pub fn output_path(&self) -> Result<PathBuf, InvocationError> {
        derive_output_path(&self.template)
    }
}
