// crates/sample_code/src/lib.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

use assemble_document::assemble_document_from_file;
use sample_marker::TEMPLATE_SUFFIX;

pub mod config;

pub use config::SampleConfig;

/// Problems with the command line itself. Reported before any file is touched.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("--in-file {} does not end with \".in\"", .0.display())]
    MissingTemplateSuffix(PathBuf),
}

/// Maps `dir/page.html.in` to `page.html` one directory above `dir`.
///
/// The mapping is lexical: a trailing normal component of the template's
/// directory is popped, anything else (`..`, `.`, an empty relative parent)
/// gets a `..` appended. A root directory stays the root.
pub fn derive_output_path(template: &Path) -> Result<PathBuf, InvocationError> {
    let missing_suffix = || InvocationError::MissingTemplateSuffix(template.to_path_buf());

    let file_name = template
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(missing_suffix)?;
    let output_name = file_name
        .strip_suffix(TEMPLATE_SUFFIX)
        .filter(|name| !name.is_empty())
        .ok_or_else(missing_suffix)?;

    let mut dir = template.parent().map(Path::to_path_buf).unwrap_or_default();
    match dir.components().next_back() {
        Some(Component::Normal(_)) => {
            dir.pop();
        }
        Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
        _ => dir.push(".."),
    }
    Ok(dir.join(output_name))
}

/// Assembles the template named by `config` and writes the result.
///
/// The output file is only written once the whole document assembled; a bad
/// sample leaves the file system untouched. Returns the path written.
pub fn run(config: &SampleConfig) -> Result<PathBuf> {
    let output_path = config.output_path()?;
    log::debug!(
        "Template: {}, sample root: {}, output: {}",
        config.template.display(),
        config.root.display(),
        output_path.display()
    );

    let document = assemble_document_from_file(&config.template, &config.root)?;

    fs::write(&output_path, document)
        .with_context(|| format!("Error writing output {}", output_path.display()))?;
    log::info!("Wrote {}", output_path.display());
    Ok(output_path)
}
