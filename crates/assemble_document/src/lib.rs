use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use find_sample_directives::{count_directives, scan_template, TemplateLine};
use sample_snippet_extractor::{sample_with_source, FileSampleSource, SampleSource};

/// Public API: replaces every directive line in `template` with the rendered
/// sample it names, and copies all other lines verbatim.
///
/// Each directive is looked up independently, even when the same file and
/// name appear more than once. The first failed lookup aborts the whole
/// document.
pub fn assemble_document(template: &str, source: &dyn SampleSource) -> Result<String> {
    log::debug!("{} directive(s) in template", count_directives(template));
    let mut output = String::with_capacity(template.len());

    for line in scan_template(template) {
        match line {
            TemplateLine::Text(text) => output.push_str(text),
            TemplateLine::Directive(directive) => {
                let sample = sample_with_source(source, &directive.file, &directive.name)
                    .with_context(|| {
                        format!(
                            "Failed to sample `{}` from {}",
                            directive.name, directive.file
                        )
                    })?;
                log::debug!(
                    "Spliced {} ({} bytes) from {}",
                    directive.name,
                    sample.body.len(),
                    directive.file
                );
                output.push_str(&sample.render());
            }
        }
    }

    Ok(output)
}

/// Reads the template at `template_path` and assembles it against sample
/// files under `root`.
pub fn assemble_document_from_file<P: AsRef<Path>, R: AsRef<Path>>(template_path: P, root: R) -> Result<String> {
    let template_path = template_path.as_ref();
    let template = fs::read_to_string(template_path)
        .with_context(|| format!("Error reading template {}", template_path.display()))?;
    let source = FileSampleSource::new(root.as_ref());
    assemble_document(&template, &source)
}
