// crates/find_sample_directives/src/lib.rs

//! Classifies template lines into plain text and sample directives.
//!
//! A directive occupies a whole line:
//!
//! ```text
//! %%% path/to/file.cpp # sample_name %%%
//! ```
//!
//! Everything else is copied through untouched, terminator included.

use once_cell::sync::Lazy;
use regex::Regex;
use sample_marker::{trim_line_ending, DIRECTIVE_DELIMITER, DIRECTIVE_SEPARATOR};

// File identifier and sample name: no whitespace, separator or delimiter chars.
static DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    let delim = regex::escape(DIRECTIVE_DELIMITER);
    let sep = regex::escape(&DIRECTIVE_SEPARATOR.to_string());
    Regex::new(&format!(
        r"^\s*{delim}\s*([^\s#%]+)\s*{sep}\s*([^\s#%]+)\s*{delim}\s*$"
    ))
    .unwrap()
});

/// A request to splice sample `name` from `file` into the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    /// Path of the source file, relative to the sample root.
    pub file: String,
    /// Name carried by the `// sample(...)` marker.
    pub name: String,
}

/// One line of a template, in template order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateLine<'a> {
    /// Raw line, including its `\n` / `\r\n` terminator if it had one.
    Text(&'a str),
    Directive(Directive),
}

/// Parses a single line as a directive. The line may still carry its
/// terminator.
pub fn parse_directive(line: &str) -> Option<Directive> {
    let caps = DIRECTIVE_RE.captures(trim_line_ending(line))?;
    Some(Directive {
        file: caps[1].to_string(),
        name: caps[2].to_string(),
    })
}

/// Splits `content` into lines (terminators retained) and classifies each one.
///
/// Concatenating the `Text` entries of a template without directives gives
/// back `content` unchanged.
pub fn scan_template(content: &str) -> Vec<TemplateLine<'_>> {
    content
        .split_inclusive('\n')
        .map(|line| match parse_directive(line) {
            Some(directive) => TemplateLine::Directive(directive),
            None => TemplateLine::Text(line),
        })
        .collect()
}

/// Number of directive lines in `content`.
pub fn count_directives(content: &str) -> usize {
    content
        .split_inclusive('\n')
        .filter(|line| parse_directive(line).is_some())
        .count()
}
