// src/utils/marker_utils.rs

use once_cell::sync::Lazy;
use regex::Regex;
use sample_marker::{trim_line_ending, SAMPLE_BEGIN_KEYWORD, SAMPLE_END_KEYWORD};

fn marker_regex(keyword: &str) -> Regex {
    Regex::new(&format!(
        r"^\s*//\s*{}\s*\(\s*([^\s)]+)\s*\)\s*$",
        regex::escape(keyword)
    ))
    .unwrap()
}

// `// sample(name)`
static BEGIN_RE: Lazy<Regex> = Lazy::new(|| marker_regex(SAMPLE_BEGIN_KEYWORD));

// `// end-sample(name)`
static END_RE: Lazy<Regex> = Lazy::new(|| marker_regex(SAMPLE_END_KEYWORD));

/// Returns the name carried by a `// sample(name)` line, if `line` is one.
/// A trailing `\n` or `\r\n` is ignored.
pub fn parse_begin_marker(line: &str) -> Option<&str> {
    BEGIN_RE
        .captures(trim_line_ending(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns the name carried by a `// end-sample(name)` line, if `line` is one.
pub fn parse_end_marker(line: &str) -> Option<&str> {
    END_RE
        .captures(trim_line_ending(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// True if `line` opens the region called `name`.
pub fn opens_region(line: &str, name: &str) -> bool {
    parse_begin_marker(line) == Some(name)
}

/// True if `line` closes the region called `name`.
pub fn closes_region(line: &str, name: &str) -> bool {
    parse_end_marker(line) == Some(name)
}
