// crates/sample_marker/src/lib.rs

//! Marker tokens shared by the directive scanner, the sample extractor
//! and the CLI.

/// Opens and closes a directive line: `%%% file # name %%%`.
pub const DIRECTIVE_DELIMITER: &str = "%%%";

/// Separates the file identifier from the sample name inside a directive.
pub const DIRECTIVE_SEPARATOR: char = '#';

/// Keyword of the comment line that opens a region: `// sample(name)`.
pub const SAMPLE_BEGIN_KEYWORD: &str = "sample";

/// Keyword of the comment line that closes a region: `// end-sample(name)`.
pub const SAMPLE_END_KEYWORD: &str = "end-sample";

/// Suffix every template path must carry. The output path drops it.
pub const TEMPLATE_SUFFIX: &str = ".in";

/// Language tag written on the opening fence of every sampled block.
pub const FRAGMENT_LANGUAGE: &str = "c++";

/// Removes a trailing `\n` or `\r\n` from a line produced by
/// `str::split_inclusive('\n')`. Marker patterns are matched against the
/// result; the caller keeps the original line for verbatim output.
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
