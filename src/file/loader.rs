//! Selector list loading.
//!
//! A selector list is plain text with one selector per line. Blank lines and
//! comment lines (`#` followed by whitespace, or a lone `#`) are skipped, so
//! id selectors such as `#main` still work at the start of a line. Files
//! ending in `.gz` and gzip compressed stdin are decompressed transparently.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Loads a selector list from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use jqxpath::file::loader::load_selector_file;
///
/// let selectors = load_selector_file("selectors.txt").unwrap();
/// for selector in &selectors {
///     println!("{}", selector);
/// }
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist
/// - The file cannot be read (permissions, etc.)
/// - A `.gz` file is not valid gzip or does not decompress to UTF-8
pub fn load_selector_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        let file = fs::File::open(path_ref)
            .with_context(|| format!("Failed to open {}", path_ref.display()))?;
        gunzip(file, &path_ref.display().to_string())?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read {}", path_ref.display()))?
    };

    Ok(parse_selector_list(&content))
}

/// Reads a selector list from standard input until EOF.
///
/// Input starting with the gzip magic bytes (0x1f 0x8b) is decompressed first.
pub fn load_selectors_from_stdin() -> Result<Vec<String>> {
    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = decode_bytes(buffer)?;
    Ok(parse_selector_list(&content))
}

/// Decodes selector list bytes read from stdin, decompressing gzip if the
/// magic bytes are present.
pub fn decode_bytes(bytes: Vec<u8>) -> Result<String> {
    if bytes.starts_with(&[0x1f, 0x8b]) {
        gunzip(bytes.as_slice(), "stdin")
    } else {
        String::from_utf8(bytes).context("Invalid UTF-8 in selector list")
    }
}

/// Splits selector list content into selectors.
///
/// Each line is trimmed; blank lines and comment lines are skipped.
pub fn parse_selector_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_comment(line))
        .map(str::to_string)
        .collect()
}

fn is_comment(line: &str) -> bool {
    match line.strip_prefix('#') {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

/// Inflates a gzip stream holding a selector list. `source` names the
/// stream in error messages.
fn gunzip<R: Read>(reader: R, source: &str) -> Result<String> {
    let mut content = String::new();
    GzDecoder::new(reader)
        .read_to_string(&mut content)
        .with_context(|| {
            format!(
                "Failed to decompress gzipped selector list from {}",
                source
            )
        })?;
    Ok(content)
}
