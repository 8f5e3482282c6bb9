use flate2::write::GzEncoder;
use flate2::Compression;
use jqxpath::file::loader::load_selector_file;
use jqxpath::report::convert_all;
use jqxpath::RootMode;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper function to create a temporary file path with the given name
fn temp_file_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

const SELECTORS: &str = "\
# selectors from the page scraper
select option[selected]

input[type!='hidden']
#main > .item
";

#[test]
fn test_load_plain_selector_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "selectors.txt");
    fs::write(&path, SELECTORS).unwrap();

    let selectors = load_selector_file(&path).unwrap();
    assert_eq!(
        selectors,
        vec![
            "select option[selected]".to_string(),
            "input[type!='hidden']".to_string(),
            "#main > .item".to_string(),
        ]
    );
}

#[test]
fn test_plain_and_gzipped_files_load_identically() {
    let dir = TempDir::new().unwrap();
    let plain_path = temp_file_path(&dir, "selectors.txt");
    let gz_path = temp_file_path(&dir, "selectors.txt.gz");

    fs::write(&plain_path, SELECTORS).unwrap();

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(SELECTORS.as_bytes()).unwrap();
    fs::write(&gz_path, encoder.finish().unwrap()).unwrap();

    let plain = load_selector_file(&plain_path).unwrap();
    let gzipped = load_selector_file(&gz_path).unwrap();
    assert_eq!(plain, gzipped);
}

#[test]
fn test_corrupted_gzip_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "selectors.txt.gz");
    fs::write(&path, b"not gzip data").unwrap();

    let result = load_selector_file(&path);
    assert!(result.is_err());
    let err_msg = result.unwrap_err().to_string();
    assert!(err_msg.starts_with("Failed to decompress gzipped selector list from "));
    assert!(err_msg.ends_with("selectors.txt.gz"));
}

#[test]
fn test_loaded_file_converts_in_order() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "selectors.txt");
    fs::write(&path, SELECTORS).unwrap();

    let selectors = load_selector_file(&path).unwrap();
    let conversions = convert_all(&selectors, RootMode::AbsoluteAnywhere, false);

    let xpaths: Vec<&str> = conversions
        .iter()
        .map(|c| c.xpath.as_deref().unwrap())
        .collect();
    assert_eq!(
        xpaths,
        vec![
            "//select//option[@selected]",
            "//input[@type != 'hidden']",
            "//*[@id='main']/*[contains(concat(' ', normalize-space(@class), ' '), ' item ')]",
        ]
    );
}
