//! Batch conversion results and their output formats.

use crate::xpath::{build, RootMode};
use crate::SelectorError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// How conversion results are printed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One XPath per line
    #[default]
    Plain,
    /// A JSON array of conversion records
    Json,
}

/// The outcome of converting one selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub selector: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Conversion {
    /// Converts `selector`, recording either the XPath or the error message.
    pub fn run(selector: &str, root_mode: RootMode) -> Self {
        Self::from_result(selector, crate::convert(selector, root_mode))
    }

    fn from_result(selector: &str, result: Result<String, SelectorError>) -> Self {
        match result {
            Ok(xpath) => Self {
                selector: selector.to_string(),
                xpath: Some(xpath),
                error: None,
            },
            Err(e) => Self {
                selector: selector.to_string(),
                xpath: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Converts each selector in order.
///
/// Without `keep_going` the batch stops after the first failure, which is
/// still included as the last record.
pub fn convert_all(
    selectors: &[String],
    root_mode: RootMode,
    keep_going: bool,
) -> Vec<Conversion> {
    let mut conversions = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let conversion = Conversion::run(selector, root_mode);
        let failed = !conversion.is_ok();
        conversions.push(conversion);
        if failed && !keep_going {
            break;
        }
    }
    conversions
}

/// Writes successful conversions to `out`.
///
/// Plain output prints one XPath per line, or `selector => xpath` when
/// `echo_selector` is set. Failed conversions are skipped in plain output;
/// callers report them separately. JSON output is a pretty-printed array of
/// every record, failures included.
pub fn write_conversions<W: Write>(
    out: &mut W,
    conversions: &[Conversion],
    format: OutputFormat,
    echo_selector: bool,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for conversion in conversions {
                let Some(xpath) = &conversion.xpath else {
                    continue;
                };
                if echo_selector {
                    writeln!(out, "{} => {}", conversion.selector, xpath)?;
                } else {
                    writeln!(out, "{}", xpath)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, conversions)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Fragments and tree for one selector, as printed by `--explain`.
#[derive(Debug, Serialize)]
pub struct Explanation {
    pub selector: String,
    pub fragments: Vec<crate::selector::Fragment>,
    pub tree: crate::xpath::PathNode,
    pub xpath: String,
}

impl Explanation {
    /// Scans and builds `selector`, keeping every intermediate stage.
    pub fn new(selector: &str, root_mode: RootMode) -> Result<Self, SelectorError> {
        let fragments = crate::selector::parse(selector)?;
        let tree = build(fragments.clone(), root_mode)?;
        let xpath = tree.render();
        Ok(Self {
            selector: selector.to_string(),
            fragments,
            tree,
            xpath,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_convert_all_stops_at_first_failure() {
        let batch = selectors(&["a", "b:hover", "c"]);
        let conversions = convert_all(&batch, RootMode::AbsoluteFromRoot, false);
        assert_eq!(conversions.len(), 2);
        assert!(conversions[0].is_ok());
        assert!(!conversions[1].is_ok());
    }

    #[test]
    fn test_convert_all_keep_going() {
        let batch = selectors(&["a", "b:hover", "c"]);
        let conversions = convert_all(&batch, RootMode::AbsoluteFromRoot, true);
        assert_eq!(conversions.len(), 3);
        assert_eq!(conversions[2].xpath.as_deref(), Some("/c"));
        assert_eq!(
            conversions[1].error.as_deref(),
            Some("Unsupported filter ':hover'")
        );
    }

    #[test]
    fn test_write_plain_with_echo() {
        let conversions = convert_all(
            &selectors(&["input[type!='hidden']"]),
            RootMode::AbsoluteFromRoot,
            false,
        );
        let mut out = Vec::new();
        write_conversions(&mut out, &conversions, OutputFormat::Plain, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "input[type!='hidden'] => /input[@type != 'hidden']\n"
        );
    }

    #[test]
    fn test_write_plain_skips_failures() {
        let batch = selectors(&["a", "[x~=y]", "b"]);
        let conversions = convert_all(&batch, RootMode::Relative, true);
        let mut out = Vec::new();
        write_conversions(&mut out, &conversions, OutputFormat::Plain, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_write_json() {
        let batch = selectors(&["#x", "a >"]);
        let conversions = convert_all(&batch, RootMode::AbsoluteFromRoot, true);
        let mut out = Vec::new();
        write_conversions(&mut out, &conversions, OutputFormat::Json, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["selector"], "#x");
        assert_eq!(value[0]["xpath"], "/*[@id='x']");
        assert!(value[0].get("error").is_none());
        assert!(value[1].get("xpath").is_none());
        assert!(value[1]["error"].as_str().unwrap().contains("'>'"));
    }

    #[test]
    fn test_explanation_keeps_stages() {
        let explanation = Explanation::new("ul > li", RootMode::AbsoluteAnywhere).unwrap();
        assert_eq!(explanation.fragments.len(), 2);
        assert_eq!(explanation.xpath, "//ul/li");

        let json = serde_json::to_value(&explanation).unwrap();
        assert_eq!(json["fragments"][0]["type"], "element");
        assert_eq!(json["fragments"][1]["kind"], "child");
        assert_eq!(json["tree"]["root_mode"], "anywhere");
    }
}
