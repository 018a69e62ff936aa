use serde::{Deserialize, Serialize};

/// Fallback used when a page carries no `<title>` element.
pub const NO_TITLE: &str = "No title found";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedPage {
    pub title: String,
    pub text: String,
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    let space_regex = regex::Regex::new(r"\s+").unwrap();
    space_regex.replace_all(text.trim(), " ").to_string()
}
