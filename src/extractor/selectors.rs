//! Data-driven selector priority list for locating article bodies.
//!
//! Ordered from most to least specific: semantic article containers first,
//! then common CMS class names, then `main` regions. The first selector that
//! matches any node wins; keeping the list as data rather than branching
//! makes each entry independently testable.

pub const CONTENT_SELECTORS: &[&str] = &[
    "article",
    ".article-content",
    ".post-content",
    ".entry-content",
    "main",
    ".main-content",
    ".story-body",
    ".article-body",
];

/// Last-resort selector when no container matches.
pub const PARAGRAPH_FALLBACK: &str = "p";

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn every_selector_parses() {
        for raw in CONTENT_SELECTORS.iter().chain([&PARAGRAPH_FALLBACK]) {
            assert!(Selector::parse(raw).is_ok(), "bad selector: {raw}");
        }
    }
}
