pub mod model;
pub mod selectors;

pub use model::ExtractedPage;

use crate::extractor::model::{NO_TITLE, normalize_whitespace};
use crate::extractor::selectors::{CONTENT_SELECTORS, PARAGRAPH_FALLBACK};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Pages yielding less normalized text than this are treated as failed
/// extractions. Paywalls, JS-rendered shells and anti-bot walls all produce
/// near-empty bodies that would only feed the analyst garbage.
const MIN_CONTENT_LENGTH: usize = 100;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("insufficient content extracted from URL ({length} chars)")]
    InsufficientContent { length: usize },
}

/// Derive a plain-text title and body from raw article HTML.
///
/// The body comes from the first entry in [`CONTENT_SELECTORS`] that matches
/// any node; all matched nodes contribute, joined by single spaces. When no
/// container matches, every paragraph on the page is used instead.
pub fn extract(html: &str) -> Result<ExtractedPage, ExtractError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document);

    let mut text = String::new();
    for raw in CONTENT_SELECTORS {
        let selector = Selector::parse(raw).expect("selector list entries are valid CSS");
        let matched = collect_matches(&document, &selector);
        if !matched.is_empty() {
            text = matched.join(" ");
            break;
        }
    }

    if text.is_empty() {
        let paragraphs = Selector::parse(PARAGRAPH_FALLBACK).expect("valid selector");
        text = collect_matches(&document, &paragraphs).join(" ");
    }

    let text = normalize_whitespace(&text);
    let length = text.chars().count();
    if length < MIN_CONTENT_LENGTH {
        return Err(ExtractError::InsufficientContent { length });
    }

    Ok(ExtractedPage { title, text })
}

fn extract_title(document: &Html) -> String {
    let selector = Selector::parse("title").expect("valid selector");
    document
        .select(&selector)
        .next()
        .map(|el| normalize_whitespace(&element_text(el)))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string())
}

fn collect_matches(document: &Html, selector: &Selector) -> Vec<String> {
    document.select(selector).map(element_text).collect()
}

/// Text content of an element, skipping script/style/noscript subtrees so
/// inline code and CSS never leak into the extracted body.
fn element_text(element: ElementRef) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            scraper::Node::Text(text) => out.push_str(text),
            scraper::Node::Element(el)
                if matches!(el.name(), "script" | "style" | "noscript") => {}
            scraper::Node::Element(_) => {
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(child_ref, out);
                }
            }
            _ => {}
        }
    }
}
