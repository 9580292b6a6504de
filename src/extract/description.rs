use std::sync::LazyLock;

use scraper::{Html, Selector};

/// Content-area candidates, most specific first. The first container that
/// structurally matches (exists and holds at least one paragraph) wins,
/// even when every paragraph is then filtered away.
const CONTENT_SELECTORS: &[&str] = &[
    "div.entry-content",
    "div.event-description",
    "div.content",
    "article",
    "main",
];

/// Paragraphs at or under this length are navigation crumbs, not prose.
const MIN_PARAGRAPH_CHARS: usize = 20;
const MAX_PARAGRAPHS: usize = 5;
const NOISE_KEYWORD: &str = "cookie";

static P_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());
static CONTENT_SELS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    CONTENT_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
});

/// Assemble a description from the first matching content area. Empty when
/// no candidate matches or everything is filtered out.
pub fn extract(doc: &Html) -> String {
    for sel in CONTENT_SELS.iter() {
        if let Some(container) = doc.select(sel).next() {
            let paragraphs: Vec<String> = container
                .select(&P_SEL)
                .map(|p| p.text().collect::<String>().trim().to_string())
                .collect();
            if paragraphs.is_empty() {
                continue;
            }
            let kept: Vec<&str> = paragraphs
                .iter()
                .map(String::as_str)
                .filter(|t| qualifies(t))
                .take(MAX_PARAGRAPHS)
                .collect();
            return kept.join("\n\n");
        }
    }
    String::new()
}

fn qualifies(text: &str) -> bool {
    text.chars().count() > MIN_PARAGRAPH_CHARS && !text.to_lowercase().contains(NOISE_KEYWORD)
}

// ── Tests ──
