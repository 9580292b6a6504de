use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

static H1_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

// Detail-page titles carry site branding suffixes worth stripping.
static SITE_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*Leek Duck.*$").unwrap());
static GAME_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\|\s*Pokémon GO.*$").unwrap());

/// Page title: first top-level heading, else the document title element,
/// with known trailing suffixes removed. Empty when neither exists.
pub fn extract(doc: &Html) -> String {
    let raw = doc
        .select(&H1_SEL)
        .next()
        .or_else(|| doc.select(&TITLE_SEL).next())
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    let trimmed = raw.trim();
    let stripped = SITE_SUFFIX_RE.replace(trimmed, "");
    let stripped = GAME_SUFFIX_RE.replace(&stripped, "");
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_of(html: &str) -> String {
        extract(&Html::parse_document(html))
    }

    #[test]
    fn prefers_h1() {
        let html = "<html><head><title>Doc Title</title></head><body><h1>Raid Hour</h1></body></html>";
        assert_eq!(title_of(html), "Raid Hour");
    }

    #[test]
    fn falls_back_to_title_element() {
        let html = "<html><head><title>Community Day</title></head><body><p>no heading</p></body></html>";
        assert_eq!(title_of(html), "Community Day");
    }

    #[test]
    fn strips_site_suffix() {
        let html = "<html><head><title>Raid Hour - Leek Duck | Pokemon GO tools</title></head><body></body></html>";
        assert_eq!(title_of(html), "Raid Hour");
    }

    #[test]
    fn strips_game_suffix() {
        let html = "<body><h1>Community Day | Pokémon GO events</h1></body>";
        assert_eq!(title_of(html), "Community Day");
    }

    #[test]
    fn empty_when_absent() {
        assert_eq!(title_of("<body><p>nothing here</p></body>"), "");
    }
}
