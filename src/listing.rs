use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

/// Event detail pages all live under this path on the site.
const EVENT_PATH_PREFIX: &str = "/events/";

/// Shorter hrefs are index/placeholder links, not detail pages.
const MIN_HREF_LEN: usize = 10;

static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// A discovered link that looks like an event detail page, pending dedup.
#[derive(Debug, Clone)]
pub struct LinkCandidate {
    pub href: String,
    /// Visible anchor text from the listing page.
    pub text: String,
}

impl LinkCandidate {
    /// First line of the anchor text, used when the detail page yields no
    /// title of its own.
    pub fn fallback_title(&self) -> &str {
        self.text.lines().next().unwrap_or("").trim()
    }
}

/// Collect candidate event links from the listing page, in page order.
pub fn discover_event_links(html: &str) -> Vec<LinkCandidate> {
    let doc = Html::parse_document(html);
    doc.select(&ANCHOR_SEL)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            if !href.starts_with(EVENT_PATH_PREFIX) || href.len() <= MIN_HREF_LEN {
                return None;
            }
            Some(LinkCandidate {
                href: href.to_string(),
                text: a.text().collect::<String>().trim().to_string(),
            })
        })
        .collect()
}

/// Canonicalize hrefs against the site base and drop repeats, preserving
/// listing order. Listing pages routinely link the same event several times
/// (tile, banner, "ongoing" rail).
pub fn unique_candidates(base: &Url, links: Vec<LinkCandidate>) -> Vec<(String, LinkCandidate)> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();

    for link in links {
        let canonical = match base.join(&link.href) {
            Ok(u) => u.to_string(),
            Err(_) => continue,
        };
        if seen.insert(canonical.clone()) {
            unique.push((canonical, link));
        }
    }

    unique
}

// ── Tests ──
