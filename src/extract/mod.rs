pub mod description;
pub mod schedule;
pub mod title;

use chrono::DateTime;
use chrono_tz::Tz;
use scraper::Html;

/// Fields pulled from one event detail page. Anything that could not be
/// located stays empty/None; the assembler decides what that means.
#[derive(Debug, Default)]
pub struct EventDetails {
    pub title: String,
    pub start: Option<DateTime<Tz>>,
    pub end: Option<DateTime<Tz>>,
    pub description: String,
}

/// Extract title, schedule, and description from detail-page markup.
/// Infallible: a page with nothing recognizable yields the empty default.
pub fn extract(html: &str, tz: Tz) -> EventDetails {
    let doc = Html::parse_document(html);

    let title = title::extract(&doc);
    let text = page_text(&doc);
    let window = schedule::extract(&text, tz);
    let description = description::extract(&doc);

    EventDetails {
        title,
        start: window.start,
        end: window.end,
        description,
    }
}

/// Whitespace-joined text content of the whole document, the haystack for
/// the date grammar.
fn page_text(doc: &Html) -> String {
    doc.root_element().text().collect::<Vec<_>>().join(" ")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    const TZ: Tz = chrono_tz::Europe::Brussels;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
        TZ.from_local_datetime(
            &NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap(),
        )
        .unwrap()
    }

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn community_day_fixture() {
        let details = extract(&fixture("community_day"), TZ);
        assert_eq!(details.title, "October Community Day");
        assert_eq!(details.start, Some(local(2025, 10, 19, 14, 0)));
        assert_eq!(details.end, Some(local(2025, 10, 19, 17, 0)));
        assert!(details.description.contains("featured Pokemon"));
        assert!(!details.description.to_lowercase().contains("cookie"));
    }

    #[test]
    fn raid_hour_fixture() {
        let details = extract(&fixture("raid_hour"), TZ);
        assert_eq!(details.title, "Raid Hour: Mega Gengar");
        assert_eq!(details.start, Some(local(2025, 10, 15, 18, 0)));
        // Page shows only the start; the assembler applies the default.
        assert_eq!(details.end, None);
    }

    #[test]
    fn unrecognizable_page_yields_default() {
        let details = extract("<html><body><div>nothing useful</div></body></html>", TZ);
        assert!(details.title.is_empty());
        assert!(details.start.is_none());
        assert!(details.end.is_none());
        assert!(details.description.is_empty());
    }
}
