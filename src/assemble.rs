use anyhow::Result;
use chrono::Duration;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::category;
use crate::config::ScrapeConfig;
use crate::extract::{self, EventDetails};
use crate::fetch::PageFetcher;
use crate::listing::LinkCandidate;
use crate::model::EventRecord;

const DEFAULT_DURATION_HOURS: i64 = 1;
const PLACEHOLDER_DESCRIPTION: &str = "Event details from LeekDuck";

/// Counters for one assembly run.
#[derive(Debug, Default)]
pub struct AssembleStats {
    pub candidates: usize,
    pub emitted: usize,
    pub dropped: usize,
    pub fetch_errors: usize,
}

/// Walk deduplicated candidates in listing order: fetch each detail page,
/// extract, and normalize into records. One bad page never aborts the run.
pub async fn assemble(
    fetcher: &PageFetcher,
    config: &ScrapeConfig,
    candidates: Vec<(String, LinkCandidate)>,
) -> Result<(Vec<EventRecord>, AssembleStats)> {
    let mut stats = AssembleStats {
        candidates: candidates.len(),
        ..Default::default()
    };
    let mut records = Vec::new();

    let pb = ProgressBar::new(candidates.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    for (url, link) in candidates {
        pb.set_message(truncated_label(link.fallback_title()));

        let details = match fetcher.fetch_detail(&url).await {
            Ok(body) => extract::extract(&body, config.timezone),
            Err(e) => {
                warn!("Failed to fetch {}: {:#}", url, e);
                stats.fetch_errors += 1;
                EventDetails::default()
            }
        };

        match build_record(&url, &link, details) {
            Some(record) => {
                records.push(record);
                stats.emitted += 1;
            }
            None => {
                info!("Skipping {} (no start date found)", url);
                stats.dropped += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!(
        "Assembled {} events ({} dropped, {} fetch errors)",
        stats.emitted, stats.dropped, stats.fetch_errors
    );

    Ok((records, stats))
}

/// Normalize one extraction into a record. `None` means the candidate is
/// dropped: without a start there is nothing to put on a calendar.
fn build_record(source_url: &str, link: &LinkCandidate, details: EventDetails) -> Option<EventRecord> {
    let title = if details.title.is_empty() {
        link.fallback_title().to_string()
    } else {
        details.title
    };
    let category = category::classify(&title);
    let title = format!("{} {}", category.glyph(), title);

    let start = details.start?;
    let end = details
        .end
        .unwrap_or_else(|| start + Duration::hours(DEFAULT_DURATION_HOURS));
    if end < start {
        warn!("{}: end predates start ({} < {})", source_url, end, start);
    }

    let description = if details.description.is_empty() {
        PLACEHOLDER_DESCRIPTION.to_string()
    } else {
        details.description
    };

    Some(EventRecord {
        title,
        category,
        start,
        end,
        description,
        source_url: source_url.to_string(),
        image_url: String::new(),
    })
}

fn truncated_label(title: &str) -> String {
    const MAX: usize = 40;
    if title.chars().count() <= MAX {
        title.to_string()
    } else {
        let short: String = title.chars().take(MAX).collect();
        format!("{}...", short)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::EventCategory;
    use chrono::{DateTime, NaiveDate, TimeZone};
    use chrono_tz::Tz;

    const TZ: Tz = chrono_tz::Europe::Brussels;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
        TZ.from_local_datetime(
            &NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap(),
        )
        .unwrap()
    }

    fn link(text: &str) -> LinkCandidate {
        LinkCandidate {
            href: "/events/test-event/".to_string(),
            text: text.to_string(),
        }
    }

    const URL: &str = "https://leekduck.com/events/test-event/";

    #[test]
    fn missing_start_drops_the_candidate() {
        let details = EventDetails {
            title: "Fully Described Event".to_string(),
            start: None,
            end: Some(local(2025, 10, 19, 17, 0)),
            description: "A description that is present.".to_string(),
        };
        assert!(build_record(URL, &link("Fallback"), details).is_none());
    }

    #[test]
    fn missing_end_defaults_to_one_hour() {
        let details = EventDetails {
            title: "Raid Hour: Mega Gengar".to_string(),
            start: Some(local(2025, 10, 15, 18, 0)),
            end: None,
            description: String::new(),
        };
        let record = build_record(URL, &link(""), details).unwrap();
        assert_eq!(record.end - record.start, Duration::hours(1));
        assert_eq!(record.end, local(2025, 10, 15, 19, 0));
    }

    #[test]
    fn empty_title_falls_back_to_link_text_first_line() {
        let details = EventDetails {
            start: Some(local(2025, 10, 19, 14, 0)),
            ..Default::default()
        };
        let record = build_record(URL, &link("Community Day\nOct 19"), details).unwrap();
        assert_eq!(record.category, EventCategory::CommunityDay);
        assert_eq!(record.title, "👥 Community Day");
    }

    #[test]
    fn glyph_prefixes_extracted_title() {
        let details = EventDetails {
            title: "Mega Raid Battles".to_string(),
            start: Some(local(2025, 10, 1, 10, 0)),
            ..Default::default()
        };
        let record = build_record(URL, &link("ignored"), details).unwrap();
        assert_eq!(record.category, EventCategory::MegaRaid);
        assert!(record.title.starts_with("💫 "));
    }

    #[test]
    fn empty_description_gets_placeholder() {
        let details = EventDetails {
            title: "Some Event".to_string(),
            start: Some(local(2025, 10, 1, 10, 0)),
            ..Default::default()
        };
        let record = build_record(URL, &link(""), details).unwrap();
        assert_eq!(record.description, PLACEHOLDER_DESCRIPTION);
    }

    #[test]
    fn inverted_window_passes_through() {
        let details = EventDetails {
            title: "Odd Event".to_string(),
            start: Some(local(2025, 10, 2, 10, 0)),
            end: Some(local(2025, 10, 1, 10, 0)),
            ..Default::default()
        };
        let record = build_record(URL, &link(""), details).unwrap();
        assert!(record.end < record.start);
    }

    #[test]
    fn source_url_and_reserved_image_field() {
        let details = EventDetails {
            title: "Some Event".to_string(),
            start: Some(local(2025, 10, 1, 10, 0)),
            ..Default::default()
        };
        let record = build_record(URL, &link(""), details).unwrap();
        assert_eq!(record.source_url, URL);
        assert!(record.image_url.is_empty());
    }
}
