use std::sync::LazyLock;

use chrono::DateTime;
use chrono_tz::Tz;
use regex::Regex;

use crate::datetime;

/// Labeled start: "Starts: Tuesday, October 7, 2025, at 10:00 AM Local Time".
static START_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Starts?:\s+([A-Za-z]+,\s+[A-Za-z]+\s+\d+,\s+\d{4},\s+at\s+\d+:\d+\s+[AP]M\s+Local\s+Time)",
    )
    .unwrap()
});

/// Labeled end, same shape as the start label.
static END_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Ends?:\s+([A-Za-z]+,\s+[A-Za-z]+\s+\d+,\s+\d{4},\s+at\s+\d+:\d+\s+[AP]M\s+Local\s+Time)",
    )
    .unwrap()
});

/// Any full-form dated string on the page; capture excludes the marker.
static ANY_FULL_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z]+,\s+[A-Za-z]+\s+\d+,\s+\d{4},\s+at\s+\d+:\d+\s+[AP]M)\s+Local\s+Time")
        .unwrap()
});

/// "from <full date> to <full date>, at <time>" — the time applies to both
/// endpoints; captures the second date and the time.
static RANGE_WITH_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)from\s+[A-Za-z]+,\s+[A-Za-z]+\s+\d+,\s+\d{4}\s+to\s+([A-Za-z]+,\s+[A-Za-z]+\s+\d+,\s+\d{4}),?\s+at\s+(\d+:\d+\s+[AP]M)",
    )
    .unwrap()
});

/// "from <Month Day, Year> to <Month Day, Year>" with no time at all.
static RANGE_DATES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)from\s+([A-Za-z]+\s+\d+,\s+\d{4})\s+to\s+([A-Za-z]+\s+\d+,\s+\d{4})").unwrap()
});

#[derive(Debug, Default)]
pub struct Schedule {
    pub start: Option<DateTime<Tz>>,
    pub end: Option<DateTime<Tz>>,
}

/// Extract the event window from the detail page's text content.
///
/// Start: explicit label first, else the first full-form date anywhere on
/// the page. End: explicit label, then the two range shapes, then — only
/// when the start came from the page scan — the last scanned date. Detail
/// pages repeat real start dates of running events, so nothing here
/// prefers the future.
pub fn extract(text: &str, tz: Tz) -> Schedule {
    let mut scanned: Vec<&str> = Vec::new();

    let start = match START_LABEL_RE.captures(text) {
        Some(c) => datetime::parse(c.get(1).unwrap().as_str(), false, tz),
        None => {
            scanned = ANY_FULL_DATE_RE
                .captures_iter(text)
                .map(|c| c.get(1).unwrap().as_str())
                .collect();
            scanned.first().and_then(|s| datetime::parse(s, false, tz))
        }
    };

    let end = if let Some(c) = END_LABEL_RE.captures(text) {
        datetime::parse(c.get(1).unwrap().as_str(), false, tz)
    } else if let Some(c) = RANGE_WITH_TIME_RE.captures(text) {
        let synthesized = format!("{}, at {} Local Time", &c[1], &c[2]);
        datetime::parse(&synthesized, false, tz)
    } else if let (Some(c), Some(s)) = (RANGE_DATES_RE.captures(text), start) {
        // No time on the range; reuse the start's time-of-day. The weekday
        // token is required by the grammar but never validated.
        let synthesized = format!("Monday, {}, at {} Local Time", &c[2], s.format("%I:%M %p"));
        datetime::parse(&synthesized, false, tz)
    } else if scanned.len() >= 2 {
        datetime::parse(scanned.last().unwrap(), false, tz)
    } else {
        None
    };

    Schedule { start, end }
}

// ── Tests ──
