use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;

/// Full form: "Monday, October 13, 2025, at 6:00 PM".
/// Captures: weekday, month name, day, year, hour, minute, AM|PM.
static FULL_FORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+),\s+(\w+)\s+(\d+),\s+(\d{4}),\s+at\s+(\d+):(\d+)\s+(AM|PM)").unwrap()
});

/// Short form: "Mon, Oct 13, at 7:00 PM" (no year).
/// Captures: weekday abbrev, month abbrev, day, hour, minute, AM|PM.
static SHORT_FORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+),\s+(\w+)\s+(\d+),\s+at\s+(\d+):(\d+)\s+(AM|PM)").unwrap()
});

const LOCALE_MARKER: &str = "Local Time";

/// Parse a site date string into an instant in the reference timezone.
///
/// Full-form strings carry their own year and ignore `prefer_future`.
/// Short-form strings assume the current year; with `prefer_future`, a
/// result already in the past rolls over to the next year (listing pages
/// only announce upcoming occurrences). Returns `None` when neither
/// pattern matches.
pub fn parse(text: &str, prefer_future: bool, tz: Tz) -> Option<DateTime<Tz>> {
    resolve(text, prefer_future, tz, Utc::now().with_timezone(&tz))
}

fn resolve(text: &str, prefer_future: bool, tz: Tz, now: DateTime<Tz>) -> Option<DateTime<Tz>> {
    let cleaned = text.replace(LOCALE_MARKER, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    if let Some(c) = FULL_FORM_RE.captures(cleaned) {
        let composed = format!("{} {} {} {}:{} {}", &c[2], &c[3], &c[4], &c[5], &c[6], &c[7]);
        let naive = NaiveDateTime::parse_from_str(&composed, "%B %d %Y %I:%M %p").ok()?;
        return localize(naive, tz);
    }

    let c = SHORT_FORM_RE.captures(cleaned)?;
    let at_year = |year: i32| -> Option<DateTime<Tz>> {
        let composed = format!("{} {} {} {}:{} {}", &c[2], &c[3], year, &c[4], &c[5], &c[6]);
        let naive = NaiveDateTime::parse_from_str(&composed, "%b %d %Y %I:%M %p").ok()?;
        localize(naive, tz)
    };

    let current_year = now.year();
    let resolved = at_year(current_year)?;
    if prefer_future && resolved < now {
        return at_year(current_year + 1);
    }
    Some(resolved)
}

/// Map a naive local date-time onto the zone. Around DST transitions the
/// earliest valid mapping wins, falling back to the latest for gaps.
fn localize(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&naive).latest())
}

// ── Tests ──
