use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use icalendar::{Calendar, CalendarDateTime, Component, Event, EventLike, Property};
use tracing::info;

use crate::config::ScrapeConfig;
use crate::model::EventRecord;

const PRODID: &str = "-//LeekDuck Events Calendar//EN";
const CALENDAR_NAME: &str = "LeekDuck Pokemon GO Events";
const CALENDAR_DESC: &str = "Pokemon GO events from LeekDuck.com";
const LOCATION: &str = "Pokemon GO";
const ATTRIBUTION: &str = "Data from LeekDuck.com";
const UID_DOMAIN: &str = "leekduck-calendar";

/// Map normalized records onto the calendar component model. Serialization
/// itself is the writer's job.
pub fn build_calendar(records: &[EventRecord], config: &ScrapeConfig) -> Calendar {
    let mut calendar = Calendar::new();
    calendar.append_property(Property::new("PRODID", PRODID));
    calendar.append_property(Property::new("X-WR-CALNAME", CALENDAR_NAME));
    calendar.append_property(Property::new("X-WR-TIMEZONE", config.timezone.name()));
    calendar.append_property(Property::new("X-WR-CALDESC", CALENDAR_DESC));

    for record in records {
        let mut event = Event::new();
        event.summary(&record.title);
        event.starts(with_tzid(record.start, config));
        event.ends(with_tzid(record.end, config));
        event.timestamp(Utc::now());
        event.description(&event_description(record, &config.listing_url));
        event.location(LOCATION);
        if !record.source_url.is_empty() {
            event.add_property("URL", &record.source_url);
        }
        event.uid(&event_uid(record));
        calendar.push(event.done());
    }

    calendar
}

/// Serialize and write the calendar file.
pub fn write_calendar(calendar: &Calendar, path: &Path) -> Result<()> {
    std::fs::write(path, calendar.to_string())
        .with_context(|| format!("Failed to write calendar to {}", path.display()))?;
    info!("Calendar saved to {}", path.display());
    Ok(())
}

fn with_tzid(instant: chrono::DateTime<chrono_tz::Tz>, config: &ScrapeConfig) -> CalendarDateTime {
    CalendarDateTime::WithTimezone {
        date_time: instant.naive_local(),
        tzid: config.timezone.name().to_string(),
    }
}

/// Component description: extracted text, a source link when it differs
/// from the listing page, the reserved image link, and the attribution.
fn event_description(record: &EventRecord, listing_url: &str) -> String {
    let mut description = record.description.clone();
    if !record.source_url.is_empty() && record.source_url != listing_url {
        description.push_str(&format!("\n\nMore info: {}", record.source_url));
    }
    if !record.image_url.is_empty() {
        description.push_str(&format!("\n\nImage: {}", record.image_url));
    }
    description.push_str(&format!("\n\n{}", ATTRIBUTION));
    description
}

/// Stable identity: start instant in canonical text form plus a title hash.
fn event_uid(record: &EventRecord) -> String {
    let mut hasher = DefaultHasher::new();
    record.title.hash(&mut hasher);
    format!("{}-{}@{}", record.start.to_rfc3339(), hasher.finish(), UID_DOMAIN)
}

// ── Tests ──
