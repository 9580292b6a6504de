use chrono::DateTime;
use chrono_tz::Tz;

use crate::category::EventCategory;

/// One normalized event, ready for calendar export. Immutable once built;
/// `source_url` is the batch-unique identity.
#[derive(Debug, Clone)]
pub struct EventRecord {
    /// Glyph-prefixed display title.
    pub title: String,
    pub category: EventCategory,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub description: String,
    pub source_url: String,
    /// Reserved; listing-page artwork is not extracted currently.
    pub image_url: String,
}
