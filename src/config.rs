use std::time::Duration;

use chrono_tz::Tz;

const LISTING_URL: &str = "https://leekduck.com/events/";
const BASE_URL: &str = "https://leekduck.com";
const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Reference timezone: every "Local Time" string on the site is interpreted
/// in this fixed zone, never the viewer's.
const REFERENCE_TZ: Tz = chrono_tz::Europe::Brussels;

const COURTESY_DELAY_MS: u64 = 500;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Immutable per-run configuration, built once and handed to the fetcher
/// and assembler.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub listing_url: String,
    pub base_url: String,
    pub user_agent: String,
    pub timezone: Tz,
    /// Minimum pause before each detail-page fetch.
    pub courtesy_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.to_string(),
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timezone: REFERENCE_TZ,
            courtesy_delay: Duration::from_millis(COURTESY_DELAY_MS),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}
