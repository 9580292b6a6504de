mod assemble;
mod calendar;
mod category;
mod config;
mod datetime;
mod extract;
mod fetch;
mod listing;
mod model;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use url::Url;

use crate::config::ScrapeConfig;
use crate::fetch::PageFetcher;
use crate::model::EventRecord;

#[derive(Parser)]
#[command(name = "leekduck_ical", about = "LeekDuck Pokemon GO events to iCalendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the events listing and write an iCalendar file
    Run {
        /// Output .ics path
        #[arg(short, long, default_value = "events.ics")]
        output: PathBuf,
        /// Max events to process (default: all discovered)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Print events without writing the calendar file
        #[arg(long)]
        dry_run: bool,
    },
    /// Fetch a single event page and print the extracted fields
    Inspect {
        /// Event detail-page URL
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let config = ScrapeConfig::default();

    let result = match cli.command {
        Commands::Run { output, limit, dry_run } => {
            let output = if dry_run { None } else { Some(output) };
            run(&config, limit, output).await
        }
        Commands::Inspect { url } => inspect(&config, &url).await,
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// Full pipeline: listing → candidates → assembly → calendar. `output` is
/// `None` for a dry run.
async fn run(config: &ScrapeConfig, limit: Option<usize>, output: Option<PathBuf>) -> Result<()> {
    let fetcher = PageFetcher::new(config)?;

    // A listing failure means there is nothing to iterate; this is the one
    // fatal fetch of the whole run.
    let listing_html = fetcher
        .fetch(&config.listing_url)
        .await
        .context("Failed to fetch the events listing page")?;

    let links = listing::discover_event_links(&listing_html);
    println!("Found {} potential event links", links.len());

    let base = Url::parse(&config.base_url).context("Invalid base URL")?;
    let mut candidates = listing::unique_candidates(&base, links);
    if let Some(n) = limit {
        candidates.truncate(n);
    }

    let (events, stats) = assemble::assemble(&fetcher, config, candidates).await?;
    println!(
        "Assembled {} events ({} candidates, {} dropped, {} fetch errors)",
        stats.emitted, stats.candidates, stats.dropped, stats.fetch_errors
    );

    print_events(&events);

    if let Some(path) = output {
        let cal = calendar::build_calendar(&events, config);
        calendar::write_calendar(&cal, &path)?;
    } else {
        println!("Dry run: no calendar written.");
    }

    Ok(())
}

/// Fetch one detail page and show what the extractor makes of it.
async fn inspect(config: &ScrapeConfig, url: &str) -> Result<()> {
    let fetcher = PageFetcher::new(config)?;
    let body = fetcher
        .fetch(url)
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;
    let details = extract::extract(&body, config.timezone);

    let fmt = |v: Option<chrono::DateTime<chrono_tz::Tz>>| {
        v.map(|d| d.to_rfc3339()).unwrap_or_else(|| "-".to_string())
    };
    let title = if details.title.is_empty() { "-" } else { details.title.as_str() };
    println!("Title:       {}", title);
    println!("Category:    {:?}", category::classify(&details.title));
    println!("Start:       {}", fmt(details.start));
    println!("End:         {}", fmt(details.end));
    println!("Description:");
    if details.description.is_empty() {
        println!("  (none)");
    } else {
        for line in details.description.lines() {
            println!("  {}", line);
        }
    }
    Ok(())
}

fn print_events(events: &[EventRecord]) {
    for event in events {
        let start = event.start.format("%Y-%m-%d %H:%M %Z");
        let end = event.end.format("%Y-%m-%d %H:%M %Z");
        println!("  - {}", event.title);
        println!("    {} -> {} ({})", start, end, format_span(event));
    }
}

/// Event length as "2d 3h" or "1h 30m".
fn format_span(event: &EventRecord) -> String {
    let span = event.end.signed_duration_since(event.start);
    let days = span.num_days();
    if days > 0 {
        format!("{}d {}h", days, span.num_hours() % 24)
    } else {
        format!("{}h {}m", span.num_hours(), span.num_minutes() % 60)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
