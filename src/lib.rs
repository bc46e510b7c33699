//! # masjid-times - prayer schedule scraper
//!
//! Fetches a mosque display page, extracts the daily prayer schedule from
//! it with CSS-selector queries, and writes the result as pretty-printed
//! JSON. Extraction is best-effort: the schedule is seeded with built-in
//! defaults and every field the page fails to provide keeps its default,
//! so the output is always complete and schema-valid.
//!
//! ## Example
//!
//! ```rust,no_run
//! use masjid_times::extract::{extract, SelectorConfig};
//! use masjid_times::fetch::PageFetcher;
//! use masjid_times::output::write_schedule;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let html = PageFetcher::new()
//!         .fetch("https://example.com/masjid-display")
//!         .await?;
//!
//!     let (schedule, warnings) = extract(&html, &SelectorConfig::default());
//!     for warning in &warnings {
//!         eprintln!("{warning}");
//!     }
//!
//!     write_schedule("prayer-times.json", &schedule).await?;
//!     Ok(())
//! }
//! ```

mod error;

pub mod extract;
pub mod fetch;
pub mod output;
pub mod schedule;

pub use error::Error;

/// Re-export of the error pair for public use
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::error::Result;
}
