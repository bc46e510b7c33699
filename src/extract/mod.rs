//! Prayer-time extraction from fetched HTML
//!
//! The engine seeds a schedule with the built-in defaults, then overwrites
//! per-prayer slots from whatever containers the page provides. It is a
//! pure function: it performs no I/O and no logging, and anything that
//! goes wrong is reported back as a warning value rather than an error.
//! The caller always gets a complete, schema-valid schedule.

mod config;

pub use config::{SelectorConfig, SelectorConfigBuilder};

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::schedule::{JumuahEntry, Prayer, PrayerSchedule, PrayerTime};

/// A non-fatal problem encountered while extracting.
///
/// Warnings never abort extraction; the affected container or phase is
/// skipped and the schedule keeps its defaults (or whatever was already
/// overwritten) for the data involved.
#[derive(Debug, Error)]
pub enum ExtractWarning {
    /// A configured selector string failed to parse; the phase that
    /// depends on it is skipped
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// A prayer container was missing its name, adhan, or iqama text
    #[error("prayer container {index}: missing name, adhan, or iqama; skipped")]
    PartialPrayer { index: usize },

    /// A prayer container named something outside the five daily prayers
    #[error("prayer container {index}: unrecognized prayer name '{name}'; skipped")]
    UnknownPrayer { index: usize, name: String },

    /// A jumuah container was missing its time or language text
    #[error("jumuah container {index}: missing time or language; skipped")]
    PartialJumuah { index: usize },
}

/// Extract a prayer schedule from raw HTML.
///
/// The schedule starts as [`PrayerSchedule::default`] and is selectively
/// overwritten from containers matching the configured selectors, in
/// document order. A later container naming the same prayer overwrites an
/// earlier one. Containers with any required field empty are skipped
/// whole; there is no partial update.
pub fn extract(html: &str, config: &SelectorConfig) -> (PrayerSchedule, Vec<ExtractWarning>) {
    let mut schedule = PrayerSchedule::default();
    let mut warnings = Vec::new();

    // html5ever recovers from malformed markup, so parsing itself cannot
    // fail; a garbage page just yields a tree with no matching containers.
    let document = Html::parse_document(html);

    apply_prayer_times(&document, config, &mut schedule, &mut warnings);
    apply_jumuah_sessions(&document, config, &mut schedule, &mut warnings);

    (schedule, warnings)
}

/// Overwrite named-prayer slots from matching containers.
fn apply_prayer_times(
    document: &Html,
    config: &SelectorConfig,
    schedule: &mut PrayerSchedule,
    warnings: &mut Vec<ExtractWarning>,
) {
    let Some(container) = parse_selector(&config.prayer_container, warnings) else {
        return;
    };
    let Some(name) = parse_selector(&config.prayer_name, warnings) else {
        return;
    };
    let Some(adhan) = parse_selector(&config.adhan_time, warnings) else {
        return;
    };
    let Some(iqama) = parse_selector(&config.iqama_time, warnings) else {
        return;
    };

    for (index, element) in document.select(&container).enumerate() {
        let prayer_name = first_text(element, &name).to_lowercase();
        let adhan_time = first_text(element, &adhan);
        let iqama_time = first_text(element, &iqama);

        if prayer_name.is_empty() || adhan_time.is_empty() || iqama_time.is_empty() {
            warnings.push(ExtractWarning::PartialPrayer { index });
            continue;
        }

        match Prayer::classify(&prayer_name) {
            Some(prayer) => {
                *schedule.slot_mut(prayer) = PrayerTime::new(adhan_time, iqama_time);
            }
            None => warnings.push(ExtractWarning::UnknownPrayer {
                index,
                name: prayer_name,
            }),
        }
    }
}

/// Replace the jumuah list wholesale if any jumuah containers match.
///
/// Zero matches leaves the default sessions untouched. One or more
/// matches discards the defaults entirely, even when every matched
/// container turns out to be incomplete.
fn apply_jumuah_sessions(
    document: &Html,
    config: &SelectorConfig,
    schedule: &mut PrayerSchedule,
    warnings: &mut Vec<ExtractWarning>,
) {
    let Some(container) = parse_selector(&config.jumuah_container, warnings) else {
        return;
    };
    let Some(time) = parse_selector(&config.jumuah_time, warnings) else {
        return;
    };
    let Some(language) = parse_selector(&config.jumuah_language, warnings) else {
        return;
    };

    let mut containers = document.select(&container).peekable();
    if containers.peek().is_none() {
        return;
    }

    let mut sessions = Vec::new();
    for (index, element) in containers.enumerate() {
        let session_time = first_text(element, &time);
        let session_language = first_text(element, &language);

        if session_time.is_empty() || session_language.is_empty() {
            warnings.push(ExtractWarning::PartialJumuah { index });
            continue;
        }

        sessions.push(JumuahEntry::new(session_time, session_language));
    }

    schedule.jumuah = sessions;
}

fn parse_selector(selector: &str, warnings: &mut Vec<ExtractWarning>) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warnings.push(ExtractWarning::InvalidSelector {
                selector: selector.to_string(),
                message: e.to_string(),
            });
            None
        }
    }
}

/// Text of the first descendant matching `selector`, trimmed.
///
/// A missing descendant reads as the empty string rather than an error,
/// so callers can treat absence and blankness the same way.
fn first_text(element: ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}
