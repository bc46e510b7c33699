//! Prayer schedule data model
//!
//! The schedule is constructed fresh per run, seeded entirely with the
//! built-in defaults, then selectively overwritten by the extraction
//! engine before being serialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Adhan and iqama times for one of the five daily prayers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerTime {
    /// Call to prayer time (HH:MM)
    pub adhan: String,

    /// Time the congregational prayer begins (HH:MM)
    pub iqama: String,
}

impl PrayerTime {
    pub fn new(adhan: impl Into<String>, iqama: impl Into<String>) -> Self {
        Self {
            adhan: adhan.into(),
            iqama: iqama.into(),
        }
    }
}

/// One Friday congregational session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumuahEntry {
    /// Session time (HH:MM)
    pub time: String,

    /// Language the khutbah is delivered in
    pub language: String,
}

impl JumuahEntry {
    pub fn new(time: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            language: language.into(),
        }
    }
}

/// The five daily prayers, in liturgical order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Lowercase name as it appears in source pages
    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "fajr",
            Prayer::Dhuhr => "dhuhr",
            Prayer::Asr => "asr",
            Prayer::Maghrib => "maghrib",
            Prayer::Isha => "isha",
        }
    }

    /// Classify a normalized (lowercased, trimmed) label by substring
    /// containment, first match wins. "dhuhr prayer" and "dhuhr-extra"
    /// both map to [`Prayer::Dhuhr`].
    pub fn classify(label: &str) -> Option<Prayer> {
        Self::ALL.into_iter().find(|p| label.contains(p.name()))
    }
}

/// A full day's schedule: one entry per named prayer, the jumuah sessions,
/// and the timestamp of the run that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerSchedule {
    pub fajr: PrayerTime,
    pub dhuhr: PrayerTime,
    pub asr: PrayerTime,
    pub maghrib: PrayerTime,
    pub isha: PrayerTime,

    /// Friday sessions, in document order when scraped
    pub jumuah: Vec<JumuahEntry>,

    /// Moment this schedule was constructed; never carried over from a
    /// previous run
    pub last_updated: DateTime<Utc>,
}

impl Default for PrayerSchedule {
    fn default() -> Self {
        Self {
            fajr: PrayerTime::new("05:42", "05:57"),
            dhuhr: PrayerTime::new("13:04", "13:30"),
            asr: PrayerTime::new("16:22", "16:32"),
            maghrib: PrayerTime::new("19:03", "19:08"),
            isha: PrayerTime::new("20:25", "20:30"),
            jumuah: vec![
                JumuahEntry::new("12:20", "Français"),
                JumuahEntry::new("13:30", "العربية"),
            ],
            last_updated: Utc::now(),
        }
    }
}

impl PrayerSchedule {
    /// Mutable access to the slot for a named prayer
    pub fn slot_mut(&mut self, prayer: Prayer) -> &mut PrayerTime {
        match prayer {
            Prayer::Fajr => &mut self.fajr,
            Prayer::Dhuhr => &mut self.dhuhr,
            Prayer::Asr => &mut self.asr,
            Prayer::Maghrib => &mut self.maghrib,
            Prayer::Isha => &mut self.isha,
        }
    }

    /// Read access to the slot for a named prayer
    pub fn slot(&self, prayer: Prayer) -> &PrayerTime {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }
}
