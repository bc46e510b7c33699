//! JSON output for the schedule
//!
//! One file, fully replaced on every run. The on-disk shape is the
//! public contract: named prayer objects, the jumuah array, and the
//! `lastUpdated` timestamp, pretty-printed with 2-space indentation.

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::error::Result;
use crate::schedule::PrayerSchedule;

/// Serialize `schedule` and write it to `path`, replacing any existing
/// content. Serialization and I/O failures propagate to the caller.
pub async fn write_schedule(path: impl AsRef<Path>, schedule: &PrayerSchedule) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(schedule)?;

    debug!("Writing schedule to {}", path.display());
    fs::write(path, json).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prayer-times.json");

        let schedule = PrayerSchedule::default();
        write_schedule(&path, &schedule).await.unwrap();

        let written = fs::read_to_string(&path).await.unwrap();
        let parsed: PrayerSchedule = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, schedule);
    }

    #[tokio::test]
    async fn test_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prayer-times.json");

        fs::write(&path, "stale content from a previous run")
            .await
            .unwrap();

        let schedule = PrayerSchedule::default();
        write_schedule(&path, &schedule).await.unwrap();

        let written = fs::read_to_string(&path).await.unwrap();
        let parsed: PrayerSchedule = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, schedule);
    }

    #[tokio::test]
    async fn test_pretty_printed_with_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prayer-times.json");

        write_schedule(&path, &PrayerSchedule::default())
            .await
            .unwrap();

        let written = fs::read_to_string(&path).await.unwrap();
        assert!(written.contains("  \"fajr\": {"));
        assert!(written.contains("    \"adhan\": \"05:42\""));
    }

    #[tokio::test]
    async fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("prayer-times.json");

        let result = write_schedule(&path, &PrayerSchedule::default()).await;
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
