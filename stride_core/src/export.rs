//! CSV export of the workout history.

use crate::{HistoryEntry, Result};
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    recorded_at: String,
    workout: &'static str,
    minutes: u32,
    calories: u32,
    distance_km: f64,
    steps: u32,
}

impl From<&HistoryEntry> for CsvRow {
    fn from(entry: &HistoryEntry) -> Self {
        CsvRow {
            recorded_at: entry.recorded_at.to_rfc3339(),
            workout: entry.workout.name(),
            minutes: entry.minutes,
            calories: entry.calories,
            distance_km: entry.distance_km,
            steps: entry.steps,
        }
    }
}

/// Write the full workout history to a CSV file with headers.
///
/// Overwrites any existing file at `path`. Returns the number of entries
/// written.
pub fn export_history(history: &[HistoryEntry], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for entry in history {
        writer.serialize(CsvRow::from(entry))?;
    }
    writer.flush()?;

    tracing::info!("Exported {} history entries to {:?}", history.len(), path);
    Ok(history.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppData, WorkoutType};
    use chrono::Utc;

    #[test]
    fn test_export_writes_header_and_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("history.csv");

        let data = AppData::default()
            .record_workout(WorkoutType::Running, 30, 385, 5.5, 7333, Utc::now())
            .record_workout(WorkoutType::Swimming, 45, 420, 1.875, 0, Utc::now());

        let count = export_history(&data.history, &csv_path).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(&csv_path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "recorded_at,workout,minutes,calories,distance_km,steps"
        );
        assert!(contents.contains("running"));
        assert!(contents.contains("swimming"));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_export_empty_history() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("history.csv");

        let count = export_history(&[], &csv_path).unwrap();
        assert_eq!(count, 0);
        assert!(csv_path.exists());
    }
}
