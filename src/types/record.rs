use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Column order of the persisted dataset.
pub const COLUMNS: [&str; 10] = [
    "Timestamp",
    "HeartRateBpm",
    "Latitude",
    "Longitude",
    "AltitudeMeters",
    "DistanceMeters",
    "LapStartTime",
    "Activity",
    "Sport",
    "tcx_file",
];

/// Sensor fields of a single trackpoint, as the trimmed source text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackpointFields {
    pub timestamp: Option<String>,
    pub heart_rate_bpm: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub altitude_meters: Option<String>,
    pub distance_meters: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LapContext {
    pub start_time: Option<String>,
}

/// Context shared by every record of one activity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityContext {
    pub name: Option<String>,
    pub sport: Option<String>,
    pub source_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Timestamp")]
    pub timestamp: Option<String>,
    #[serde(rename = "HeartRateBpm")]
    pub heart_rate_bpm: Option<String>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<String>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<String>,
    #[serde(rename = "AltitudeMeters")]
    pub altitude_meters: Option<String>,
    #[serde(rename = "DistanceMeters")]
    pub distance_meters: Option<String>,
    #[serde(rename = "LapStartTime")]
    pub lap_start_time: Option<String>,
    #[serde(rename = "Activity")]
    pub activity: Option<String>,
    #[serde(rename = "Sport")]
    pub sport: Option<String>,
    #[serde(rename = "tcx_file")]
    pub tcx_file: String,
}

impl Record {
    pub fn assemble(fields: TrackpointFields, lap: &LapContext, activity: &ActivityContext) -> Self {
        Self {
            timestamp: fields.timestamp,
            heart_rate_bpm: fields.heart_rate_bpm,
            latitude: fields.latitude,
            longitude: fields.longitude,
            altitude_meters: fields.altitude_meters,
            distance_meters: fields.distance_meters,
            lap_start_time: lap.start_time.clone(),
            activity: activity.name.clone(),
            sport: activity.sport.clone(),
            tcx_file: activity.source_file.clone(),
        }
    }
}

/// The persisted collection of records. Row order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = Record>) {
        self.records.extend(records);
    }

    /// Distinct `tcx_file` values, i.e. the files this dataset already covers.
    pub fn source_files(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| r.tcx_file.clone()).collect()
    }

    /// Drops every record without a timestamp and returns how many were dropped.
    pub fn retain_timestamped(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.timestamp.is_some());
        before - self.records.len()
    }
}
