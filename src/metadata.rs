use crate::forecast::datetime_flex;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCoordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteLocation {
    pub name: String,
    pub coordinates: MapCoordinates,
    pub water_depth: f64,
    pub region: String,
}

/// Project header block: identity, site, planning horizon, and the
/// people responsible. Carried through from the project document;
/// the engine itself only reads the dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: SiteLocation,
    #[serde(rename = "startDate", with = "datetime_flex")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endDate", with = "datetime_flex")]
    pub end: DateTime<Utc>,
    pub project_manager: String,
    pub marine_coordinator: String,
    pub version: String,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self {
            id: "P000".to_string(),
            name: "New Project".to_string(),
            description: "No description".to_string(),
            location: SiteLocation {
                name: "Unnamed Field".to_string(),
                coordinates: MapCoordinates { lat: 0.0, lng: 0.0 },
                water_depth: 0.0,
                region: String::new(),
            },
            start: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap(),
            project_manager: String::new(),
            marine_coordinator: String::new(),
            version: "1.0".to_string(),
        }
    }
}
