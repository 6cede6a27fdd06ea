use serde::{Deserialize, Serialize};

use crate::entities::{Waypoint, WaypointList};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Driving,
}

impl TravelMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
        }
    }
}

/// A directions query. Built fresh for every recalculation and never modified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub waypoints: Vec<Waypoint>,
    pub travel_mode: TravelMode,
}

impl RouteRequest {
    /// Returns `None` unless both endpoints hold something other than
    /// whitespace. Addresses are otherwise passed through unchecked.
    pub fn build(origin: &str, destination: &str, waypoints: &WaypointList) -> Option<Self> {
        if origin.trim().is_empty() || destination.trim().is_empty() {
            return None;
        }

        Some(Self {
            origin: origin.into(),
            destination: destination.into(),
            waypoints: waypoints.iter().cloned().collect(),
            travel_mode: TravelMode::Driving,
        })
    }
}
