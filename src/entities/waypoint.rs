use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    pub location: String,
    pub stopover: bool,
}

impl Waypoint {
    pub fn stop(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            stopover: true,
        }
    }
}

/// Ordered stops between origin and destination.
///
/// Lists are immutable snapshots: [`WaypointList::append`] and
/// [`WaypointList::clear`] hand back a new list and leave `self` untouched, so a
/// snapshot taken for an in-flight request keeps describing that request.
/// Stops cannot be reordered or removed individually.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaypointList {
    stops: Arc<Vec<Waypoint>>,
}

impl WaypointList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a list with `location` appended as a stopover, or an equal list
    /// when `location` is blank.
    pub fn append(&self, location: &str) -> Self {
        if location.trim().is_empty() {
            return self.clone();
        }

        let mut stops = Vec::with_capacity(self.stops.len() + 1);
        stops.extend(self.stops.iter().cloned());
        stops.push(Waypoint::stop(location));

        Self {
            stops: Arc::new(stops),
        }
    }

    pub fn clear(&self) -> Self {
        Self::new()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn last(&self) -> Option<&Waypoint> {
        self.stops.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.stops.iter()
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.stops
    }
}

impl<'a> IntoIterator for &'a WaypointList {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
