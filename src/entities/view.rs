use serde::{Deserialize, Serialize};

use crate::entities::{
    Coordinates, Inputs, RouteResult, Status, Waypoint, WaypointList, DEFAULT_CENTER,
    DEFAULT_ZOOM,
};
use crate::error::Error;

/// What the map currently shows, minus the inputs and waypoints the planner
/// owns separately.
#[derive(Clone, Debug, Default)]
pub struct RouteView {
    route: Option<RouteResult>,
    stop_panel_visible: bool,
    last_error: Option<Error>,
}

impl RouteView {
    pub fn route(&self) -> Option<&RouteResult> {
        self.route.as_ref()
    }

    pub fn has_route(&self) -> bool {
        self.route.is_some()
    }

    pub fn stop_panel_visible(&self) -> bool {
        self.stop_panel_visible
    }

    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    pub fn set_route(&mut self, result: RouteResult) {
        self.route = Some(result);
        self.last_error = None;
    }

    /// Drops the route together with any error reported while computing it.
    pub fn invalidate_route(&mut self) -> Option<RouteResult> {
        self.last_error = None;
        self.route.take()
    }

    pub fn set_error(&mut self, error: Error) {
        self.last_error = Some(error);
    }

    pub fn toggle_stop_panel(&mut self) -> bool {
        self.stop_panel_visible = !self.stop_panel_visible;
        self.stop_panel_visible
    }

    pub fn render(&self, inputs: &Inputs, waypoints: &WaypointList, status: Status) -> MapView {
        // stop markers only make sense on top of a drawn route
        let markers = match self.route {
            Some(_) => waypoints.iter().cloned().collect(),
            None => Vec::new(),
        };

        MapView {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            origin_marker: DEFAULT_CENTER,
            route: self.route.clone(),
            waypoint_markers: markers,
            waypoints: waypoints.clone(),
            inputs: inputs.clone(),
            stop_panel_visible: self.stop_panel_visible,
            stop_panel_label: stop_panel_label(self.stop_panel_visible).into(),
            status,
            error: self.last_error.clone(),
        }
    }
}

fn stop_panel_label(visible: bool) -> &'static str {
    if visible {
        "Hide stops"
    } else {
        "Add stops"
    }
}

/// Render snapshot consumed by the map front end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub origin_marker: Coordinates,
    pub route: Option<RouteResult>,
    pub waypoint_markers: Vec<Waypoint>,
    pub waypoints: WaypointList,
    pub inputs: Inputs,
    pub stop_panel_visible: bool,
    pub stop_panel_label: String,
    pub status: Status,
    pub error: Option<Error>,
}
