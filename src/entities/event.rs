use serde::Serialize;

use crate::entities::{Field, MapView, RouteRequest};
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Change {
    FieldChanged { field: Field },
    WaypointsChanged,
    StopPanelToggled { visible: bool },
    Computing { request: RouteRequest },
    Routed,
    Failed { error: Error },
    /// The caller stopped waiting for a directions request.
    Abandoned,
    Invalidated,
}

impl Change {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FieldChanged { .. } => "field_changed",
            Self::WaypointsChanged => "waypoints_changed",
            Self::StopPanelToggled { .. } => "stop_panel_toggled",
            Self::Computing { .. } => "computing",
            Self::Routed => "routed",
            Self::Failed { .. } => "failed",
            Self::Abandoned => "abandoned",
            Self::Invalidated => "invalidated",
        }
    }
}

/// A state change and the view it produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlannerEvent {
    pub change: Change,
    pub view: MapView,
}
