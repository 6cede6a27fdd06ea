mod coordinates;
mod event;
mod inputs;
mod route_request;
mod route_result;
mod status;
mod view;
mod waypoint;

pub use coordinates::{Coordinates, DEFAULT_CENTER, DEFAULT_ZOOM};
pub use event::{Change, PlannerEvent};
pub use inputs::{Field, Inputs};
pub use route_request::{RouteRequest, TravelMode};
pub use route_result::RouteResult;
pub use status::Status;
pub use view::{MapView, RouteView};
pub use waypoint::{Waypoint, WaypointList};
