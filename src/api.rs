use std::sync::Arc;

use async_channel::Receiver;
use async_trait::async_trait;

use crate::entities::{Coordinates, Field, MapView, PlannerEvent, RouteRequest, RouteResult};
use crate::error::Error;
use crate::external::google_maps::PlaceSuggestions;

/// The directions provider. One call per recalculation: no retries, no
/// cancellation, and whatever timeout the provider applies.
#[async_trait]
pub trait DirectionsAPI {
    async fn fetch_route(&self, request: &RouteRequest) -> Result<RouteResult, Error>;
}

#[async_trait]
pub trait PlacesAPI {
    async fn find_place_suggestions(
        &self,
        input: String,
        location: Coordinates,
        radius: f64,
        session_token: String,
    ) -> Result<PlaceSuggestions, Error>;
}

pub trait MapsAPI: DirectionsAPI + PlacesAPI {}

impl<T: DirectionsAPI + PlacesAPI> MapsAPI for T {}

pub type DynMaps = Arc<dyn MapsAPI + Send + Sync>;

/// How a recalculation ended.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing was requested: blank endpoints or a blank stop.
    Skipped,
    /// Nothing could be requested and the displayed route was dropped.
    Invalidated,
    Routed,
    Failed { error: Error },
}

#[async_trait]
pub trait PlannerAPI {
    /// Every later state change is delivered on the returned channel.
    /// Dropping the receiver unsubscribes.
    async fn subscribe(&self) -> Receiver<PlannerEvent>;
    async fn view(&self) -> MapView;
    async fn set_field(&self, field: Field, value: String) -> MapView;
    async fn submit_route(&self) -> Outcome;
    async fn add_stop(&self) -> Outcome;
    async fn clear_stops(&self) -> Outcome;
    async fn toggle_stop_panel(&self) -> bool;
}

pub trait API: PlannerAPI + PlacesAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
