//! Fake map providers shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use wayfarer::api::{DirectionsAPI, DynMaps, PlacesAPI, PlannerAPI};
use wayfarer::engine::Planner;
use wayfarer::entities::{Coordinates, Field, RouteRequest, RouteResult, TravelMode, Waypoint};
use wayfarer::error::Error;
use wayfarer::external::google_maps::{PlaceSuggestion, PlaceSuggestions};

/// Answers from a script, falling back to an empty route list.
#[derive(Default)]
pub struct ScriptedMaps {
    requests: Mutex<Vec<RouteRequest>>,
    responses: Mutex<VecDeque<Result<Value, Error>>>,
    suggestion_calls: Mutex<usize>,
}

impl ScriptedMaps {
    pub fn respond_with(&self, response: Result<Value, Error>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<RouteRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn suggestion_calls(&self) -> usize {
        *self.suggestion_calls.lock().unwrap()
    }
}

#[async_trait]
impl DirectionsAPI for ScriptedMaps {
    async fn fetch_route(&self, request: &RouteRequest) -> Result<RouteResult, Error> {
        self.requests.lock().unwrap().push(request.clone());

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!([])));

        response.map(|directions| RouteResult::new(request.clone(), directions))
    }
}

#[async_trait]
impl PlacesAPI for ScriptedMaps {
    async fn find_place_suggestions(
        &self,
        input: String,
        _location: Coordinates,
        _radius: f64,
        _session_token: String,
    ) -> Result<PlaceSuggestions, Error> {
        *self.suggestion_calls.lock().unwrap() += 1;

        Ok(vec![PlaceSuggestion {
            place_id: "ChIJ-kotor".into(),
            description: format!("{}, Montenegro", input),
        }])
    }
}

pub fn planner() -> (Arc<ScriptedMaps>, Planner) {
    let maps = Arc::new(ScriptedMaps::default());
    let planner = Planner::new(maps.clone() as DynMaps);

    (maps, planner)
}

pub async fn budva_to_kotor(planner: &Planner) {
    planner.set_field(Field::Origin, "Budva".into()).await;
    planner.set_field(Field::Destination, "Kotor".into()).await;
}

pub fn budva_kotor_request(waypoints: Vec<Waypoint>) -> RouteRequest {
    RouteRequest {
        origin: "Budva".into(),
        destination: "Kotor".into(),
        waypoints,
        travel_mode: TravelMode::Driving,
    }
}
