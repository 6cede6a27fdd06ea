use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    api::{DirectionsAPI, PlacesAPI},
    config::Config,
    entities::{Coordinates, RouteRequest, RouteResult, Waypoint},
    error::Error,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub place_id: String,
    pub description: String,
}

pub type PlaceSuggestions = Vec<PlaceSuggestion>;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    predictions: Option<T>,
    routes: Option<T>,
    error_message: Option<String>,
}

/// Client for the Google Maps web services.
#[derive(Clone)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    key: String,
}

impl std::fmt::Debug for GoogleMaps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleMaps")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl GoogleMaps {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            key: config.api_key.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("https://{}/maps/api/{}", self.api_base, path)
    }
}

#[async_trait]
impl DirectionsAPI for GoogleMaps {
    #[tracing::instrument(skip(self), fields(stops = request.waypoints.len()))]
    async fn fetch_route(&self, request: &RouteRequest) -> Result<RouteResult, Error> {
        let res = self
            .client
            .get(self.url("directions/json"))
            .query(&[("key", self.key.as_str())])
            .query(&directions_query(request))
            .send()
            .await?;

        check_status_code(res.status())?;

        let data: Response<Value> = res.json().await?;
        let routes = directions_routes(data)?;

        Ok(RouteResult::new(request.clone(), routes))
    }
}

#[async_trait]
impl PlacesAPI for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn find_place_suggestions(
        &self,
        input: String,
        location: Coordinates,
        radius: f64,
        session_token: String,
    ) -> Result<PlaceSuggestions, Error> {
        let location: String = location.into();

        let res = self
            .client
            .get(self.url("place/autocomplete/json"))
            .query(&[("key", self.key.as_str())])
            .query(&[("input", input)])
            .query(&[("location", location)])
            .query(&[("radius", radius)])
            .query(&[("sessiontoken", session_token)])
            .send()
            .await?;

        check_status_code(res.status())?;

        let data: Response<PlaceSuggestions> = res.json().await?;

        if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
            tracing::warn!(status = %data.status, "place autocomplete rejected");
            return Err(Error::upstream_error());
        }

        Ok(data.predictions.unwrap_or_default())
    }
}

fn check_status_code(status: StatusCode) -> Result<(), Error> {
    if status.is_client_error() {
        return Err(Error::invalid_input_error());
    } else if status != StatusCode::OK {
        return Err(Error::upstream_error());
    }

    Ok(())
}

/// Query parameters for a directions request, API key excluded.
pub fn directions_query(request: &RouteRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("origin", request.origin.clone()),
        ("destination", request.destination.clone()),
        ("mode", request.travel_mode.name().to_string()),
    ];

    if !request.waypoints.is_empty() {
        let waypoints = request
            .waypoints
            .iter()
            .map(waypoint_param)
            .collect::<Vec<_>>()
            .join("|");

        query.push(("waypoints", waypoints));
    }

    query
}

fn waypoint_param(waypoint: &Waypoint) -> String {
    if waypoint.stopover {
        waypoint.location.clone()
    } else {
        format!("via:{}", waypoint.location)
    }
}

fn directions_routes(data: Response<Value>) -> Result<Value, Error> {
    match data.status.as_str() {
        "OK" => data.routes.ok_or_else(Error::upstream_error),
        "NOT_FOUND" | "ZERO_RESULTS" => Err(Error::no_route_error()),
        "INVALID_REQUEST" | "MAX_WAYPOINTS_EXCEEDED" => Err(Error::invalid_input_error()),
        status => {
            tracing::warn!(
                status,
                message = data.error_message.as_deref().unwrap_or(""),
                "directions request rejected"
            );
            Err(Error::upstream_error())
        }
    }
}
