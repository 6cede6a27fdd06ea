use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    api::DynAPI,
    entities::DEFAULT_CENTER,
    error::Error,
    external::google_maps::PlaceSuggestions,
};

/// Suggestions are biased towards places within this many meters of the map
/// center.
const SUGGESTION_RADIUS: f64 = 50_000.0;

#[derive(Serialize, Deserialize)]
pub struct SuggestionParams {
    input: String,
    session_token: Option<String>,
}

pub async fn find_suggestions(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<PlaceSuggestions>, Error> {
    let session_token = params
        .session_token
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let data = api
        .find_place_suggestions(params.input, DEFAULT_CENTER, SUGGESTION_RADIUS, session_token)
        .await?;

    Ok(data.into())
}
