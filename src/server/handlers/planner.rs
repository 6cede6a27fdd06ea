use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};

use crate::{
    api::{DynAPI, Outcome},
    entities::{Field, MapView},
    error::Error,
};

#[derive(Serialize, Deserialize)]
pub struct SetFieldParams {
    value: String,
}

#[derive(Serialize)]
pub struct ActionResponse {
    outcome: Outcome,
    view: MapView,
}

async fn respond(api: &DynAPI, outcome: Outcome) -> Json<ActionResponse> {
    let view = api.view().await;

    ActionResponse { outcome, view }.into()
}

pub async fn view(Extension(api): Extension<DynAPI>) -> Json<MapView> {
    api.view().await.into()
}

pub async fn set_field(
    Extension(api): Extension<DynAPI>,
    Path(field): Path<String>,
    Json(params): Json<SetFieldParams>,
) -> Result<Json<MapView>, Error> {
    let field: Field = field.parse()?;
    let view = api.set_field(field, params.value).await;

    Ok(view.into())
}

pub async fn submit_route(Extension(api): Extension<DynAPI>) -> Json<ActionResponse> {
    let outcome = api.submit_route().await;

    respond(&api, outcome).await
}

pub async fn add_stop(Extension(api): Extension<DynAPI>) -> Json<ActionResponse> {
    let outcome = api.add_stop().await;

    respond(&api, outcome).await
}

pub async fn clear_stops(Extension(api): Extension<DynAPI>) -> Json<ActionResponse> {
    let outcome = api.clear_stops().await;

    respond(&api, outcome).await
}

pub async fn toggle_stop_panel(Extension(api): Extension<DynAPI>) -> Json<MapView> {
    api.toggle_stop_panel().await;

    api.view().await.into()
}
