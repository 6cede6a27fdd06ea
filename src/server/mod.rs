mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post, put},
    Router,
};

use crate::api::{DynAPI, API};
use crate::error::Error;
use crate::server::handlers::{events, places, planner};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/view", get(planner::view))
        .route("/fields/:field", put(planner::set_field))
        .route("/route", post(planner::submit_route))
        .route("/stops", post(planner::add_stop).delete(planner::clear_stops))
        .route("/stops/panel", patch(planner::toggle_stop_panel))
        .route("/events", get(events::stream))
        .route("/places/suggestions", get(places::find_suggestions))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!(%err, "server stopped");
            Error::unexpected_error()
        })
}
