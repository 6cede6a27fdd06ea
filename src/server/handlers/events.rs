use axum::extract::Extension;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::{Stream, StreamExt};

use crate::api::DynAPI;

pub async fn stream(
    Extension(api): Extension<DynAPI>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let rx = api.subscribe().await;

    let events = rx.map(|event| {
        Event::default()
            .event(event.change.name())
            .json_data(event)
            .map_err(axum::Error::new)
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
