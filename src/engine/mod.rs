mod places_api;
mod planner_api;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_channel::Sender;
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    api::{DynMaps, Outcome, API},
    entities::{
        Change, Field, Inputs, MapView, PlannerEvent, RouteRequest, RouteView, Status,
        WaypointList,
    },
};

/// What caused a recalculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trigger {
    Submit,
    WaypointsChanged,
}

/// Owns the route planning state and drives it from user actions.
///
/// The state lock is released while the directions provider works, so
/// several requests may be in flight at once. They are never cancelled and
/// whichever resolves last decides the displayed route.
pub struct Planner {
    maps: DynMaps,
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    inputs: Inputs,
    waypoints: WaypointList,
    view: RouteView,
    in_flight: Arc<AtomicUsize>,
    next_generation: u64,
    /// Generation of the request behind the displayed route.
    routed_generation: u64,
    subscribers: Vec<Sender<PlannerEvent>>,
}

/// A directions request that has been sent but not applied yet.
///
/// Dropping it without [`Pending::finish`] means the caller stopped waiting:
/// the request no longer counts as in flight and subscribers are told.
struct Pending {
    generation: u64,
    in_flight: Arc<AtomicUsize>,
    state: Arc<Mutex<State>>,
    finished: bool,
}

impl Pending {
    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for Pending {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.finished {
            return;
        }

        tracing::warn!(generation = self.generation, "directions request abandoned");

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let state = self.state.clone();
            handle.spawn(async move {
                state.lock().await.publish(Change::Abandoned);
            });
        }
    }
}

impl Planner {
    pub fn new(maps: DynMaps) -> Self {
        Self {
            maps,
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    pub async fn waypoints(&self) -> WaypointList {
        self.state.lock().await.waypoints.clone()
    }

    pub async fn status(&self) -> Status {
        self.state.lock().await.status()
    }

    async fn recalculate(&self, mut state: MutexGuard<'_, State>, trigger: Trigger) -> Outcome {
        let (request, generation) = match state.prepare(trigger) {
            Ok(prepared) => prepared,
            Err(outcome) => return outcome,
        };
        let pending = Pending {
            generation,
            in_flight: state.in_flight.clone(),
            state: self.state.clone(),
            finished: false,
        };
        drop(state);

        let result = self.maps.fetch_route(&request).await;

        let mut state = self.state.lock().await;
        pending.finish();

        match result {
            Ok(route) => {
                tracing::info!(token = %route.token, generation, "route computed");
                state.routed_generation = generation;
                state.view.set_route(route);
                state.publish(Change::Routed);

                Outcome::Routed
            }
            Err(error) if generation < state.routed_generation => {
                tracing::debug!(%error, generation, "superseded directions request failed");

                Outcome::Failed { error }
            }
            Err(error) => {
                tracing::warn!(%error, "directions request failed");
                state.view.set_error(error.clone());
                state.publish(Change::Failed {
                    error: error.clone(),
                });

                Outcome::Failed { error }
            }
        }
    }
}

impl State {
    fn status(&self) -> Status {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            Status::Computing
        } else if self.view.has_route() {
            Status::Routed
        } else {
            Status::Idle
        }
    }

    fn render(&self) -> MapView {
        self.view.render(&self.inputs, &self.waypoints, self.status())
    }

    /// Builds the next request from the current fields and stops, or decides
    /// why there is none.
    fn prepare(&mut self, trigger: Trigger) -> Result<(RouteRequest, u64), Outcome> {
        let request = RouteRequest::build(
            self.inputs.read(Field::Origin),
            self.inputs.read(Field::Destination),
            &self.waypoints,
        );

        match request {
            Some(request) => {
                let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                self.next_generation += 1;
                tracing::info!(in_flight, generation = self.next_generation, "requesting directions");
                self.publish(Change::Computing {
                    request: request.clone(),
                });

                Ok((request, self.next_generation))
            }
            // the displayed route no longer matches the stops
            None if trigger == Trigger::WaypointsChanged && self.view.has_route() => {
                self.view.invalidate_route();
                tracing::info!("route invalidated, origin or destination missing");
                self.publish(Change::Invalidated);

                Err(Outcome::Invalidated)
            }
            None => {
                tracing::debug!("origin or destination missing, nothing to route");
                Err(Outcome::Skipped)
            }
        }
    }

    fn publish(&mut self, change: Change) {
        if self.subscribers.is_empty() {
            return;
        }

        let event = PlannerEvent {
            change,
            view: self.render(),
        };

        self.subscribers
            .retain(|tx| tx.try_send(event.clone()).is_ok());
    }
}

impl API for Planner {}
