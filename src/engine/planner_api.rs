use super::{Planner, Trigger};

use async_channel::Receiver;
use async_trait::async_trait;

use crate::{
    api::{Outcome, PlannerAPI},
    entities::{Change, Field, MapView, PlannerEvent},
};

#[async_trait]
impl PlannerAPI for Planner {
    async fn subscribe(&self) -> Receiver<PlannerEvent> {
        let (tx, rx) = async_channel::unbounded();
        self.state.lock().await.subscribers.push(tx);

        rx
    }

    async fn view(&self) -> MapView {
        self.state.lock().await.render()
    }

    #[tracing::instrument(skip(self))]
    async fn set_field(&self, field: Field, value: String) -> MapView {
        let mut state = self.state.lock().await;
        state.inputs.set(field, value);
        state.publish(Change::FieldChanged { field });

        state.render()
    }

    #[tracing::instrument(skip(self))]
    async fn submit_route(&self) -> Outcome {
        let state = self.state.lock().await;

        self.recalculate(state, Trigger::Submit).await
    }

    #[tracing::instrument(skip(self))]
    async fn add_stop(&self) -> Outcome {
        let mut state = self.state.lock().await;

        let waypoints = state.waypoints.append(state.inputs.read(Field::PendingStop));
        if waypoints.len() == state.waypoints.len() {
            tracing::debug!("pending stop is blank");
            return Outcome::Skipped;
        }

        state.waypoints = waypoints;
        state.inputs.clear(Field::PendingStop);
        tracing::info!(stops = state.waypoints.len(), "stop added");
        state.publish(Change::WaypointsChanged);

        self.recalculate(state, Trigger::WaypointsChanged).await
    }

    #[tracing::instrument(skip(self))]
    async fn clear_stops(&self) -> Outcome {
        let mut state = self.state.lock().await;

        state.waypoints = state.waypoints.clear();
        tracing::info!("stops cleared");
        state.publish(Change::WaypointsChanged);

        self.recalculate(state, Trigger::WaypointsChanged).await
    }

    #[tracing::instrument(skip(self))]
    async fn toggle_stop_panel(&self) -> bool {
        let mut state = self.state.lock().await;

        let visible = state.view.toggle_stop_panel();
        state.publish(Change::StopPanelToggled { visible });

        visible
    }
}
