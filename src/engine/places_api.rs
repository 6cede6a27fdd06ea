use super::Planner;

use async_trait::async_trait;

use crate::{
    api::PlacesAPI, entities::Coordinates, error::Error, external::google_maps::PlaceSuggestions,
};

#[async_trait]
impl PlacesAPI for Planner {
    #[tracing::instrument(skip(self))]
    async fn find_place_suggestions(
        &self,
        input: String,
        location: Coordinates,
        radius: f64,
        session_token: String,
    ) -> Result<PlaceSuggestions, Error> {
        if input.trim().is_empty() {
            return Ok(Vec::new());
        }

        self.maps
            .find_place_suggestions(input, location, radius, session_token)
            .await
    }
}
