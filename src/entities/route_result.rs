use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::entities::RouteRequest;

/// A computed route as returned by the directions provider.
///
/// `directions` is handed to the map renderer untouched; the planner never
/// looks inside it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub token: Uuid,
    pub request: RouteRequest,
    pub directions: Value,
    pub computed_at: DateTime<Utc>,
}

impl RouteResult {
    pub fn new(request: RouteRequest, directions: Value) -> Self {
        Self {
            token: Uuid::new_v4(),
            request,
            directions,
            computed_at: Utc::now(),
        }
    }
}
