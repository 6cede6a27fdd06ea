use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// No route computed, or the last one was invalidated.
    #[default]
    Idle,
    /// At least one directions request is in flight.
    Computing,
    Routed,
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Computing => "computing",
            Self::Routed => "routed",
        }
    }
}
