pub mod events;
pub mod places;
pub mod planner;
