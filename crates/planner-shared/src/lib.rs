//! # Planner Shared
//!
//! The boundary between the planner state and its views.
//! Views receive a [`PlannerView`] snapshot and answer with
//! [`PlannerIntent`]s; both cross the boundary as JSON.

pub mod dto;
pub mod response;

pub use dto::PlannerIntent;
pub use response::{ErrorBody, PlannerView, Reply};
