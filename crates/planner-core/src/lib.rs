//! # Planner Core
//!
//! The domain layer of the content planner.
//! This crate contains the post model, the reconciliation rules and the
//! state controller, with zero infrastructure dependencies.

pub mod controller;
pub mod domain;
pub mod error;
pub mod ports;
pub mod projection;
pub mod reconcile;

pub use controller::{EditorState, Planner};
pub use error::StoreError;
