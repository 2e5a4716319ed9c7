//! Controller module for redis-reconciler.
//!
//! Contains the pure reconciliation logic for a Redis cache:
//! - `parameters`: create and update request bodies
//! - `drift`: whether the live cache needs an update
//! - `observation`: status projection of the live cache
//! - `late_init`: backfilling unset parameters from the live cache
//! - `plan`: the above composed into a single reconcile decision
//!
//! `fields` holds the field table that drift detection and late
//! initialization evaluate.

pub mod drift;
pub mod error;
pub mod fields;
pub mod late_init;
pub mod observation;
pub mod parameters;
pub mod plan;

pub use drift::{drifted_fields, needs_update};
pub use error::{Error, Result};
pub use late_init::late_initialize;
pub use observation::generate_observation;
pub use parameters::{new_create_parameters, new_update_parameters};
pub use plan::{Plan, Reconciliation, plan};
