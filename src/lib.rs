//! redis-reconciler library crate
//!
//! Desired-state reconciliation for managed Redis caches: building create and
//! update bodies, detecting drift against the live cache, projecting the live
//! cache into status, and late-initializing unset parameters.

pub mod client;
pub mod controller;
pub mod crd;
pub mod input;

pub use controller::{
    Error, Plan, Reconciliation, drifted_fields, generate_observation, late_initialize,
    needs_update, new_create_parameters, new_update_parameters, plan,
};
