//! Drift detection between desired parameters and the observed cache.
//!
//! Only fields that can be sent on update are compared. A field the user
//! left unset accepts whatever the provider currently has.

use tracing::debug;

use crate::client::ResourceType;
use crate::controller::fields::updatable_rules;
use crate::crd::RedisParameters;

/// Check if the observed cache must be updated to match the desired parameters.
///
/// Stops at the first drifted field.
pub fn needs_update(desired: &RedisParameters, observed: &ResourceType) -> bool {
    match updatable_rules().find(|rule| rule.drifted(desired, observed)) {
        Some(rule) => {
            debug!(field = rule.name, "Field drifted from observed state");
            true
        }
        None => false,
    }
}

/// Names of every updatable field whose desired value differs from the
/// observed one.
pub fn drifted_fields(desired: &RedisParameters, observed: &ResourceType) -> Vec<&'static str> {
    updatable_rules()
        .filter(|rule| rule.drifted(desired, observed))
        .map(|rule| rule.name)
        .collect()
}
