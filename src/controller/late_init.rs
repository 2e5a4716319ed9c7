//! Late initialization of Redis parameters from the observed cache.
//!
//! Fields the user left unset are filled with the provider's values so that
//! the manifest records what the cache actually runs with. This is a one-way
//! backfill: a field the user set is never overwritten, whatever the
//! provider reports.

use tracing::debug;

use crate::client::ResourceType;
use crate::controller::fields::FIELDS;
use crate::crd::RedisParameters;

/// Fill unset fields of `desired` from `observed`.
///
/// Returns the names of the fields that were filled; an empty list means
/// `desired` is unchanged and need not be written back.
pub fn late_initialize(desired: &mut RedisParameters, observed: &ResourceType) -> Vec<&'static str> {
    let mut filled = Vec::new();
    for rule in FIELDS {
        if rule.late_initialize(desired, observed) {
            debug!(field = rule.name, "Late-initialized field from observed state");
            filled.push(rule.name);
        }
    }
    filled
}
