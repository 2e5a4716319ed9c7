//! One reconcile decision for a Redis cache.
//!
//! Composes late initialization, drift detection and request building into
//! the action the caller should take against the provider. Nothing here
//! talks to the provider.

use serde::Serialize;
use tracing::info;

use crate::client::{CreateParameters, ResourceType, UpdateParameters};
use crate::controller::drift::drifted_fields;
use crate::controller::late_init::late_initialize;
use crate::controller::observation::generate_observation;
use crate::controller::parameters::{new_create_parameters, new_update_parameters};
use crate::crd::{RedisObservation, RedisParameters};

/// Call the caller should make against the provider.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "action", content = "body", rename_all = "camelCase")]
pub enum Plan {
    /// The cache does not exist yet.
    Create(CreateParameters),
    /// The cache exists but has drifted from the desired parameters.
    Update(UpdateParameters),
    /// The cache matches the desired parameters.
    UpToDate,
}

/// Outcome of planning one reconcile cycle.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation {
    /// Fields backfilled into the desired parameters. When non-empty the
    /// caller should persist the updated manifest.
    pub late_initialized: Vec<&'static str>,
    /// Updatable fields that differ from the observed cache.
    pub drifted: Vec<&'static str>,
    pub plan: Plan,
    /// Status snapshot of the observed cache, if there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<RedisObservation>,
}

/// Decide what to do with a cache given its desired parameters and, if it
/// exists, the provider's view of it.
///
/// `desired` is late-initialized in place before drift is computed.
pub fn plan(desired: &mut RedisParameters, observed: Option<&ResourceType>) -> Reconciliation {
    let Some(observed) = observed else {
        info!(location = %desired.location, "Cache not found, planning create");
        return Reconciliation {
            late_initialized: Vec::new(),
            drifted: Vec::new(),
            plan: Plan::Create(new_create_parameters(desired)),
            observation: None,
        };
    };

    let late_initialized = late_initialize(desired, observed);
    let drifted = drifted_fields(desired, observed);

    let plan = if drifted.is_empty() {
        info!("Cache is up to date");
        Plan::UpToDate
    } else {
        info!(fields = ?drifted, "Cache drifted, planning update");
        Plan::Update(new_update_parameters(desired))
    };

    Reconciliation {
        late_initialized,
        drifted,
        plan,
        observation: Some(generate_observation(observed)),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::client::{Properties, Sku};
    use crate::crd;

    fn desired() -> RedisParameters {
        RedisParameters {
            location: "eastus".to_string(),
            sku: crd::Sku {
                name: "Standard".to_string(),
                family: "C".to_string(),
                capacity: 1,
            },
            ..Default::default()
        }
    }

    fn observed(capacity: i32) -> ResourceType {
        ResourceType {
            location: Some("eastus".to_string()),
            properties: Some(Properties {
                sku: Some(Sku {
                    name: "Standard".to_string(),
                    family: "C".to_string(),
                    capacity: Some(capacity),
                }),
                enable_non_ssl_port: Some(false),
                minimum_tls_version: Some("1.2".to_string()),
                provisioning_state: Some("Succeeded".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_plan_create_when_missing() {
        let mut spec = desired();
        let result = plan(&mut spec, None);

        assert_eq!(result.plan, Plan::Create(new_create_parameters(&desired())));
        assert!(result.late_initialized.is_empty());
        assert!(result.observation.is_none());
        assert_eq!(spec, desired());
    }

    #[test]
    fn test_plan_up_to_date_after_late_init() {
        let mut spec = desired();
        let result = plan(&mut spec, Some(&observed(1)));

        assert_eq!(result.plan, Plan::UpToDate);
        assert_eq!(
            result.late_initialized,
            vec!["enableNonSslPort", "minimumTlsVersion"]
        );
        assert_eq!(spec.enable_non_ssl_port, Some(false));
        assert_eq!(
            result.observation.unwrap().provisioning_state,
            "Succeeded"
        );
    }

    #[test]
    fn test_plan_update_on_drift() {
        let mut spec = desired();
        spec.sku.capacity = 2;
        let result = plan(&mut spec, Some(&observed(1)));

        assert_eq!(result.drifted, vec!["sku.capacity"]);
        match result.plan {
            Plan::Update(body) => {
                let sku = body.properties.unwrap().sku.unwrap();
                assert_eq!(sku.capacity, Some(2));
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_serialization() {
        let mut spec = desired();
        let json = serde_json::to_value(plan(&mut spec, Some(&observed(1)))).unwrap();
        assert_eq!(json["plan"], serde_json::json!({"action": "upToDate"}));
        assert_eq!(json["observation"]["provisioningState"], "Succeeded");
    }
}
