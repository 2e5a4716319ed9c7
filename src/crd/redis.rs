//! Redis Custom Resource Definition.
//!
//! Declares a managed Redis cache. The user-facing parameters live under
//! `spec.forProvider`; the provider's view of the live cache is reported
//! under `status.atProvider`.

use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::client::ResourceType;
use crate::controller::observation::generate_observation;

/// Redis is a managed resource representing a provider Redis cache.
///
/// Example:
/// ```yaml
/// apiVersion: cache.azure.crossplane.io/v1alpha3
/// kind: Redis
/// metadata:
///   name: my-cache
/// spec:
///   forProvider:
///     location: eastus
///     sku:
///       name: Basic
///       family: C
///       capacity: 1
///     enableNonSslPort: false
///     redisConfiguration:
///       maxmemory-policy: allkeys-lru
/// ```
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "cache.azure.crossplane.io",
    version = "v1alpha3",
    kind = "Redis",
    plural = "redis",
    status = "RedisStatus",
    printcolumn = r#"{"name":"State", "type":"string", "jsonPath":".status.atProvider.provisioningState"}"#,
    printcolumn = r#"{"name":"Version", "type":"string", "jsonPath":".status.atProvider.redisVersion"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct RedisSpec {
    /// Desired configuration of the cache.
    pub for_provider: RedisParameters,
}

/// User-declared parameters of a Redis cache.
///
/// Every `Option` distinguishes "not set by the user" from "set to an empty
/// or zero value". Late initialization only fills `None` slots.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedisParameters {
    /// Region the cache lives in. Create-only.
    pub location: String,

    /// Availability zones to place the cache in. Create-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<String>>,

    /// Resource tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,

    /// Pricing tier of the cache.
    pub sku: Sku,

    /// Full resource ID of the virtual network subnet to deploy into.
    /// Create-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,

    /// Static IP address within the subnet. Create-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_ip: Option<String>,

    /// Whether the non-TLS port (6379) is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_non_ssl_port: Option<bool>,

    /// Redis settings such as `maxmemory-policy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_configuration: Option<BTreeMap<String, String>>,

    /// Tenant settings of the cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_settings: Option<BTreeMap<String, String>>,

    /// Number of shards on a Premium cluster cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_count: Option<i32>,

    /// Minimum TLS version clients must use ("1.0", "1.1" or "1.2").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_tls_version: Option<String>,
}

/// Pricing tier of a Redis cache.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    /// Tier name: Basic, Standard or Premium.
    pub name: String,

    /// Family: C for Basic/Standard, P for Premium.
    pub family: String,

    /// Cache size within the family (0-6 for C, 1-4 for P).
    pub capacity: i32,
}

/// Status of a Redis resource.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedisStatus {
    /// Last observed state of the cache at the provider.
    #[serde(default)]
    pub at_provider: RedisObservation,

    /// The generation most recently observed by the controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

impl RedisStatus {
    /// Build a status from the provider's view of the cache.
    pub fn observe(observed: &ResourceType, generation: Option<i64>) -> Self {
        Self {
            at_provider: generate_observation(observed),
            observed_generation: generation,
        }
    }
}

/// Read-only projection of the provider's view of a cache.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedisObservation {
    /// Redis server version.
    #[serde(default)]
    pub redis_version: String,

    /// Provisioning state reported by the provider. Passed through verbatim;
    /// see [`provisioning_state`] for well-known values.
    #[serde(default)]
    pub provisioning_state: String,

    /// DNS name of the cache.
    #[serde(default)]
    pub host_name: String,

    /// Non-TLS port.
    #[serde(default)]
    pub port: i32,

    /// TLS port.
    #[serde(default)]
    pub ssl_port: i32,

    /// IDs of linked (geo-replicated) servers.
    #[serde(default)]
    pub linked_servers: Vec<String>,

    #[serde(default)]
    pub redis_configuration: BTreeMap<String, String>,

    #[serde(default)]
    pub enable_non_ssl_port: bool,

    #[serde(default)]
    pub tenant_settings: BTreeMap<String, String>,

    #[serde(default)]
    pub shard_count: i32,

    #[serde(default)]
    pub minimum_tls_version: String,
}

/// Provisioning states reported by the provider.
///
/// Nothing in this crate branches on these; they are exported for the
/// reconcile loop that drives resource conditions.
pub mod provisioning_state {
    pub const CREATING: &str = "Creating";
    pub const DELETING: &str = "Deleting";
    pub const DISABLED: &str = "Disabled";
    pub const FAILED: &str = "Failed";
    pub const LINKING: &str = "Linking";
    pub const PROVISIONING: &str = "Provisioning";
    pub const RECOVERING_SCALE_FAILURE: &str = "RecoveringScaleFailure";
    pub const SCALING: &str = "Scaling";
    pub const SUCCEEDED: &str = "Succeeded";
    pub const UNLINKING: &str = "Unlinking";
    pub const UNPROVISIONING: &str = "Unprovisioning";
    pub const UPDATING: &str = "Updating";
}
