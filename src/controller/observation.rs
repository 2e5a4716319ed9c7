//! Projection of the observed cache into status.

use crate::client::ResourceType;
use crate::crd::RedisObservation;

/// Build the `atProvider` status block from the provider's view of the cache.
///
/// Fields the provider omitted are reported as their zero value.
pub fn generate_observation(observed: &ResourceType) -> RedisObservation {
    let props = observed.properties();

    RedisObservation {
        redis_version: props.redis_version.clone().unwrap_or_default(),
        provisioning_state: props.provisioning_state.clone().unwrap_or_default(),
        host_name: props.host_name.clone().unwrap_or_default(),
        port: props.port.unwrap_or_default(),
        ssl_port: props.ssl_port.unwrap_or_default(),
        linked_servers: props
            .linked_servers
            .iter()
            .flatten()
            .filter_map(|server| server.id.clone())
            .collect(),
        redis_configuration: props.redis_configuration.clone().unwrap_or_default(),
        enable_non_ssl_port: props.enable_non_ssl_port.unwrap_or_default(),
        tenant_settings: props.tenant_settings.clone().unwrap_or_default(),
        shard_count: props.shard_count.unwrap_or_default(),
        minimum_tls_version: props.minimum_tls_version.clone().unwrap_or_default(),
    }
}
