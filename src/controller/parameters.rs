//! Create and update request bodies built from Redis parameters.
//!
//! Unset parameters stay unset in the request body, so the provider applies
//! its own default instead of receiving a zero value.

use crate::client::{CreateParameters, CreateProperties, Sku, UpdateParameters, UpdateProperties};
use crate::crd::{self, RedisParameters};

/// Build the body of a create call from the desired parameters.
pub fn new_create_parameters(params: &RedisParameters) -> CreateParameters {
    CreateParameters {
        location: Some(params.location.clone()),
        zones: params.zones.clone(),
        tags: params.tags.clone(),
        properties: Some(CreateProperties {
            sku: Some(provider_sku(&params.sku)),
            subnet_id: params.subnet_id.clone(),
            static_ip: params.static_ip.clone(),
            enable_non_ssl_port: params.enable_non_ssl_port,
            redis_configuration: params.redis_configuration.clone(),
            tenant_settings: params.tenant_settings.clone(),
            shard_count: params.shard_count,
            minimum_tls_version: params.minimum_tls_version.clone(),
        }),
    }
}

/// Build the body of an update call from the desired parameters.
///
/// Location, zones, subnet and static IP are fixed at creation and are not
/// representable in an update body.
pub fn new_update_parameters(params: &RedisParameters) -> UpdateParameters {
    UpdateParameters {
        tags: params.tags.clone(),
        properties: Some(UpdateProperties {
            sku: Some(provider_sku(&params.sku)),
            enable_non_ssl_port: params.enable_non_ssl_port,
            redis_configuration: params.redis_configuration.clone(),
            shard_count: params.shard_count,
            tenant_settings: params.tenant_settings.clone(),
            minimum_tls_version: params.minimum_tls_version.clone(),
        }),
    }
}

/// Convert a manifest SKU into its wire form.
pub fn provider_sku(sku: &crd::Sku) -> Sku {
    Sku {
        name: sku.name.clone(),
        family: sku.family.clone(),
        capacity: Some(sku.capacity),
    }
}
