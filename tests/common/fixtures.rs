//! Test fixtures and builder patterns for Redis parameters and provider
//! resources.

#![allow(dead_code)]

use std::collections::BTreeMap;

use redis_reconciler::client::{LinkedServer, Properties, ResourceType, Sku};
use redis_reconciler::crd::{self, RedisParameters};

pub const SKU_NAME: &str = "basic";
pub const SKU_FAMILY: &str = "C";
pub const SKU_CAPACITY: i32 = 1;

/// Build a string map from literal pairs.
pub fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn sku() -> crd::Sku {
    crd::Sku {
        name: SKU_NAME.to_string(),
        family: SKU_FAMILY.to_string(),
        capacity: SKU_CAPACITY,
    }
}

/// Builder for desired Redis parameters.
///
/// # Example
/// ```
/// let params = ParametersBuilder::new()
///     .location("us-east1")
///     .shard_count(3)
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct ParametersBuilder {
    params: RedisParameters,
}

impl ParametersBuilder {
    /// Start from the test SKU with every optional field unset.
    pub fn new() -> Self {
        Self {
            params: RedisParameters {
                sku: sku(),
                ..Default::default()
            },
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.params.location = location.into();
        self
    }

    pub fn zones(mut self, zones: &[&str]) -> Self {
        self.params.zones = Some(zones.iter().map(|z| z.to_string()).collect());
        self
    }

    pub fn tags(mut self, pairs: &[(&str, &str)]) -> Self {
        self.params.tags = Some(map(pairs));
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.params.sku.capacity = capacity;
        self
    }

    pub fn subnet_id(mut self, subnet_id: impl Into<String>) -> Self {
        self.params.subnet_id = Some(subnet_id.into());
        self
    }

    pub fn static_ip(mut self, static_ip: impl Into<String>) -> Self {
        self.params.static_ip = Some(static_ip.into());
        self
    }

    pub fn enable_non_ssl_port(mut self, enabled: bool) -> Self {
        self.params.enable_non_ssl_port = Some(enabled);
        self
    }

    pub fn redis_configuration(mut self, pairs: &[(&str, &str)]) -> Self {
        self.params.redis_configuration = Some(map(pairs));
        self
    }

    pub fn tenant_settings(mut self, pairs: &[(&str, &str)]) -> Self {
        self.params.tenant_settings = Some(map(pairs));
        self
    }

    pub fn shard_count(mut self, shard_count: i32) -> Self {
        self.params.shard_count = Some(shard_count);
        self
    }

    pub fn minimum_tls_version(mut self, version: impl Into<String>) -> Self {
        self.params.minimum_tls_version = Some(version.into());
        self
    }

    pub fn build(self) -> RedisParameters {
        self.params
    }
}

impl Default for ParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a provider resource body.
#[derive(Clone, Debug)]
pub struct ResourceBuilder {
    resource: ResourceType,
}

impl ResourceBuilder {
    /// Start from a resource reporting the test SKU and nothing else.
    pub fn new() -> Self {
        Self {
            resource: ResourceType {
                properties: Some(Properties {
                    sku: Some(Sku {
                        name: SKU_NAME.to_string(),
                        family: SKU_FAMILY.to_string(),
                        capacity: Some(SKU_CAPACITY),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
        }
    }

    /// A resource mirroring every updatable field of `params`.
    pub fn matching(params: &RedisParameters) -> Self {
        let mut builder = Self::new();
        builder.resource.tags = params.tags.clone();
        let props = builder.props();
        props.sku = Some(Sku {
            name: params.sku.name.clone(),
            family: params.sku.family.clone(),
            capacity: Some(params.sku.capacity),
        });
        props.enable_non_ssl_port = params.enable_non_ssl_port;
        props.redis_configuration = params.redis_configuration.clone();
        props.tenant_settings = params.tenant_settings.clone();
        props.shard_count = params.shard_count;
        props.minimum_tls_version = params.minimum_tls_version.clone();
        builder
    }

    fn props(&mut self) -> &mut Properties {
        self.resource.properties.get_or_insert_with(Properties::default)
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.resource.location = Some(location.into());
        self
    }

    pub fn zones(mut self, zones: &[&str]) -> Self {
        self.resource.zones = Some(zones.iter().map(|z| z.to_string()).collect());
        self
    }

    pub fn tags(mut self, pairs: &[(&str, &str)]) -> Self {
        self.resource.tags = Some(map(pairs));
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        if let Some(sku) = self.props().sku.as_mut() {
            sku.capacity = Some(capacity);
        }
        self
    }

    pub fn subnet_id(mut self, subnet_id: impl Into<String>) -> Self {
        self.props().subnet_id = Some(subnet_id.into());
        self
    }

    pub fn static_ip(mut self, static_ip: impl Into<String>) -> Self {
        self.props().static_ip = Some(static_ip.into());
        self
    }

    pub fn enable_non_ssl_port(mut self, enabled: bool) -> Self {
        self.props().enable_non_ssl_port = Some(enabled);
        self
    }

    pub fn redis_configuration(mut self, pairs: &[(&str, &str)]) -> Self {
        self.props().redis_configuration = Some(map(pairs));
        self
    }

    pub fn tenant_settings(mut self, pairs: &[(&str, &str)]) -> Self {
        self.props().tenant_settings = Some(map(pairs));
        self
    }

    pub fn shard_count(mut self, shard_count: i32) -> Self {
        self.props().shard_count = Some(shard_count);
        self
    }

    pub fn minimum_tls_version(mut self, version: impl Into<String>) -> Self {
        self.props().minimum_tls_version = Some(version.into());
        self
    }

    /// Fill the read-only fields the provider assigns once the cache exists.
    pub fn provisioned(mut self, state: &str) -> Self {
        let props = self.props();
        props.redis_version = Some("3.2".to_string());
        props.provisioning_state = Some(state.to_string());
        props.host_name = Some("108.8.8.1".to_string());
        props.port = Some(6374);
        props.ssl_port = Some(453);
        props.linked_servers = Some(vec![
            LinkedServer {
                id: Some("server1".to_string()),
            },
            LinkedServer {
                id: Some("server2".to_string()),
            },
        ]);
        self
    }

    pub fn build(self) -> ResourceType {
        self.resource
    }
}

impl Default for ResourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
