// Test code is allowed to panic on failure
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

//! Property-based tests for redis-reconciler.
//!
//! Uses proptest to generate random parameters and provider resources and
//! verify the reconciliation invariants.

use std::collections::BTreeMap;

use proptest::prelude::*;

use redis_reconciler::client::{Properties, ResourceType, Sku};
use redis_reconciler::controller::fields::FIELDS;
use redis_reconciler::crd::{self, RedisParameters};
use redis_reconciler::{late_initialize, needs_update, new_update_parameters};

/// Strategy for short identifier-like strings.
fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,11}"
}

/// Strategy for string maps, including empty ones.
fn string_map() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(word(), word(), 0..4)
}

fn sku() -> impl Strategy<Value = crd::Sku> {
    (
        prop_oneof![Just("Basic"), Just("Standard"), Just("Premium")],
        prop_oneof![Just("C"), Just("P")],
        0..=6i32,
    )
        .prop_map(|(name, family, capacity)| crd::Sku {
            name: name.to_string(),
            family: family.to_string(),
            capacity,
        })
}

/// Strategy for arbitrary desired parameters.
fn parameters() -> impl Strategy<Value = RedisParameters> {
    (
        (
            word(),
            prop::option::of(prop::collection::vec(word(), 0..3)),
            prop::option::of(string_map()),
            sku(),
            prop::option::of(word()),
            prop::option::of("10\\.0\\.[0-9]{1,3}\\.[0-9]{1,3}"),
        ),
        (
            prop::option::of(any::<bool>()),
            prop::option::of(string_map()),
            prop::option::of(string_map()),
            prop::option::of(0..=10i32),
            prop::option::of(prop_oneof![Just("1.0"), Just("1.1"), Just("1.2")]),
        ),
    )
        .prop_map(
            |(
                (location, zones, tags, sku, subnet_id, static_ip),
                (enable_non_ssl_port, redis_configuration, tenant_settings, shard_count, tls),
            )| RedisParameters {
                location,
                zones,
                tags,
                sku,
                subnet_id,
                static_ip,
                enable_non_ssl_port,
                redis_configuration,
                tenant_settings,
                shard_count,
                minimum_tls_version: tls.map(str::to_string),
            },
        )
}

/// Strategy for a provider resource whose SKU matches `sku`.
fn observed_with_sku(sku: crd::Sku) -> impl Strategy<Value = ResourceType> {
    let sku = Sku {
        name: sku.name,
        family: sku.family,
        capacity: Some(sku.capacity),
    };
    (
        prop::option::of(prop::collection::vec(word(), 0..3)),
        prop::option::of(string_map()),
        prop::option::of(word()),
        prop::option::of(any::<bool>()),
        prop::option::of(string_map()),
        prop::option::of(string_map()),
        prop::option::of(0..=10i32),
        prop::option::of(prop_oneof![Just(""), Just("1.0"), Just("1.2")]),
    )
        .prop_map(
            move |(
                zones,
                tags,
                subnet_id,
                enable_non_ssl_port,
                redis_configuration,
                tenant_settings,
                shard_count,
                tls,
            )| ResourceType {
                zones,
                tags,
                properties: Some(Properties {
                    sku: Some(sku.clone()),
                    subnet_id,
                    enable_non_ssl_port,
                    redis_configuration,
                    tenant_settings,
                    shard_count,
                    minimum_tls_version: tls.map(str::to_string),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
}

/// Desired parameters paired with a resource reporting the same SKU.
fn parameters_and_observed() -> impl Strategy<Value = (RedisParameters, ResourceType)> {
    parameters().prop_flat_map(|params| {
        let observed = observed_with_sku(params.sku.clone());
        (Just(params), observed)
    })
}

proptest! {
    /// Update bodies never contain a create-only field.
    #[test]
    fn update_body_has_no_create_only_fields(params in parameters()) {
        let json = serde_json::to_value(new_update_parameters(&params)).unwrap();
        for rule in FIELDS.iter().filter(|r| !r.is_updatable()) {
            prop_assert!(
                json.pointer(rule.wire_path).is_none(),
                "{} leaked into update body", rule.name
            );
        }
    }

    /// With only the SKU set, nothing the provider reports counts as drift.
    #[test]
    fn unset_fields_never_drift((params, observed) in parameters_and_observed()) {
        let bare = RedisParameters {
            sku: params.sku,
            ..Default::default()
        };
        prop_assert!(!needs_update(&bare, &observed));
    }

    /// Changing one updatable scalar away from the observed value is drift.
    #[test]
    fn scalar_change_is_drift(
        (params, observed) in parameters_and_observed(),
        delta in 1..=4i32,
        field in 0..6usize,
    ) {
        let mut changed = params.clone();
        late_initialize(&mut changed, &observed);
        match field {
            0 => changed.sku.capacity += delta,
            1 => {
                let current = observed.properties().shard_count.unwrap_or(0);
                changed.shard_count = Some(current + delta);
            }
            2 => {
                let current = observed.properties().enable_non_ssl_port.unwrap_or(false);
                changed.enable_non_ssl_port = Some(!current);
            }
            3 => changed.sku.name.push_str("-next"),
            4 => changed.sku.family.push_str("-next"),
            _ => {
                let current = observed.properties().minimum_tls_version.clone().unwrap_or_default();
                changed.minimum_tls_version = Some(format!("{current}-next"));
            }
        }
        prop_assert!(needs_update(&changed, &observed));
    }

    /// Mapping comparison ignores insertion order but not contents.
    #[test]
    fn mapping_drift_is_unordered(
        (params, mut observed) in parameters_and_observed(),
        pairs in prop::collection::vec((word(), word()), 1..5),
        extra in word(),
    ) {
        let forward: BTreeMap<_, _> = pairs.iter().cloned().collect();
        let reversed: BTreeMap<_, _> = pairs.iter().rev().cloned().collect();

        let mut desired = RedisParameters { sku: params.sku, ..Default::default() };
        desired.redis_configuration = Some(reversed);
        observed.properties.as_mut().unwrap().redis_configuration = Some(forward.clone());
        prop_assume!(desired.redis_configuration == Some(forward.clone()));
        prop_assert!(!needs_update(&desired, &observed));

        let mut larger = forward;
        larger.insert(format!("EXTRA-{extra}"), extra);
        desired.redis_configuration = Some(larger);
        prop_assert!(needs_update(&desired, &observed));
    }

    /// A second late initialization changes nothing.
    #[test]
    fn late_init_is_idempotent((mut params, observed) in parameters_and_observed()) {
        late_initialize(&mut params, &observed);
        let once = params.clone();
        prop_assert!(late_initialize(&mut params, &observed).is_empty());
        prop_assert_eq!(params, once);
    }

    /// Fields the user set survive late initialization untouched.
    #[test]
    fn late_init_never_overwrites((params, observed) in parameters_and_observed()) {
        let mut filled = params.clone();
        late_initialize(&mut filled, &observed);

        prop_assert_eq!(&filled.location, &params.location);
        prop_assert_eq!(&filled.sku, &params.sku);
        if params.zones.is_some() { prop_assert_eq!(&filled.zones, &params.zones); }
        if params.tags.is_some() { prop_assert_eq!(&filled.tags, &params.tags); }
        if params.subnet_id.is_some() { prop_assert_eq!(&filled.subnet_id, &params.subnet_id); }
        if params.shard_count.is_some() {
            prop_assert_eq!(filled.shard_count, params.shard_count);
        }
        if params.enable_non_ssl_port.is_some() {
            prop_assert_eq!(filled.enable_non_ssl_port, params.enable_non_ssl_port);
        }
        if params.redis_configuration.is_some() {
            prop_assert_eq!(&filled.redis_configuration, &params.redis_configuration);
        }
        if params.tenant_settings.is_some() {
            prop_assert_eq!(&filled.tenant_settings, &params.tenant_settings);
        }
        if params.minimum_tls_version.is_some() {
            prop_assert_eq!(&filled.minimum_tls_version, &params.minimum_tls_version);
        }
    }

    /// Late-initializing bare parameters from a cache leaves nothing to update.
    #[test]
    fn late_init_converges((params, observed) in parameters_and_observed()) {
        let mut bare = RedisParameters { sku: params.sku, ..Default::default() };
        late_initialize(&mut bare, &observed);
        prop_assert!(!needs_update(&bare, &observed));
    }
}
