//! Field mapping rules for Redis parameters.
//!
//! Each [`FieldRule`] describes one user-settable field: where it lives in
//! the provider body, whether it can change after creation (and if so how to
//! detect drift), and how to backfill it from the observed resource. Drift
//! detection and late initialization both evaluate [`FIELDS`] rather than
//! walking the structs by hand.
//!
//! Rule order matters for drift detection, which short-circuits: scalar
//! rules come before mapping rules.

use std::collections::BTreeMap;

use crate::client::{ResourceType, Sku};
use crate::crd::RedisParameters;

/// Returns true when the desired value of a field differs from the observed one.
pub type DriftFn = fn(&RedisParameters, &ResourceType) -> bool;

/// Copies an observed value into an unset desired field. Returns true if the
/// desired parameters were changed.
pub type BackfillFn = fn(&mut RedisParameters, &ResourceType) -> bool;

/// Whether a field may change after the cache exists.
#[derive(Clone, Copy)]
pub enum Mutability {
    /// Only sent on create. Never part of an update body or drift check.
    CreateOnly,
    /// Sent on update and compared against the observed resource.
    Updatable(DriftFn),
}

/// How a field's desired and observed values are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Comparison {
    /// Plain equality of a single value.
    Scalar,
    /// Element-wise, order-sensitive equality of a list.
    Ordered,
    /// Key/value equality of a map, independent of insertion order.
    Mapping,
}

/// A declarative mapping rule for one field.
#[derive(Clone, Copy)]
pub struct FieldRule {
    /// Field name as written in the Redis manifest.
    pub name: &'static str,
    /// JSON pointer of the field in create and update bodies.
    pub wire_path: &'static str,
    pub mutability: Mutability,
    pub comparison: Comparison,
    /// `None` for fields that are never late-initialized.
    pub backfill: Option<BackfillFn>,
}

impl FieldRule {
    /// Check if the field may be sent on update.
    pub fn is_updatable(&self) -> bool {
        matches!(self.mutability, Mutability::Updatable(_))
    }

    /// Check if the desired value has drifted from the observed one.
    ///
    /// Create-only fields never drift.
    pub fn drifted(&self, desired: &RedisParameters, observed: &ResourceType) -> bool {
        match self.mutability {
            Mutability::CreateOnly => false,
            Mutability::Updatable(drift) => drift(desired, observed),
        }
    }

    /// Backfill the field from the observed resource if the user left it unset.
    pub fn late_initialize(&self, desired: &mut RedisParameters, observed: &ResourceType) -> bool {
        self.backfill
            .is_some_and(|backfill| backfill(desired, observed))
    }
}

/// Every user-settable field of [`RedisParameters`].
pub const FIELDS: &[FieldRule] = &[
    // Create-only
    FieldRule {
        name: "location",
        wire_path: "/location",
        mutability: Mutability::CreateOnly,
        comparison: Comparison::Scalar,
        backfill: None,
    },
    FieldRule {
        name: "zones",
        wire_path: "/zones",
        mutability: Mutability::CreateOnly,
        comparison: Comparison::Ordered,
        backfill: Some(|d, o| fill(&mut d.zones, o.zones.as_ref())),
    },
    FieldRule {
        name: "subnetId",
        wire_path: "/properties/subnetId",
        mutability: Mutability::CreateOnly,
        comparison: Comparison::Scalar,
        backfill: Some(|d, o| fill(&mut d.subnet_id, o.properties().subnet_id.as_ref())),
    },
    FieldRule {
        name: "staticIp",
        wire_path: "/properties/staticIP",
        mutability: Mutability::CreateOnly,
        comparison: Comparison::Scalar,
        backfill: Some(|d, o| fill(&mut d.static_ip, o.properties().static_ip.as_ref())),
    },
    // Updatable scalars
    FieldRule {
        name: "sku.name",
        wire_path: "/properties/sku/name",
        mutability: Mutability::Updatable(|d, o| {
            differs(Some(d.sku.name.as_str()), observed_sku(o).map(|s| s.name.as_str()))
        }),
        comparison: Comparison::Scalar,
        backfill: None,
    },
    FieldRule {
        name: "sku.family",
        wire_path: "/properties/sku/family",
        mutability: Mutability::Updatable(|d, o| {
            differs(Some(d.sku.family.as_str()), observed_sku(o).map(|s| s.family.as_str()))
        }),
        comparison: Comparison::Scalar,
        backfill: None,
    },
    FieldRule {
        name: "sku.capacity",
        wire_path: "/properties/sku/capacity",
        mutability: Mutability::Updatable(|d, o| {
            differs(Some(&d.sku.capacity), observed_sku(o).and_then(|s| s.capacity.as_ref()))
        }),
        comparison: Comparison::Scalar,
        backfill: None,
    },
    FieldRule {
        name: "enableNonSslPort",
        wire_path: "/properties/enableNonSslPort",
        mutability: Mutability::Updatable(|d, o| {
            differs(
                d.enable_non_ssl_port.as_ref(),
                o.properties().enable_non_ssl_port.as_ref(),
            )
        }),
        comparison: Comparison::Scalar,
        backfill: Some(|d, o| {
            fill(
                &mut d.enable_non_ssl_port,
                o.properties().enable_non_ssl_port.as_ref(),
            )
        }),
    },
    FieldRule {
        name: "shardCount",
        wire_path: "/properties/shardCount",
        mutability: Mutability::Updatable(|d, o| {
            differs(d.shard_count.as_ref(), o.properties().shard_count.as_ref())
        }),
        comparison: Comparison::Scalar,
        backfill: Some(|d, o| fill(&mut d.shard_count, o.properties().shard_count.as_ref())),
    },
    FieldRule {
        name: "minimumTlsVersion",
        wire_path: "/properties/minimumTlsVersion",
        mutability: Mutability::Updatable(|d, o| {
            differs(
                d.minimum_tls_version.as_deref(),
                o.properties().minimum_tls_version.as_deref(),
            )
        }),
        comparison: Comparison::Scalar,
        backfill: Some(|d, o| {
            fill(
                &mut d.minimum_tls_version,
                o.properties().minimum_tls_version.as_ref(),
            )
        }),
    },
    // Updatable mappings
    FieldRule {
        name: "tags",
        wire_path: "/tags",
        mutability: Mutability::Updatable(|d, o| map_differs(d.tags.as_ref(), o.tags.as_ref())),
        comparison: Comparison::Mapping,
        backfill: Some(|d, o| fill(&mut d.tags, o.tags.as_ref())),
    },
    FieldRule {
        name: "redisConfiguration",
        wire_path: "/properties/redisConfiguration",
        mutability: Mutability::Updatable(|d, o| {
            map_differs(
                d.redis_configuration.as_ref(),
                o.properties().redis_configuration.as_ref(),
            )
        }),
        comparison: Comparison::Mapping,
        backfill: Some(|d, o| {
            fill(
                &mut d.redis_configuration,
                o.properties().redis_configuration.as_ref(),
            )
        }),
    },
    FieldRule {
        name: "tenantSettings",
        wire_path: "/properties/tenantSettings",
        mutability: Mutability::Updatable(|d, o| {
            map_differs(
                d.tenant_settings.as_ref(),
                o.properties().tenant_settings.as_ref(),
            )
        }),
        comparison: Comparison::Mapping,
        backfill: Some(|d, o| {
            fill(
                &mut d.tenant_settings,
                o.properties().tenant_settings.as_ref(),
            )
        }),
    },
];

/// Rules for fields that may be sent on update, in evaluation order.
pub fn updatable_rules() -> impl Iterator<Item = &'static FieldRule> {
    FIELDS.iter().filter(|rule| rule.is_updatable())
}

/// Look up a rule by its manifest field name.
pub fn rule(name: &str) -> Option<&'static FieldRule> {
    FIELDS.iter().find(|rule| rule.name == name)
}

fn observed_sku(observed: &ResourceType) -> Option<&Sku> {
    observed.properties().sku.as_ref()
}

/// An unset desired value never differs; a set one must match exactly.
fn differs<T: PartialEq + ?Sized>(desired: Option<&T>, observed: Option<&T>) -> bool {
    desired.is_some_and(|desired| observed != Some(desired))
}

/// Like [`differs`], but a map the provider omitted compares as empty.
fn map_differs(
    desired: Option<&BTreeMap<String, String>>,
    observed: Option<&BTreeMap<String, String>>,
) -> bool {
    desired.is_some_and(|desired| match observed {
        Some(observed) => observed != desired,
        None => !desired.is_empty(),
    })
}

/// Values the provider reports in place of "nothing set".
trait ProviderDefault {
    fn is_provider_default(&self) -> bool;
}

impl ProviderDefault for String {
    fn is_provider_default(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ProviderDefault for Vec<T> {
    fn is_provider_default(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> ProviderDefault for BTreeMap<K, V> {
    fn is_provider_default(&self) -> bool {
        self.is_empty()
    }
}

// false and 0 are meaningful settings, not placeholders.
impl ProviderDefault for bool {
    fn is_provider_default(&self) -> bool {
        false
    }
}

impl ProviderDefault for i32 {
    fn is_provider_default(&self) -> bool {
        false
    }
}

/// Set an unset slot to the observed value. A slot that is already set is
/// never touched.
fn fill<T: Clone + ProviderDefault>(slot: &mut Option<T>, observed: Option<&T>) -> bool {
    match observed {
        Some(value) if slot.is_none() && !value.is_provider_default() => {
            *slot = Some(value.clone());
            true
        }
        _ => false,
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
    use crate::client::Properties;
    use serde_json::{Value, json};

    /// Desired parameters with `name` set to `value` and nothing else optional.
    fn desired_with(name: &str, value: Value) -> RedisParameters {
        let mut manifest = json!({
            "location": "eastus",
            "sku": {"name": "basic", "family": "C", "capacity": 1}
        });
        let pointer = format!("/{}", name.replace('.', "/"));
        match manifest.pointer_mut(&pointer) {
            Some(slot) => *slot = value,
            None => {
                manifest
                    .as_object_mut()
                    .unwrap()
                    .insert(name.to_string(), value);
            }
        }
        serde_json::from_value(manifest).unwrap()
    }

    #[test]
    fn test_rule_names_are_unique() {
        for (i, a) in FIELDS.iter().enumerate() {
            for b in &FIELDS[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.wire_path, b.wire_path);
            }
        }
    }

    #[test]
    fn test_create_only_fields() {
        let create_only: Vec<_> = FIELDS
            .iter()
            .filter(|r| !r.is_updatable())
            .map(|r| r.name)
            .collect();
        assert_eq!(create_only, vec!["location", "zones", "subnetId", "staticIp"]);
    }

    #[test]
    fn test_scalar_rules_evaluated_before_mappings() {
        let comparisons: Vec<_> = updatable_rules().map(|r| r.comparison).collect();
        let mut sorted = comparisons.clone();
        sorted.sort();
        assert_eq!(comparisons, sorted);
        assert_eq!(comparisons.last(), Some(&Comparison::Mapping));
    }

    #[test]
    fn test_comparison_matches_drift_fn() {
        // Only a mapping treats an absent observed value as empty.
        let absent = ResourceType {
            properties: Some(Properties::default()),
            ..Default::default()
        };
        for rule in updatable_rules() {
            let empty = match (rule.comparison, rule.name) {
                (Comparison::Mapping, _) => json!({}),
                (_, "sku.name" | "sku.family" | "minimumTlsVersion") => json!(""),
                (_, "sku.capacity" | "shardCount") => json!(0),
                (_, "enableNonSslPort") => json!(false),
                (_, name) => panic!("no empty value for {name}"),
            };
            let desired = desired_with(rule.name, empty);
            assert_eq!(
                rule.drifted(&desired, &absent),
                rule.comparison != Comparison::Mapping,
                "{} is labeled {:?}",
                rule.name,
                rule.comparison
            );
        }
    }

    #[test]
    fn test_ordered_rules_are_create_only() {
        for rule in FIELDS.iter().filter(|r| r.comparison == Comparison::Ordered) {
            assert!(!rule.is_updatable(), "{}", rule.name);
        }
    }

    #[test]
    fn test_location_and_sku_never_backfilled() {
        for name in ["location", "sku.name", "sku.family", "sku.capacity"] {
            assert!(rule(name).unwrap().backfill.is_none(), "{name}");
        }
    }

    #[test]
    fn test_differs() {
        assert!(!differs::<i32>(None, Some(&3)));
        assert!(!differs(Some(&3), Some(&3)));
        assert!(differs(Some(&3), Some(&5)));
        assert!(differs(Some(&3), None));
    }

    #[test]
    fn test_map_differs_treats_missing_observed_as_empty() {
        let empty = BTreeMap::new();
        let one = BTreeMap::from([("a".to_string(), "1".to_string())]);
        assert!(!map_differs(Some(&empty), None));
        assert!(map_differs(Some(&one), None));
        assert!(map_differs(Some(&empty), Some(&one)));
        assert!(!map_differs(None, Some(&one)));
    }

    #[test]
    fn test_fill() {
        let mut unset: Option<String> = None;
        assert!(!fill(&mut unset, None));
        assert!(!fill(&mut unset, Some(&String::new())));
        assert!(unset.is_none());
        assert!(fill(&mut unset, Some(&"1.2".to_string())));
        assert_eq!(unset.as_deref(), Some("1.2"));

        let mut set = Some(3);
        assert!(!fill(&mut set, Some(&5)));
        assert_eq!(set, Some(3));

        let mut flag: Option<bool> = None;
        assert!(fill(&mut flag, Some(&false)));
        assert_eq!(flag, Some(false));
    }
}
