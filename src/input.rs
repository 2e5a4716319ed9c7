//! Loading desired parameters and observed resources from JSON documents.

use std::path::Path;

use kube::ResourceExt;
use tracing::debug;

use crate::client::ResourceType;
use crate::controller::error::{Error, Result};
use crate::crd::{Redis, RedisParameters};

/// Parse desired parameters from either a full `Redis` manifest or a bare
/// `forProvider` object.
pub fn parse_desired(json: &str) -> Result<RedisParameters> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    if value.get("spec").is_some() {
        let redis: Redis = serde_json::from_value(value)?;
        debug!(name = %redis.name_any(), "Parsed Redis manifest");
        Ok(redis.spec.for_provider)
    } else {
        Ok(serde_json::from_value(value)?)
    }
}

/// Parse a provider resource body.
pub fn parse_observed(json: &str) -> Result<ResourceType> {
    Ok(serde_json::from_str(json)?)
}

/// Read desired parameters from a file. See [`parse_desired`].
pub fn read_desired(path: &Path) -> Result<RedisParameters> {
    parse_desired(&read(path)?)
}

/// Read a provider resource body from a file.
pub fn read_observed(path: &Path) -> Result<ResourceType> {
    parse_observed(&read(path)?)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
