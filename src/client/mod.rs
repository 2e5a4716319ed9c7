//! Provider-side data model.
//!
//! Types in this module are shaped like the provider's management API bodies.
//! The reconciler reads [`ResourceType`] and produces [`CreateParameters`] or
//! [`UpdateParameters`]; sending them is left to the caller's API client.

pub mod types;

pub use types::{
    CreateParameters, CreateProperties, LinkedServer, Properties, ResourceType, Sku,
    UpdateParameters, UpdateProperties,
};
