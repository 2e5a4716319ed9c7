//! Custom Resource Definitions (CRDs) for redis-reconciler.
//!
//! - `Redis`: a managed Redis cache whose parameters are reconciled against
//!   the provider's live resource

mod redis;

pub use redis::*;
