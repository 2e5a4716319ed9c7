//! redis-reconcile - plan a reconcile cycle for a Redis cache offline.
//!
//! Reads the desired parameters (a `Redis` manifest or a bare `forProvider`
//! object) and, optionally, the provider's current view of the cache, then
//! prints the resulting plan as JSON:
//! - the desired parameters after late initialization
//! - which fields were backfilled and which have drifted
//! - the create or update body to send, if any
//! - the status snapshot of the observed cache
//!
//! Nothing is sent to the provider.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;

use redis_reconciler::crd::RedisParameters;
use redis_reconciler::input::{read_desired, read_observed};
use redis_reconciler::{Reconciliation, plan};

/// Log output format
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "redis-reconcile", version, about)]
struct Args {
    /// Desired state: a Redis manifest or forProvider parameters (JSON)
    #[arg(long, short = 'd')]
    desired: PathBuf,

    /// Provider's current view of the cache (JSON). Omit if it does not exist.
    #[arg(long, short = 'o')]
    observed: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t, env = "REDIS_RECONCILE_LOG_FORMAT")]
    log_format: LogFormat,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    desired: &'a RedisParameters,
    #[serde(flatten)]
    reconciliation: Reconciliation,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.log_format)?;

    let mut desired = read_desired(&args.desired)?;
    let observed = args.observed.as_deref().map(read_observed).transpose()?;
    info!(
        desired = %args.desired.display(),
        observed = observed.is_some(),
        "Loaded reconcile inputs"
    );

    let reconciliation = plan(&mut desired, observed.as_ref());
    let report = Report {
        desired: &desired,
        reconciliation,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Initialize the tracing subscriber. Logs go to stderr so stdout carries
/// only the report.
fn init_tracing(format: LogFormat) -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("redis_reconciler=info".parse()?)
        .add_directive("redis_reconcile=info".parse()?);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
    Ok(())
}
