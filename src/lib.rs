#[macro_use]
extern crate tracing;

pub mod args;

pub use args::Args;

use cosmos_validators_exporter_config::{
    Config,
    LogConfig,
};
use cosmos_validators_exporter_core::Orchestrator;
use cosmos_validators_exporter_http::{
    AppState,
    BuildInfo,
};
use eyre::{
    Context as _,
    Result,
};
use std::{
    net::SocketAddr,
    sync::Arc,
    time::SystemTime,
};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};

pub fn init_errors() -> Result<()> {
    color_eyre::install()
}

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .wrap_err_with(|| format!("Invalid log level {:?}", config.level))?;

    let layer = if config.json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .with(tracing_error::ErrorLayer::default())
        .try_init()
        .wrap_err("Could not initialize logging")
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: option_env!("GIT_COMMIT").unwrap_or("unknown").to_string(),
    }
}

pub async fn run(config: Config) -> Result<()> {
    let listen_address: SocketAddr = config
        .listen_address
        .parse()
        .wrap_err_with(|| format!("Invalid listen address {:?}", config.listen_address))?;

    let config = Arc::new(config);
    let orchestrator = Orchestrator::with_default_collectors(config.clone(), SystemTime::now())?;
    let build = build_info();

    info!(
        version = %build.version,
        commit = %build.commit,
        chains = config.chains.len(),
        "Starting cosmos-validators-exporter"
    );

    let state = AppState {
        config,
        orchestrator: Arc::new(orchestrator),
        build,
    };
    cosmos_validators_exporter_http::serve(state, listen_address).await
}
