//! # Cosmos validators exporter core
//!
//! Polls the REST (LCD) endpoints of Cosmos-SDK chains and price services and turns the answers
//! into a Prometheus snapshot.
//!
//! - **`client`**: single JSON GET calls with timing, producing a `QueryInfo` per call
//! - **`lcd`**: the LCD queries, gated per chain by the configured `queries` switches
//! - **`collectors`**: one collector per data category, plus the `Orchestrator` that runs them
//!   all and renders the result
//! - **`price`**: Coingecko and DexScreener price lookups
//! - **`metrics`**: metric names, labeled observations and the per-scrape registry

#[macro_use]
extern crate tracing;

pub mod client;
pub mod collectors;
pub mod lcd;
pub mod metrics;
pub mod price;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::{
    QueryError,
    QueryInfo,
    RemoteClient,
};
pub use collectors::{
    Collector,
    CollectorOutput,
    Orchestrator,
    ScrapeResult,
};
pub use metrics::{
    Metric,
    MetricName,
    MetricsRegistry,
    TEXT_FORMAT,
};
