//! # Collectors
//!
//! Every collector covers one category of data across all configured chains and returns its
//! metrics together with a [`QueryInfo`](crate::client::QueryInfo) per upstream call.
//!
//! - **Validator scoped**: commission, delegations, unbonds, self-delegation, rewards, wallet,
//!   signing info. One target per configured validator.
//! - **Chain scoped**: validator info and active set, slashing params, prices.
//! - **Static**: denom coefficients and process start time, no queries at all.
//! - **`QueriesCollector`**: built after a scrape from its query infos.
//!
//! The [`Orchestrator`] runs all of them concurrently and renders the result.

pub mod collector;
pub mod orchestrator;

mod commission;
mod delegations;
mod denom_coefficients;
mod price;
mod queries;
mod rewards;
mod self_delegations;
mod signing_info;
mod slashing_params;
mod unbonds;
mod uptime;
mod validator;
mod wallet;

pub use collector::{
    Collector,
    CollectorOutput,
};
pub use commission::CommissionCollector;
pub use delegations::DelegationsCollector;
pub use denom_coefficients::DenomCoefficientsCollector;
pub use orchestrator::{
    Orchestrator,
    ScrapeResult,
};
pub use price::PriceCollector;
pub use queries::QueriesCollector;
pub use rewards::RewardsCollector;
pub use self_delegations::SelfDelegationsCollector;
pub use signing_info::SigningInfoCollector;
pub use slashing_params::SlashingParamsCollector;
pub use unbonds::UnbondsCollector;
pub use uptime::UptimeCollector;
pub use validator::ValidatorCollector;
pub use wallet::WalletCollector;

use crate::client::RemoteClient;
use cosmos_validators_exporter_config::Config;
use std::{
    sync::Arc,
    time::SystemTime,
};

/// The full set of collectors run on every scrape.
pub fn default_collectors(config: &Arc<Config>, client: &RemoteClient, started_at: SystemTime) -> Vec<Arc<dyn Collector>> {
    vec![
        Arc::new(CommissionCollector::new(config.clone(), client.clone())),
        Arc::new(DelegationsCollector::new(config.clone(), client.clone())),
        Arc::new(UnbondsCollector::new(config.clone(), client.clone())),
        Arc::new(SelfDelegationsCollector::new(config.clone(), client.clone())),
        Arc::new(RewardsCollector::new(config.clone(), client.clone())),
        Arc::new(WalletCollector::new(config.clone(), client.clone())),
        Arc::new(ValidatorCollector::new(config.clone(), client.clone())),
        Arc::new(SigningInfoCollector::new(config.clone(), client.clone())),
        Arc::new(SlashingParamsCollector::new(config.clone(), client.clone())),
        Arc::new(DenomCoefficientsCollector::new(config.clone())),
        Arc::new(PriceCollector::new(config.clone(), client.clone())),
        Arc::new(UptimeCollector::new(started_at)),
    ]
}
