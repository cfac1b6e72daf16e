//! Denom prices from external services.

mod coingecko;
mod dex_screener;

pub use coingecko::Coingecko;
pub use dex_screener::DexScreener;

use crate::client::{
    QueryInfo,
    RemoteClient,
};
use cosmos_validators_exporter_config::{
    Chain,
    Config,
    DenomInfo,
    PriceSource,
};
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::Arc,
};

/// Prices one source could resolve, keyed by base denom, plus the calls it took.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedPrices {
    pub prices: HashMap<String, f64>,
    pub queries: Vec<QueryInfo>,
}

pub trait PriceFetcher: Send + Sync {
    fn source(&self) -> PriceSource;

    /// Looks up USD prices for `denoms` of `chain`. Every denom passed in supports this source.
    fn fetch<'a>(
        &'a self,
        chain: &'a Chain,
        denoms: &'a [&'a DenomInfo],
    ) -> Pin<Box<dyn Future<Output = FetchedPrices> + Send + 'a>>;
}

/// Fetchers for the configured `price-sources`, in precedence order.
pub fn fetchers(config: &Config, client: &RemoteClient) -> Vec<Arc<dyn PriceFetcher>> {
    config
        .price_sources
        .iter()
        .map(|source| -> Arc<dyn PriceFetcher> {
            match source {
                PriceSource::Coingecko => Arc::new(Coingecko::new(config, client.clone())),
                PriceSource::DexScreener => Arc::new(DexScreener::new(config, client.clone())),
            }
        })
        .collect()
}
