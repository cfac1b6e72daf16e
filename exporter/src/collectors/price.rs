use super::collector::{
    for_each_chain,
    Collector,
    CollectorOutput,
};
use crate::{
    client::RemoteClient,
    metrics::{
        Metric,
        MetricName,
    },
    price::{
        self,
        PriceFetcher,
    },
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

/// USD price of every configured denom, taken from the first source that knows it.
pub struct PriceCollector {
    config: Arc<Config>,
    fetchers: Vec<Arc<dyn PriceFetcher>>,
}

impl PriceCollector {
    pub fn new(config: Arc<Config>, client: RemoteClient) -> Self {
        let fetchers = price::fetchers(&config, &client);
        Self::with_fetchers(config, fetchers)
    }

    /// `fetchers` are tried in the given order.
    pub fn with_fetchers(config: Arc<Config>, fetchers: Vec<Arc<dyn PriceFetcher>>) -> Self {
        Self { config, fetchers }
    }

    async fn collect_chain(&self, chain: &Chain) -> CollectorOutput {
        let mut output = CollectorOutput::default();
        let mut resolved: HashMap<String, (f64, PriceSource)> = HashMap::new();

        for fetcher in &self.fetchers {
            let source = fetcher.source();
            if !chain.is_enabled(source.query_kind()) {
                trace!(chain = %chain.name, %source, "Price source is disabled, skipping");
                continue;
            }

            let pending: Vec<&DenomInfo> = chain
                .denoms
                .iter()
                .filter(|denom| denom.supports(source) && !resolved.contains_key(&denom.denom))
                .collect();
            if pending.is_empty() {
                continue;
            }

            let fetched = fetcher.fetch(chain, &pending).await;
            output.queries.extend(fetched.queries);
            for (denom, price) in fetched.prices {
                resolved.entry(denom).or_insert((price, source));
            }
        }

        for denom in &chain.denoms {
            if let Some((price, source)) = resolved.get(&denom.denom) {
                output.push(
                    Metric::new(MetricName::Price, *price)
                        .label("chain", &chain.name)
                        .label("denom", &denom.denom)
                        .label("display_denom", &denom.display_denom)
                        .label("source", source.as_str()),
                );
            }
        }

        output
    }
}

impl Collector for PriceCollector {
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>> {
        Box::pin(for_each_chain(&self.config.chains, |chain| self.collect_chain(chain)))
    }

    fn name(&self) -> &'static str {
        "price"
    }
}
