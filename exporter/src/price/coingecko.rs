use super::{
    FetchedPrices,
    PriceFetcher,
};
use crate::{
    client::RemoteClient,
    types::CoingeckoResponse,
};
use cosmos_validators_exporter_config::{
    Chain,
    Config,
    DenomInfo,
    PriceSource,
};
use std::{
    collections::BTreeSet,
    future::Future,
    pin::Pin,
};

const VS_CURRENCY: &str = "usd";

/// Prices every denom of a chain with a single `/simple/price` call.
pub struct Coingecko {
    base_url: String,
    client: RemoteClient,
}

impl Coingecko {
    pub fn new(config: &Config, client: RemoteClient) -> Self {
        Self {
            base_url: config.coingecko.base_url().to_string(),
            client,
        }
    }

    async fn fetch_prices(&self, chain: &Chain, denoms: &[&DenomInfo]) -> FetchedPrices {
        let mut fetched = FetchedPrices::default();
        let ids: BTreeSet<&str> = denoms
            .iter()
            .filter_map(|denom| denom.coingecko_currency.as_deref())
            .collect();
        if ids.is_empty() {
            return fetched;
        }

        let ids = ids.into_iter().collect::<Vec<_>>().join(",");
        let url = format!("{}/simple/price?ids={ids}&vs_currencies={VS_CURRENCY}", self.base_url);
        let (result, info) = self.client.get::<CoingeckoResponse>(&chain.name, url).await;
        fetched.queries.push(info);

        let Ok(response) = result else {
            return fetched;
        };
        for denom in denoms {
            let price = denom
                .coingecko_currency
                .as_ref()
                .and_then(|id| response.get(id))
                .and_then(|quotes| quotes.get(VS_CURRENCY));
            match price {
                Some(price) => {
                    fetched.prices.insert(denom.denom.clone(), *price);
                }
                None => debug!(chain = %chain.name, denom = %denom.denom, "Coingecko returned no price"),
            }
        }

        fetched
    }
}

impl PriceFetcher for Coingecko {
    fn source(&self) -> PriceSource {
        PriceSource::Coingecko
    }

    fn fetch<'a>(
        &'a self,
        chain: &'a Chain,
        denoms: &'a [&'a DenomInfo],
    ) -> Pin<Box<dyn Future<Output = FetchedPrices> + Send + 'a>> {
        Box::pin(self.fetch_prices(chain, denoms))
    }
}
