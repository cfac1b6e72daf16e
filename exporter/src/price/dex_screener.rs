use super::{
    FetchedPrices,
    PriceFetcher,
};
use crate::{
    client::RemoteClient,
    types::DexScreenerResponse,
};
use cosmos_validators_exporter_config::{
    Chain,
    Config,
    DenomInfo,
    PriceSource,
};
use futures::future::join_all;
use std::{
    future::Future,
    pin::Pin,
};

/// Prices each denom from the first pair DexScreener knows for it. One call per denom.
pub struct DexScreener {
    base_url: String,
    client: RemoteClient,
}

impl DexScreener {
    pub fn new(config: &Config, client: RemoteClient) -> Self {
        Self {
            base_url: config.dex_screener.base_url().to_string(),
            client,
        }
    }

    async fn fetch_denom(&self, chain: &Chain, denom: &DenomInfo) -> FetchedPrices {
        let mut fetched = FetchedPrices::default();
        let Some((chain_id, pair)) = denom.dex_screener() else {
            return fetched;
        };

        let url = format!("{}/pairs/{chain_id}/{pair}", self.base_url);
        let (result, info) = self.client.get::<DexScreenerResponse>(&chain.name, url).await;
        fetched.queries.push(info);

        let price = result
            .ok()
            .and_then(|response| response.pairs)
            .and_then(|pairs| pairs.into_iter().next())
            .and_then(|pair| pair.price_usd);
        match price {
            Some(price) => {
                fetched.prices.insert(denom.denom.clone(), price);
            }
            None => debug!(chain = %chain.name, denom = %denom.denom, "DexScreener returned no price"),
        }

        fetched
    }
}

impl PriceFetcher for DexScreener {
    fn source(&self) -> PriceSource {
        PriceSource::DexScreener
    }

    fn fetch<'a>(
        &'a self,
        chain: &'a Chain,
        denoms: &'a [&'a DenomInfo],
    ) -> Pin<Box<dyn Future<Output = FetchedPrices> + Send + 'a>> {
        Box::pin(async move {
            join_all(denoms.iter().map(|denom| self.fetch_denom(chain, denom)))
                .await
                .into_iter()
                .fold(FetchedPrices::default(), |mut acc, fetched| {
                    acc.prices.extend(fetched.prices);
                    acc.queries.extend(fetched.queries);
                    acc
                })
        })
    }
}
