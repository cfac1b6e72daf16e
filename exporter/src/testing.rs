use crate::{
    client::RemoteClient,
    metrics::{
        Metric,
        MetricName,
    },
};
use cosmos_validators_exporter_config::{
    Chain,
    Config,
    DenomInfo,
    Validator,
};
use std::{
    collections::HashMap,
    sync::Arc,
    time::Duration,
};

/// A chain with a single fully configured validator `valoper` (wallet `wallet`, consensus
/// address `valcons`) and one `uatom` denom priced by coingecko id `cosmos`.
pub(crate) fn chain(name: &str, endpoint: &str) -> Chain {
    Chain {
        name: name.to_string(),
        lcd_endpoint: endpoint.to_string(),
        base_denom: "uatom".to_string(),
        denoms: vec![DenomInfo {
            denom: "uatom".to_string(),
            display_denom: "atom".to_string(),
            denom_coefficient: 1_000_000,
            coingecko_currency: Some("cosmos".to_string()),
            dex_screener_chain_id: None,
            dex_screener_pair: None,
        }],
        validators: vec![Validator {
            address: "valoper".to_string(),
            wallet: Some("wallet".to_string()),
            consensus_address: Some("valcons".to_string()),
        }],
        queries: HashMap::new(),
    }
}

pub(crate) fn config(chains: Vec<Chain>) -> Arc<Config> {
    let mut config = Config::from_toml_str("").expect("default config");
    config.chains = chains;
    Arc::new(config)
}

pub(crate) fn client() -> RemoteClient {
    RemoteClient::new(Duration::from_secs(2)).expect("http client")
}

pub(crate) fn find<'a>(metrics: &'a [Metric], name: MetricName) -> Vec<&'a Metric> {
    metrics.iter().filter(|metric| metric.name == name).collect()
}
