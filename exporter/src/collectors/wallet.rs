use super::collector::{
    for_each_validator,
    Collector,
    CollectorOutput,
};
use crate::{
    client::RemoteClient,
    lcd::LcdClient,
    metrics::{
        Metric,
        MetricName,
    },
};
use cosmos_validators_exporter_config::{
    Chain,
    Config,
    Validator,
};
use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
};

/// Bank balances of the validator's wallet.
pub struct WalletCollector {
    config: Arc<Config>,
    client: RemoteClient,
}

impl WalletCollector {
    pub fn new(config: Arc<Config>, client: RemoteClient) -> Self {
        Self { config, client }
    }

    async fn collect_validator(&self, chain: &Chain, validator: &Validator) -> CollectorOutput {
        let mut output = CollectorOutput::default();
        let Some(wallet) = &validator.wallet else {
            return output;
        };
        let lcd = LcdClient::new(chain, &self.client);

        if let Some(response) = output.record(lcd.wallet_balance(wallet).await) {
            for balance in response.balances {
                output.push(
                    Metric::new(MetricName::WalletBalance, balance.amount)
                        .label("chain", &chain.name)
                        .label("address", &validator.address)
                        .label("wallet", wallet)
                        .label("denom", balance.denom),
                );
            }
        }

        output
    }
}

impl Collector for WalletCollector {
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>> {
        Box::pin(for_each_validator(&self.config.chains, |chain, validator| {
            self.collect_validator(chain, validator)
        }))
    }

    fn name(&self) -> &'static str {
        "wallet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        chain,
        client,
        config,
    };
    use mockito::Server;

    #[tokio::test]
    async fn exports_balances() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/cosmos/bank/v1beta1/balances/wallet")
            .with_body(r#"{"balances": [{"denom": "uatom", "amount": "99"}], "pagination": {"total": "1"}}"#)
            .create_async()
            .await;

        let output = WalletCollector::new(config(vec![chain("cosmos", &server.url())]), client())
            .collect()
            .await;

        assert_eq!(output.metrics.len(), 1);
        let metric = &output.metrics[0];
        assert_eq!(metric.name, MetricName::WalletBalance);
        assert_eq!(metric.value, 99.0);
        assert_eq!(metric.label_value("wallet"), Some("wallet"));
        assert_eq!(metric.label_value("address"), Some("valoper"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_reported() {
        let output = WalletCollector::new(config(vec![chain("cosmos", "http://127.0.0.1:9")]), client())
            .collect()
            .await;

        assert!(output.metrics.is_empty());
        assert_eq!(output.queries.len(), 1);
        assert!(!output.queries[0].success);
        assert_eq!(output.queries[0].url, "http://127.0.0.1:9/cosmos/bank/v1beta1/balances/wallet");
    }
}
