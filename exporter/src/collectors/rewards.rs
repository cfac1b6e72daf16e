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

/// Unclaimed rewards of the validator's self-delegation.
pub struct RewardsCollector {
    config: Arc<Config>,
    client: RemoteClient,
}

impl RewardsCollector {
    pub fn new(config: Arc<Config>, client: RemoteClient) -> Self {
        Self { config, client }
    }

    async fn collect_validator(&self, chain: &Chain, validator: &Validator) -> CollectorOutput {
        let mut output = CollectorOutput::default();
        let Some(wallet) = &validator.wallet else {
            return output;
        };
        let lcd = LcdClient::new(chain, &self.client);

        if let Some(response) = output.record(lcd.delegator_rewards(&validator.address, wallet).await) {
            for balance in response.rewards {
                output.push(
                    Metric::new(MetricName::SelfDelegationRewards, balance.amount)
                        .label("chain", &chain.name)
                        .label("address", &validator.address)
                        .label("denom", balance.denom),
                );
            }
        }

        output
    }
}

impl Collector for RewardsCollector {
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>> {
        Box::pin(for_each_validator(&self.config.chains, |chain, validator| {
            self.collect_validator(chain, validator)
        }))
    }

    fn name(&self) -> &'static str {
        "rewards"
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
    async fn exports_rewards_per_denom() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/cosmos/distribution/v1beta1/delegators/wallet/rewards/valoper")
            .with_body(
                r#"{"rewards": [
                    {"denom": "uatom", "amount": "12.000000000000000000"},
                    {"denom": "uosmo", "amount": "0.500000000000000000"}
                ]}"#,
            )
            .create_async()
            .await;

        let output = RewardsCollector::new(config(vec![chain("cosmos", &server.url())]), client())
            .collect()
            .await;

        let values: Vec<(Option<&str>, f64)> = output
            .metrics
            .iter()
            .map(|metric| (metric.label_value("denom"), metric.value))
            .collect();
        assert_eq!(values, vec![(Some("uatom"), 12.0), (Some("uosmo"), 0.5)]);
        assert_eq!(output.queries.len(), 1);
    }
}
