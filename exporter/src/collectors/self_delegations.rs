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

/// Amount the validator's own wallet has delegated to it. Validators without a wallet are skipped.
pub struct SelfDelegationsCollector {
    config: Arc<Config>,
    client: RemoteClient,
}

impl SelfDelegationsCollector {
    pub fn new(config: Arc<Config>, client: RemoteClient) -> Self {
        Self { config, client }
    }

    async fn collect_validator(&self, chain: &Chain, validator: &Validator) -> CollectorOutput {
        let mut output = CollectorOutput::default();
        let Some(wallet) = &validator.wallet else {
            return output;
        };
        let lcd = LcdClient::new(chain, &self.client);

        if let Some(response) = output.record(lcd.single_delegation(&validator.address, wallet).await) {
            let balance = response.delegation_response.balance;
            output.push(
                Metric::new(MetricName::SelfDelegated, balance.amount)
                    .label("chain", &chain.name)
                    .label("address", &validator.address)
                    .label("denom", balance.denom),
            );
        }

        output
    }
}

impl Collector for SelfDelegationsCollector {
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>> {
        Box::pin(for_each_validator(&self.config.chains, |chain, validator| {
            self.collect_validator(chain, validator)
        }))
    }

    fn name(&self) -> &'static str {
        "self-delegations"
    }
}
