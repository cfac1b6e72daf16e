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

/// Unclaimed validator commission, one metric per denom.
pub struct CommissionCollector {
    config: Arc<Config>,
    client: RemoteClient,
}

impl CommissionCollector {
    pub fn new(config: Arc<Config>, client: RemoteClient) -> Self {
        Self { config, client }
    }

    async fn collect_validator(&self, chain: &Chain, validator: &Validator) -> CollectorOutput {
        let mut output = CollectorOutput::default();
        let lcd = LcdClient::new(chain, &self.client);

        if let Some(response) = output.record(lcd.commission(&validator.address).await) {
            for balance in response.commission.commission {
                output.push(
                    Metric::new(MetricName::Commission, balance.amount)
                        .label("chain", &chain.name)
                        .label("address", &validator.address)
                        .label("denom", balance.denom),
                );
            }
        }

        output
    }
}

impl Collector for CommissionCollector {
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>> {
        Box::pin(for_each_validator(&self.config.chains, |chain, validator| {
            self.collect_validator(chain, validator)
        }))
    }

    fn name(&self) -> &'static str {
        "commission"
    }
}
