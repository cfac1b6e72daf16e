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

pub struct UnbondsCollector {
    config: Arc<Config>,
    client: RemoteClient,
}

impl UnbondsCollector {
    pub fn new(config: Arc<Config>, client: RemoteClient) -> Self {
        Self { config, client }
    }

    async fn collect_validator(&self, chain: &Chain, validator: &Validator) -> CollectorOutput {
        let mut output = CollectorOutput::default();
        let lcd = LcdClient::new(chain, &self.client);

        if let Some(response) = output.record(lcd.unbonds_count(&validator.address).await) {
            output.push(
                Metric::new(MetricName::UnbondsCount, response.pagination.total as f64)
                    .label("chain", &chain.name)
                    .label("address", &validator.address),
            );
        }

        output
    }
}

impl Collector for UnbondsCollector {
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>> {
        Box::pin(for_each_validator(&self.config.chains, |chain, validator| {
            self.collect_validator(chain, validator)
        }))
    }

    fn name(&self) -> &'static str {
        "unbonds"
    }
}
