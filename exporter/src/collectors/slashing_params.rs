use super::collector::{
    for_each_chain,
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
};
use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
};

pub struct SlashingParamsCollector {
    config: Arc<Config>,
    client: RemoteClient,
}

impl SlashingParamsCollector {
    pub fn new(config: Arc<Config>, client: RemoteClient) -> Self {
        Self { config, client }
    }

    async fn collect_chain(&self, chain: &Chain) -> CollectorOutput {
        let mut output = CollectorOutput::default();
        let lcd = LcdClient::new(chain, &self.client);

        if let Some(response) = output.record(lcd.slashing_params().await) {
            output.push(
                Metric::new(MetricName::MissedBlocksWindow, response.params.signed_blocks_window as f64)
                    .label("chain", &chain.name),
            );
            output.push(
                Metric::new(MetricName::MinSignedBlocksPerWindow, response.params.min_signed_per_window)
                    .label("chain", &chain.name),
            );
        }

        output
    }
}

impl Collector for SlashingParamsCollector {
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>> {
        Box::pin(for_each_chain(&self.config.chains, |chain| self.collect_chain(chain)))
    }

    fn name(&self) -> &'static str {
        "slashing-params"
    }
}
