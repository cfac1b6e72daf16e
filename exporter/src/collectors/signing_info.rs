use super::collector::{
    for_each_validator,
    Collector,
    CollectorOutput,
};
use crate::{
    client::RemoteClient,
    lcd::LcdClient,
    metrics::{
        flag,
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

/// Missed blocks and tombstone state, looked up by consensus address.
pub struct SigningInfoCollector {
    config: Arc<Config>,
    client: RemoteClient,
}

impl SigningInfoCollector {
    pub fn new(config: Arc<Config>, client: RemoteClient) -> Self {
        Self { config, client }
    }

    async fn collect_validator(&self, chain: &Chain, validator: &Validator) -> CollectorOutput {
        let mut output = CollectorOutput::default();
        let Some(consensus_address) = &validator.consensus_address else {
            return output;
        };
        let lcd = LcdClient::new(chain, &self.client);

        if let Some(response) = output.record(lcd.signing_info(consensus_address).await) {
            let info = response.val_signing_info;
            output.push(
                Metric::new(MetricName::MissedBlocks, info.missed_blocks_counter as f64)
                    .label("chain", &chain.name)
                    .label("address", &validator.address),
            );
            output.push(
                Metric::new(MetricName::Tombstoned, flag(info.tombstoned))
                    .label("chain", &chain.name)
                    .label("address", &validator.address),
            );
        }

        output
    }
}

impl Collector for SigningInfoCollector {
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>> {
        Box::pin(for_each_validator(&self.config.chains, |chain, validator| {
            self.collect_validator(chain, validator)
        }))
    }

    fn name(&self) -> &'static str {
        "signing-info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        chain,
        client,
        config,
        find,
    };
    use mockito::Server;

    #[tokio::test]
    async fn exports_missed_blocks_and_tombstone() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/cosmos/slashing/v1beta1/signing_infos/valcons")
            .with_body(
                r#"{"val_signing_info": {
                    "address": "valcons",
                    "start_height": "0",
                    "index_offset": "100",
                    "jailed_until": "1970-01-01T00:00:00Z",
                    "tombstoned": false,
                    "missed_blocks_counter": "7"
                }}"#,
            )
            .create_async()
            .await;

        let output = SigningInfoCollector::new(config(vec![chain("cosmos", &server.url())]), client())
            .collect()
            .await;

        assert_eq!(find(&output.metrics, MetricName::MissedBlocks)[0].value, 7.0);
        assert_eq!(find(&output.metrics, MetricName::Tombstoned)[0].value, 0.0);
        assert_eq!(output.queries.len(), 1);
    }

    #[tokio::test]
    async fn validators_without_consensus_address_are_skipped() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let mut chain = chain("cosmos", &server.url());
        chain.validators[0].consensus_address = None;
        let output = SigningInfoCollector::new(config(vec![chain]), client())
            .collect()
            .await;

        assert!(output.metrics.is_empty());
        assert!(output.queries.is_empty());
        mock.assert_async().await;
    }
}
