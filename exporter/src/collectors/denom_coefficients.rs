use super::collector::{
    Collector,
    CollectorOutput,
};
use crate::metrics::{
    Metric,
    MetricName,
};
use cosmos_validators_exporter_config::Config;
use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
};

/// Exports the configured denoms as metrics so dashboards can convert amounts. Does no queries.
pub struct DenomCoefficientsCollector {
    config: Arc<Config>,
}

impl DenomCoefficientsCollector {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn metrics(&self) -> Vec<Metric> {
        let mut metrics = Vec::new();
        for chain in &self.config.chains {
            metrics.push(
                Metric::new(MetricName::BaseDenom, 1.0)
                    .label("chain", &chain.name)
                    .label("denom", &chain.base_denom),
            );

            for denom in &chain.denoms {
                metrics.push(
                    Metric::new(MetricName::DenomCoefficient, denom.denom_coefficient as f64)
                        .label("chain", &chain.name)
                        .label("denom", &denom.denom)
                        .label("display_denom", &denom.display_denom),
                );
            }
        }
        metrics
    }
}

impl Collector for DenomCoefficientsCollector {
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>> {
        Box::pin(async move {
            CollectorOutput {
                metrics: self.metrics(),
                queries: Vec::new(),
            }
        })
    }

    fn name(&self) -> &'static str {
        "denom-coefficients"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        chain,
        config,
        find,
    };

    #[tokio::test]
    async fn exports_configured_denoms() {
        let mut cosmos = chain("cosmos", "http://127.0.0.1:9");
        cosmos.denoms[0].denom_coefficient = 1_000;
        let output = DenomCoefficientsCollector::new(config(vec![cosmos]))
            .collect()
            .await;

        assert!(output.queries.is_empty());

        let coefficients = find(&output.metrics, MetricName::DenomCoefficient);
        assert_eq!(coefficients.len(), 1);
        assert_eq!(coefficients[0].value, 1_000.0);
        assert_eq!(coefficients[0].label_value("display_denom"), Some("atom"));

        let base = find(&output.metrics, MetricName::BaseDenom);
        assert_eq!(base[0].label_value("denom"), Some("uatom"));
        assert_eq!(base[0].value, 1.0);
    }
}
