use super::collector::{
    Collector,
    CollectorOutput,
};
use crate::{
    client::QueryInfo,
    metrics::{
        flag,
        Metric,
        MetricName,
    },
};
use cosmos_validators_exporter_config::Config;
use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
};

/// Turns the queries of one scrape into metrics about those queries.
///
/// Built after every other collector has finished, so it never queries anything itself.
pub struct QueriesCollector {
    config: Arc<Config>,
    queries: Vec<QueryInfo>,
}

impl QueriesCollector {
    pub fn new(config: Arc<Config>, queries: Vec<QueryInfo>) -> Self {
        Self { config, queries }
    }

    pub fn metrics(&self) -> Vec<Metric> {
        let mut metrics = Vec::new();

        for chain in &self.config.chains {
            let (total, success) = self
                .queries
                .iter()
                .filter(|query| query.chain == chain.name)
                .fold((0u64, 0u64), |(total, success), query| (total + 1, success + query.success as u64));

            metrics.push(Metric::new(MetricName::QueriesTotal, total as f64).label("chain", &chain.name));
            metrics.push(Metric::new(MetricName::QueriesSuccess, success as f64).label("chain", &chain.name));
            metrics.push(Metric::new(MetricName::QueriesError, (total - success) as f64).label("chain", &chain.name));
        }

        for query in &self.queries {
            metrics.push(
                Metric::new(MetricName::QueryTiming, query.duration.as_secs_f64())
                    .label("chain", &query.chain)
                    .label("url", &query.url),
            );
            metrics.push(
                Metric::new(MetricName::QuerySuccess, flag(query.success))
                    .label("chain", &query.chain)
                    .label("url", &query.url),
            );
        }

        metrics
    }
}

impl Collector for QueriesCollector {
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>> {
        Box::pin(async move {
            CollectorOutput {
                metrics: self.metrics(),
                queries: Vec::new(),
            }
        })
    }

    fn name(&self) -> &'static str {
        "queries"
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
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn query(chain: &str, url: &str, success: bool, millis: u64) -> QueryInfo {
        QueryInfo {
            chain: chain.to_string(),
            url: url.to_string(),
            success,
            duration: Duration::from_millis(millis),
        }
    }

    fn values(metrics: &[Metric], name: MetricName) -> Vec<(String, f64)> {
        find(metrics, name)
            .into_iter()
            .map(|metric| (metric.label_value("chain").unwrap_or_default().to_string(), metric.value))
            .collect()
    }

    #[test]
    fn counts_queries_per_chain() {
        let config = config(vec![
            chain("cosmos", "http://127.0.0.1:9"),
            chain("osmosis", "http://127.0.0.1:9"),
            chain("juno", "http://127.0.0.1:9"),
        ]);
        let metrics = QueriesCollector::new(
            config,
            vec![
                query("cosmos", "http://a/1", true, 10),
                query("cosmos", "http://a/2", false, 20),
                query("osmosis", "http://b/1", true, 30),
            ],
        )
        .metrics();

        let expected_total = vec![("cosmos".to_string(), 2.0), ("osmosis".to_string(), 1.0), ("juno".to_string(), 0.0)];
        assert_eq!(values(&metrics, MetricName::QueriesTotal), expected_total);
        assert_eq!(
            values(&metrics, MetricName::QueriesError),
            vec![("cosmos".to_string(), 1.0), ("osmosis".to_string(), 0.0), ("juno".to_string(), 0.0)]
        );
        assert_eq!(
            values(&metrics, MetricName::QueriesSuccess),
            vec![("cosmos".to_string(), 1.0), ("osmosis".to_string(), 1.0), ("juno".to_string(), 0.0)]
        );
    }

    #[test]
    fn reports_every_query() {
        let metrics = QueriesCollector::new(
            config(vec![chain("cosmos", "http://127.0.0.1:9")]),
            vec![query("cosmos", "http://a/1", false, 1500)],
        )
        .metrics();

        let timing = find(&metrics, MetricName::QueryTiming);
        assert_eq!(timing.len(), 1);
        assert_eq!(timing[0].value, 1.5);
        assert_eq!(timing[0].label_value("url"), Some("http://a/1"));
        assert_eq!(find(&metrics, MetricName::QuerySuccess)[0].value, 0.0);
    }
}
