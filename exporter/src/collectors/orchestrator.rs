use super::{
    default_collectors,
    Collector,
    CollectorOutput,
    QueriesCollector,
};
use crate::{
    client::{
        QueryInfo,
        RemoteClient,
    },
    metrics::{
        Metric,
        MetricsRegistry,
    },
};
use cosmos_validators_exporter_config::Config;
use eyre::{
    Context as _,
    Result,
};
use futures::future::join_all;
use std::{
    sync::Arc,
    time::{
        Instant,
        SystemTime,
    },
};

/// Everything gathered by one scrape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrapeResult {
    pub metrics: Vec<Metric>,
    pub queries: Vec<QueryInfo>,
}

impl ScrapeResult {
    pub fn merge(&mut self, output: CollectorOutput) {
        self.metrics.extend(output.metrics);
        self.queries.extend(output.queries);
    }

    pub fn successful_queries(&self) -> usize {
        self.queries.iter().filter(|query| query.success).count()
    }
}

impl FromIterator<CollectorOutput> for ScrapeResult {
    fn from_iter<I: IntoIterator<Item = CollectorOutput>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut acc, output| {
            acc.merge(output);
            acc
        })
    }
}

/// Runs every collector concurrently and turns their outputs into a Prometheus snapshot.
pub struct Orchestrator {
    config: Arc<Config>,
    collectors: Vec<Arc<dyn Collector>>,
}

impl Orchestrator {
    pub fn new(config: Arc<Config>, collectors: Vec<Arc<dyn Collector>>) -> Self {
        Self { config, collectors }
    }

    /// Orchestrator with every collector, sharing one HTTP client.
    pub fn with_default_collectors(config: Arc<Config>, started_at: SystemTime) -> Result<Self> {
        let client = RemoteClient::new(config.timeout()).wrap_err("Could not build HTTP client")?;
        let collectors = default_collectors(&config, &client, started_at);
        Ok(Self::new(config, collectors))
    }

    /// Collects from all collectors at once, one task each.
    ///
    /// A collector that panics is logged and left out; the others are unaffected.
    pub async fn scrape(&self) -> ScrapeResult {
        let (names, tasks): (Vec<&'static str>, Vec<_>) = self
            .collectors
            .iter()
            .map(|collector| {
                let collector = Arc::clone(collector);
                (collector.name(), tokio::spawn(async move { collector.collect().await }))
            })
            .unzip();

        let mut result = ScrapeResult::default();
        for (name, joined) in names.into_iter().zip(join_all(tasks).await) {
            match joined {
                Ok(output) => {
                    debug!(
                        collector = name,
                        metrics = output.metrics.len(),
                        queries = output.queries.len(),
                        "Collector finished"
                    );
                    result.merge(output);
                }
                Err(error) => error!(collector = name, %error, "Collector task failed"),
            }
        }

        result
    }

    /// Scrapes, adds the query meta-metrics and renders everything in the text exposition format.
    pub async fn snapshot(&self) -> Result<String> {
        let start = Instant::now();
        let scrape = self.scrape().await;
        let successful = scrape.successful_queries();
        let total = scrape.queries.len();

        let ScrapeResult { mut metrics, queries } = scrape;
        metrics.extend(QueriesCollector::new(self.config.clone(), queries).metrics());

        let rendered = MetricsRegistry::from_metrics(&metrics)
            .and_then(|registry| registry.render())
            .wrap_err("Could not render metrics")?;

        info!(
            metrics = metrics.len(),
            queries = total,
            successful,
            failed = total - successful,
            duration = ?start.elapsed(),
            "Scrape is finished"
        );
        Ok(rendered)
    }
}
