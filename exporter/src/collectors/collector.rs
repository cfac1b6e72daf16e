use crate::{
    client::QueryInfo,
    lcd::Query,
    metrics::Metric,
};
use cosmos_validators_exporter_config::{
    Chain,
    Validator,
};
use futures::future::join_all;
use std::{
    future::Future,
    pin::Pin,
};

/// One category of data collection across every configured chain.
pub trait Collector: Send + Sync {
    /// Queries everything this collector is responsible for.
    ///
    /// Never fails: upstream errors show up as failed [`QueryInfo`]s and missing metrics.
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>>;

    /// Get the name of this collector
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectorOutput {
    pub metrics: Vec<Metric>,
    pub queries: Vec<QueryInfo>,
}

impl CollectorOutput {
    pub fn push(&mut self, metric: Metric) {
        self.metrics.push(metric);
    }

    pub fn extend(&mut self, other: CollectorOutput) {
        self.metrics.extend(other.metrics);
        self.queries.extend(other.queries);
    }

    /// Keeps the query's [`QueryInfo`] and returns the payload if the call succeeded.
    pub(crate) fn record<T>(&mut self, query: Query<T>) -> Option<T> {
        let (result, info) = query?;
        self.queries.push(info);
        result.ok()
    }
}

impl FromIterator<CollectorOutput> for CollectorOutput {
    fn from_iter<I: IntoIterator<Item = CollectorOutput>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut acc, output| {
            acc.extend(output);
            acc
        })
    }
}

/// Runs `f` concurrently for every chain.
pub(crate) async fn for_each_chain<'a, F, Fut>(chains: &'a [Chain], f: F) -> CollectorOutput
where
    F: Fn(&'a Chain) -> Fut,
    Fut: Future<Output = CollectorOutput>,
{
    join_all(chains.iter().map(f)).await.into_iter().collect()
}

/// Runs `f` concurrently for every validator of every chain.
pub(crate) async fn for_each_validator<'a, F, Fut>(chains: &'a [Chain], f: F) -> CollectorOutput
where
    F: Fn(&'a Chain, &'a Validator) -> Fut,
    Fut: Future<Output = CollectorOutput>,
{
    let targets = chains
        .iter()
        .flat_map(|chain| chain.validators.iter().map(move |validator| (chain, validator)));

    join_all(targets.map(|(chain, validator)| f(chain, validator)))
        .await
        .into_iter()
        .collect()
}
