use super::{
    Metric,
    MetricName,
};
use eyre::Result;
use prometheus::{
    Encoder as _,
    GaugeVec,
    Opts,
    Registry,
    TextEncoder,
};
use std::collections::{
    hash_map::Entry,
    HashMap,
};

pub use prometheus::TEXT_FORMAT;

/// Prometheus registry holding a single scrape's metrics.
///
/// Built from scratch for every request so that series of a previous scrape never leak into
/// the next one.
pub struct MetricsRegistry {
    registry: Registry,
}

struct Family {
    label_names: Vec<&'static str>,
    gauge: GaugeVec,
}

impl MetricsRegistry {
    pub fn from_metrics(metrics: &[Metric]) -> Result<Self> {
        let registry = Registry::new();
        let mut families: HashMap<MetricName, Family> = HashMap::new();

        for metric in metrics {
            let label_names: Vec<&'static str> = metric.labels.keys().copied().collect();

            let family = match families.entry(metric.name) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let gauge = GaugeVec::new(Opts::new(metric.name.full_name(), metric.name.help()), &label_names)?;
                    registry.register(Box::new(gauge.clone()))?;
                    entry.insert(Family {
                        label_names: label_names.clone(),
                        gauge,
                    })
                }
            };

            if family.label_names != label_names {
                warn!(
                    metric = metric.name.as_str(),
                    expected = ?family.label_names,
                    got = ?label_names,
                    "Metric has a different label set than the first one of its name, skipping"
                );
                continue;
            }

            let label_values: Vec<&str> = metric.labels.values().map(String::as_str).collect();
            family.gauge.with_label_values(label_values.as_slice()).set(metric.value);
        }

        Ok(Self { registry })
    }

    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
