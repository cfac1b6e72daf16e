use super::collector::{
    Collector,
    CollectorOutput,
};
use crate::metrics::{
    Metric,
    MetricName,
};
use std::{
    future::Future,
    pin::Pin,
    time::{
        SystemTime,
        UNIX_EPOCH,
    },
};

/// Reports when the process was started.
pub struct UptimeCollector {
    started_at: SystemTime,
}

impl UptimeCollector {
    pub fn new(started_at: SystemTime) -> Self {
        Self { started_at }
    }

    fn start_time(&self) -> f64 {
        self.started_at
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64())
            .unwrap_or_default()
    }
}

impl Collector for UptimeCollector {
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>> {
        Box::pin(async move {
            let mut output = CollectorOutput::default();
            output.push(Metric::new(MetricName::StartTime, self.start_time()));
            output
        })
    }

    fn name(&self) -> &'static str {
        "uptime"
    }
}
