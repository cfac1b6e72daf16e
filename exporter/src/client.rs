use serde::de::DeserializeOwned;
use std::time::{
    Duration,
    Instant,
};

pub const USER_AGENT: &str = "cosmos-validators-exporter";

/// Diagnostic record of one outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryInfo {
    pub chain: String,
    pub url: String,
    pub success: bool,
    pub duration: Duration,
}

#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("bad HTTP code: {status}")]
    Status { status: reqwest::StatusCode },
    #[error("could not decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Issues single JSON GET requests against upstream APIs.
///
/// Failures never escape as errors of the caller: every call yields a [`QueryInfo`] next to the
/// decoded payload or the [`QueryError`] that prevented it.
#[derive(Clone, Debug)]
pub struct RemoteClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl RemoteClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, timeout })
    }

    pub async fn get<T: DeserializeOwned>(&self, chain: &str, url: String) -> (Result<T, QueryError>, QueryInfo) {
        trace!(chain, url = %url, "Doing a query...");

        let start = Instant::now();
        let result = self.fetch(&url).await;
        let info = QueryInfo {
            chain: chain.to_string(),
            url,
            success: result.is_ok(),
            duration: start.elapsed(),
        };

        match &result {
            Ok(_) => debug!(chain, url = %info.url, duration = ?info.duration, "Query is finished"),
            Err(error) => warn!(chain, url = %info.url, duration = ?info.duration, %error, "Query failed"),
        }

        (result, info)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, QueryError> {
        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(QueryError::Transport)?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(QueryError::Status { status });
        }

        let body = response.bytes().await.map_err(QueryError::Transport)?;
        serde_json::from_slice(&body).map_err(QueryError::Decode)
    }
}
