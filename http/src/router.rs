use crate::error::AppError;
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use cosmos_validators_exporter_config::Config;
use cosmos_validators_exporter_core::{
    Orchestrator,
    TEXT_FORMAT,
};
use std::{
    sync::Arc,
    time::Instant,
};
use tracing::Instrument as _;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub orchestrator: Arc<Orchestrator>,
    pub build: BuildInfo,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/metrics", get(metrics))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> String {
    let chains: String = state
        .config
        .chains
        .iter()
        .map(|chain| format!("- {}:{}\n", chain.name, chain.base_denom))
        .collect();

    format!(
        "cosmos-validators-exporter {} (commit {})\n\nChains ({}):\n{chains}\nMetrics are served at /metrics\n",
        state.build.version,
        state.build.commit,
        state.config.chains.len()
    )
}

async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let request_id = Uuid::new_v4();

    async move {
        let start = Instant::now();
        let body = state.orchestrator.snapshot().await.map_err(AppError::Render)?;
        info!(duration = ?start.elapsed(), "Request is processed");
        Ok::<_, AppError>(([(header::CONTENT_TYPE, TEXT_FORMAT)], body))
    }
    .instrument(info_span!("metrics", %request_id))
    .await
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{
            to_bytes,
            Body,
        },
        http::{
            Request,
            StatusCode,
        },
    };
    use cosmos_validators_exporter_core::{
        collectors::CommissionCollector,
        Collector,
        RemoteClient,
    };
    use mockito::Server;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tower::ServiceExt as _;

    fn config(endpoint: &str) -> Arc<Config> {
        let config = Config::from_toml_str(&format!(
            r#"
            [[chains]]
            name = "cosmos"
            lcd-endpoint = "{endpoint}"
            base-denom = "uatom"
            validators = [{{ address = "valoper" }}]

            [[chains]]
            name = "osmosis"
            lcd-endpoint = "{endpoint}"
            base-denom = "uosmo"
            validators = [{{ address = "osmovaloper" }}]
            "#
        ))
        .unwrap();
        Arc::new(config)
    }

    fn state(config: Arc<Config>, collectors: Vec<Arc<dyn Collector>>) -> AppState {
        AppState {
            orchestrator: Arc::new(Orchestrator::new(config.clone(), collectors)),
            config,
            build: BuildInfo {
                version: "1.2.3".to_string(),
                commit: "abcdef".to_string(),
            },
        }
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn index_lists_chains() {
        let router = create_router(state(config("http://127.0.0.1:9"), Vec::new()));
        let (status, _, body) = get(router, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("cosmos-validators-exporter 1.2.3 (commit abcdef)"), "{body}");
        assert!(body.contains("Chains (2):"), "{body}");
        assert!(body.contains("- cosmos:uatom\n- osmosis:uosmo\n"), "{body}");
        assert!(body.contains("/metrics"), "{body}");
    }

    #[tokio::test]
    async fn healthz_answers_ok() {
        let router = create_router(state(config("http://127.0.0.1:9"), Vec::new()));
        assert_eq!(get(router, "/healthz").await.2, "ok");
    }

    #[tokio::test]
    async fn metrics_survive_upstream_errors() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let config = config(&server.url());
        let client = RemoteClient::new(Duration::from_secs(2)).unwrap();
        let collectors: Vec<Arc<dyn Collector>> = vec![Arc::new(CommissionCollector::new(config.clone(), client))];
        let router = create_router(state(config, collectors));

        let (status, content_type, body) = get(router, "/metrics").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(TEXT_FORMAT));
        assert!(!body.contains("cosmos_validators_exporter_commission{"), "{body}");
        assert!(body.contains(r#"cosmos_validators_exporter_queries_error{chain="cosmos"} 1"#), "{body}");
        assert!(body.contains(r#"cosmos_validators_exporter_queries_error{chain="osmosis"} 1"#), "{body}");
    }

    #[tokio::test]
    async fn unknown_routes_are_not_found() {
        let router = create_router(state(config("http://127.0.0.1:9"), Vec::new()));
        assert_eq!(get(router, "/nope").await.0, StatusCode::NOT_FOUND);
    }
}
