use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use hyper::Server;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::app::ReportUseCase;
use crate::constants::{REPORT_ROUTE, SERVICE_NAME};
use crate::metrics::ReportMetrics;

#[derive(Clone)]
pub struct AppState {
    pub report: Arc<ReportUseCase>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Year-grouped report, or a 500 naming the dataset that could not be fetched.
async fn processed_benefits(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    match state.report.produce_report().await {
        Ok(groups) => {
            ReportMetrics::record_report_produced(&groups, started.elapsed().as_secs_f64());
            info!("Report produced with {} year groups", groups.len());
            Json(groups).into_response()
        }
        Err(e) => {
            ReportMetrics::record_report_failed(e.dataset.as_str());
            error!("Report failed: {}", e);
            let body = ErrorBody {
                error: format!("Error processing benefits: {e}"),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

async fn metrics_text() -> Response {
    match crate::metrics::render() {
        Some(body) => ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder not installed").into_response(),
    }
}

/// Builds the router with every route of the service.
pub fn create_server(report: Arc<ReportUseCase>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route(REPORT_ROUTE, get(processed_benefits))
        .route("/metrics", get(metrics_text))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(AppState { report })
}

/// Serve on `0.0.0.0:port` until Ctrl-C.
pub async fn start_server(report: Arc<ReportUseCase>, port: u16) -> Result<(), hyper::Error> {
    let app = create_server(report);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("HTTP server listening on http://{addr}");
    info!("Report: http://localhost:{port}{REPORT_ROUTE}");

    Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
