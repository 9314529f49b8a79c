//! HTTP boundary
//!
//! Builds the axum router, wires CORS and request tracing, and runs the
//! serve loop. Handlers are pure: each one returns a fresh KPI snapshot
//! and shares no state with any other request, so no synchronization is
//! needed anywhere in this module.

use std::net::SocketAddr;

use axum::{http::HeaderValue, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::kpi::{AllKpis, DailyPnlKpi, DrawdownKpi, EquityKpi, PeriodPnlKpi};

/// Service identifier reported by the health endpoint.
pub const SERVICE_NAME: &str = "kpis-svc";

async fn get_equity_kpi() -> Json<EquityKpi> {
    Json(EquityKpi::snapshot())
}

async fn get_daily_pnl_kpi() -> Json<DailyPnlKpi> {
    Json(DailyPnlKpi::snapshot())
}

async fn get_period_pnl_kpi() -> Json<PeriodPnlKpi> {
    Json(PeriodPnlKpi::snapshot())
}

async fn get_drawdown_kpi() -> Json<DrawdownKpi> {
    Json(DrawdownKpi::snapshot())
}

async fn get_all_kpis() -> Json<AllKpis> {
    Json(AllKpis::snapshot())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// Liveness probe for external orchestration.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "KPIs Service is running",
    })
}

/// CORS: allow only the configured origins, with credentials.
///
/// Methods and headers mirror the request because `allow_credentials(true)`
/// forbids wildcard values.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the service router.
///
/// Pure function of the configuration so tests can drive it in-process
/// without binding a socket.
pub fn build_router(config: &ServiceConfig) -> Router {
    let kpi_routes = Router::new()
        .route("/kpis/equity", get(get_equity_kpi))
        .route("/kpis/daily", get(get_daily_pnl_kpi))
        .route("/kpis/period", get(get_period_pnl_kpi))
        .route("/kpis/drawdown", get(get_drawdown_kpi))
        .route("/kpis/all", get(get_all_kpis));

    Router::new()
        .nest("/api/v1", kpi_routes)
        .route("/health", get(health_check))
        .route("/", get(root))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&config.cors_origins))
}

/// Bind the listener and run the server until shutdown.
pub async fn serve(config: &ServiceConfig, addr: SocketAddr) -> Result<(), ServiceError> {
    let app = build_router(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("{} listening on http://{}", SERVICE_NAME, addr);

    axum::serve(listener, app).await?;

    Ok(())
}
