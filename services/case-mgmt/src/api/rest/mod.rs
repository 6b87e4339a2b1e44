//! HTTP 路由层
//!
//! 把服务层结果翻译为 HTTP 语义：201/200/204，缺席翻译为 404

pub mod cases;
pub mod clients;
pub mod extract;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use lexcm_adapter_postgres::check_connection;
use lexcm_telemetry::HealthStatus;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use sqlx::PgPool;

use crate::state::AppState;

/// 业务 API 路由
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest("/api/clients/", clients::routes())
        .nest("/api/cases/", cases::routes())
        .with_state(state)
}

/// 运维路由：健康检查和 Prometheus 指标
pub fn ops_routes(pool: PgPool, metrics: PrometheusHandle) -> Router {
    Router::new()
        .route("/health", get(move || health_check(pool.clone())))
        .route("/metrics", get(move || std::future::ready(metrics.render())))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: Vec<ServiceCheck>,
}

#[derive(Debug, Serialize)]
pub struct ServiceCheck {
    pub name: String,
    pub healthy: bool,
}

async fn health_check(pool: PgPool) -> impl IntoResponse {
    let mut status = HealthStatus::new();
    let db = check_connection(&pool).await;
    status.add_check("database", db.is_ok(), db.err().map(|e| e.to_string()));

    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = HealthResponse {
        status: if status.healthy {
            "healthy".to_string()
        } else {
            "unhealthy".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: status
            .checks
            .into_iter()
            .map(|c| ServiceCheck {
                name: c.name,
                healthy: c.healthy,
            })
            .collect(),
    };

    (code, Json(body))
}
