//! Case Management Service - 服务入口
//!
//! 使用 lexcm-bootstrap 统一启动模式

use std::net::SocketAddr;
use std::sync::Arc;

use case_mgmt::api::rest;
use case_mgmt::application::services::{CaseService, ClientService};
use case_mgmt::domain::repositories::{CaseRepository, ClientRepository};
use case_mgmt::infrastructure::migrations;
use case_mgmt::infrastructure::persistence::{PostgresCaseRepository, PostgresClientRepository};
use case_mgmt::state::AppState;
use lexcm_adapter_postgres::MigrationManager;
use lexcm_bootstrap::{Infrastructure, init_runtime, shutdown_signal};
use lexcm_config::AppConfig;
use lexcm_errors::AppError;
use lexcm_telemetry::init_metrics;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load("config")?;
    init_runtime(&config);

    let infra = Infrastructure::from_config(config).await?;
    let pool = infra.postgres_pool();

    // 启动时自动建表
    let result = MigrationManager::new(pool.clone())
        .migrate(&migrations::all())
        .await?;
    if !result.is_success() {
        let detail = result
            .errors
            .iter()
            .map(|e| format!("{} ({})", e.name, e.error))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Box::new(AppError::database(format!(
            "Migrations failed: {}",
            detail
        ))) as Box<dyn std::error::Error>);
    }
    info!(
        applied = result.applied.len(),
        skipped = result.skipped.len(),
        "Database schema ready"
    );

    let metrics_handle = init_metrics();

    // 组装 Repositories（依赖 domain trait）和应用服务
    let client_repo: Arc<dyn ClientRepository> =
        Arc::new(PostgresClientRepository::new(pool.clone()));
    let case_repo: Arc<dyn CaseRepository> = Arc::new(PostgresCaseRepository::new(pool.clone()));
    let state = AppState::new(
        Arc::new(ClientService::new(client_repo)),
        Arc::new(CaseService::new(case_repo)),
    );

    let app = rest::api_routes(state)
        .merge(rest::ops_routes(pool, metrics_handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let server = infra.server_config();
    let addr: SocketAddr = format!("{}:{}", server.host, server.port).parse()?;
    info!(%addr, "Starting case-mgmt service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
