include!("../../lib.rs");
use std::net::SocketAddr;
use crate::catalog::router::build_router;
use crate::core::controller::AppState;
use crate::core::repository::RepositoryStore;
use crate::utils::logging::setup_tracing;

const BRANCH: &str = "main";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    setup_tracing();

    let state = AppState::new(BRANCH, RepositoryStore::SeededMemory);
    let addr: SocketAddr = state.config.bind_address().parse()?;
    let app = build_router(state);

    tracing::info!(addr = %addr, "bookstore listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("bookstore stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
