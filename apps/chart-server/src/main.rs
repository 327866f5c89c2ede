use anyhow::Context;
use chart_server::{create_router, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = natal_config::load_service_config()?;
    let bind_addr = config.server.bind_address();
    let app = create_router(Arc::new(AppState::from_config(&config)));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Could not bind {bind_addr}"))?;
    log::info!("Natal chart renderer listening on {bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
