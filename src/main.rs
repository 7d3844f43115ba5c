use anyhow::Context;
use hospital_gateway::{
    build_app, config::Config, constants::API_NAME, repository::HospitalRepository,
    service::HospitalService,
};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting hospital gateway on port {}", API_NAME, config.server_port);

    let repo = HospitalRepository::new(&config).context("Failed to build store client")?;
    tracing::info!("{} Using store table {}", API_NAME, repo.table_url());

    let service = HospitalService::new(repo);
    let app = build_app(service, &config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("{} Server stopped", API_NAME);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("{} Failed to listen for shutdown signal: {}", API_NAME, e);
        std::future::pending::<()>().await;
    }
}
