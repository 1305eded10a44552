use std::net::SocketAddr;

use backend::shared::config;
use backend::shared::data::dataset;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    backend::system::tracing::initialize()?;

    let config = config::initialize_config()?;

    let today = chrono::Local::now().date_naive();
    dataset::initialize_dataset(config.dataset, today)?;

    let app = backend::routes::configure_routes();

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Sales dashboard backend listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
