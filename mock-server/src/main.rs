use mock_server::config::Config;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,mock_server=debug")),
        )
        .init();

    let config = Config::from_env()?;
    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    mock_server::run(listener).await?;
    Ok(())
}
