use clap::Parser;
use minilink::config::Config;
use minilink::error::AppResult;
use minilink::server;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// minilink - a minimal URL shortener
#[derive(Parser, Debug)]
#[command(name = "minilink")]
#[command(version = "0.1.0")]
#[command(about = "A minimal URL shortener", long_about = None)]
struct Cli {
    /// Host to bind to (overrides SERVER_HOST env var)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides SERVER_PORT env var)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
        )
        .init();

    // Load configuration
    let mut config = Config::from_env()?;

    // Override config with CLI args if provided
    let overridden = cli.host.is_some() || cli.port.is_some();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Re-compute base_url after CLI overrides
    if overridden {
        config.url.base_url = format!("http://{}", addr);
    }

    server::run_server(config, addr).await
}
