use clap::Parser;
use github_trending::github::GitHubClient;
use github_trending::server;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "trending-server")]
#[command(about = "HTTP API serving trending GitHub repositories")]
#[command(version)]
struct ServerCli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = ServerCli::parse();

    let client = Arc::new(GitHubClient::new()?);
    server::serve(client, cli.port).await
}
