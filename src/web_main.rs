//! Web 服务器主程序入口

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use linguee_api::env::EnvConfig;
use linguee_api::web::{WebConfig, WebServer};
use linguee_api::{Client, LingueeParser};

#[derive(Parser)]
#[command(name = "linguee-api-web", about = "HTTP proxy serving Linguee lookups as JSON")]
struct Cli {
    /// Bind address (overrides LINGUEE_API_BIND_ADDRESS)
    #[arg(long, short = 'b')]
    bind: Option<String>,
    /// Port (overrides LINGUEE_API_PORT)
    #[arg(long, short = 'p')]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = EnvConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let web_config = WebConfig {
        bind_addr: cli.bind.unwrap_or_else(|| config.web_bind_address.clone()),
        port: cli.port.unwrap_or(config.web_port),
    };

    config.print_summary();

    let fetcher = config.build_fetcher()?;
    let client = Client::new(fetcher, Arc::new(LingueeParser::new()?))
        .with_max_redirects(config.max_redirects);

    WebServer::new(web_config, client).start().await?;

    Ok(())
}
