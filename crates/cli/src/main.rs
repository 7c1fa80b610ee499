use basalt_dns_domain::CliOverrides;
use clap::Parser;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "basalt-dns")]
#[command(version)]
#[command(about = "Basalt DNS - authoritative DNS server over a SQL record store")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Basalt DNS v{}", env!("CARGO_PKG_VERSION"));

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, &config.database).await?;

    let services = di::Services::new(pool);

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    server::start_dns_server(dns_addr, services.handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
