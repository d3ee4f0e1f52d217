use clap::{Parser, Subcommand};
use splitdns_domain::{CliOverrides, RecordType};
use splitdns_infrastructure::dns::DnsServerHandler;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "splitdns")]
#[command(version)]
#[command(about = "splitdns - split-horizon DNS forwarder")]
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

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one name through the configured rules and print the answers as JSON
    Resolve {
        /// Domain name to look up
        name: String,

        /// Record type (A, AAAA, MX, TXT, ...)
        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: RecordType,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let dns_services = di::DnsServices::new(&config)?;

    if let Some(Command::Resolve { name, record_type }) = cli.command {
        let answers = dns_services
            .resolver
            .execute(&name, record_type.to_u16())
            .await;
        println!("{}", serde_json::to_string_pretty(&answers)?);
        return Ok(());
    }

    info!("Starting splitdns v{}", env!("CARGO_PKG_VERSION"));

    let dns_handler = DnsServerHandler::new(dns_services.resolver);
    server::start_dns_server(config.server.listen_addr(), dns_handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
