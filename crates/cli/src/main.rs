use clap::Parser;
use mdns_pub_application::AnswerQueryUseCase;
use mdns_pub_domain::NameRegistry;
use mdns_pub_infrastructure::dns::{bind_multicast_socket, MdnsResponder};
use mdns_pub_infrastructure::system::interface_ipv4;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "mdns-pub")]
#[command(version)]
#[command(about = "mdns-pub - Minimal mDNS responder publishing fixed A records")]
struct Cli {
    /// Semicolon-separated names to publish (env: MDNS_PUB_NAMES)
    #[arg(short = 'n', long, value_name = "NAMES")]
    names: Option<String>,

    /// Interface to join the mDNS group on (env: MDNS_PUB_BIND_IFACE)
    #[arg(short = 'i', long, value_name = "IFACE")]
    bind_iface: Option<String>,

    /// Explicit IPv4 address to answer with (env: MDNS_PUB_LOCAL_IP)
    #[arg(long, value_name = "IP")]
    local_ip: Option<String>,

    /// Interface whose first IPv4 address to answer with (env: MDNS_PUB_LOCAL_IFACE)
    #[arg(long, value_name = "IFACE")]
    local_iface: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    bootstrap::init_logging(cli.log_level.as_deref());

    info!("Starting mdns-pub v{}", env!("CARGO_PKG_VERSION"));

    // All fatal configuration errors surface here, before any socket on
    // 5353 is opened.
    let overrides = bootstrap::CliOverrides {
        names: cli.names,
        bind_iface: cli.bind_iface,
        local_ip: cli.local_ip,
        local_iface: cli.local_iface,
    };
    let config = bootstrap::load_config(overrides)?;

    let answer_address = bootstrap::resolve_answer_address(&config)?;
    info!(address = %answer_address, "resolved local answer address");

    let bind_address = interface_ipv4(&config.bind_interface)?;
    let socket = bind_multicast_socket(bind_address)?;

    info!(
        names = config.names.len(),
        interface = %config.bind_interface,
        "publishing names"
    );

    let registry = NameRegistry::new(config.names);
    let answer_query = AnswerQueryUseCase::new(registry, answer_address);

    let shutdown = CancellationToken::new();
    bootstrap::cancel_on_signal(shutdown.clone())?;

    MdnsResponder::new(socket, answer_query, shutdown).run().await?;

    info!("Shutdown complete");
    Ok(())
}
