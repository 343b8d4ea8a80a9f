use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hexboard::{api, client::HexboardClient, config::Config, routes::RouteTable};

#[derive(Parser)]
#[command(name = "hexboard")]
#[command(about = "Monitoring dashboard with mock sign-in and guarded navigation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve(ServeArgs),
    /// Print the route table and each route's access rule
    Routes,
    /// Check a running server and report its session
    Status {
        /// Base URL of the server's API (default: $HEXBOARD_URL)
        #[arg(long)]
        url: Option<String>,
    },
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port for HTTP
    #[arg(short, long)]
    port: Option<u16>,

    /// Simulated sign-in round trip in milliseconds
    #[arg(long)]
    login_delay_ms: Option<u64>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "hexboard=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(ms) = args.login_delay_ms {
        config.login_delay = Duration::from_millis(ms);
    }

    tracing::info!("Starting Hexboard server on {}", config.bind_addr());

    let state = api::AppState::from_config(&config);
    let app = api::create_router_with_config(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Hexboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn status(url: Option<String>) -> anyhow::Result<()> {
    let client = match url {
        Some(url) => HexboardClient::new(url),
        None => HexboardClient::from_env(),
    };

    let health = client.health().await?;
    println!("{}: {}", client.base_url(), health.status);

    let session = client.session().await?;
    match session.user {
        Some(user) => println!("Signed in as {} since {}", user.username, user.signed_in_at),
        None => println!("No one is signed in"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve(args)) => serve(args).await?,
        Some(Commands::Routes) => print!("{}", RouteTable::default().describe()),
        Some(Commands::Status { url }) => status(url).await?,
        None => serve(ServeArgs::default()).await?,
    }

    Ok(())
}
