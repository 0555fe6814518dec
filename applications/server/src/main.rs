/// Usuarios Server - HTTP CRUD service for an in-memory user directory
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use usuarios_core::UserStore;
use usuarios_server::{create_router, AppState, ServerConfig, UserDirectory};
use usuarios_storage::{seed, MemoryUserStore};

#[derive(Parser)]
#[command(name = "usuarios-server")]
#[command(about = "User directory HTTP service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Directory holding default.toml and <environment>.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Listen port, overriding configuration and PORT
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the users present at startup
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "usuarios_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, port } => {
            serve(config, port).await?;
        }
        Commands::ListUsers => {
            list_users();
        }
    }

    Ok(())
}

async fn serve(config_dir: Option<PathBuf>, port: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    let mut config = match config_dir {
        Some(dir) => ServerConfig::load_from_dir(&dir)?,
        None => ServerConfig::load()?,
    };
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    tracing::info!("Application: {}", config.nombre);
    tracing::info!("DB server: {}", config.config_db.host);
    tracing::info!("Environment: {}", config.environment.as_str());
    if config.environment.is_development() {
        tracing::info!("Request tracing enabled");
    }

    let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::seeded());
    tracing::debug!("User store ready with {} users", store.count().await?);

    // Build application state
    let directory = Arc::new(UserDirectory::new(store));
    let app = create_router(AppState::new(directory), &config);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Listening on port {}", addr.port());

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn list_users() {
    println!("Users:");
    for user in seed::default_users() {
        println!("  {} - {}", user.id, user.name);
    }
}
