/// Music Catalog Server
use catalog_core::{CatalogStorage, CreateGenre};
use catalog_server::{api, config::ServerConfig, state::AppState};
use catalog_storage::LocalStorageContext;
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "Music catalog CRUD server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new genre
    AddGenre {
        /// Genre name
        #[arg(short, long)]
        name: String,
    },
    /// List all genres
    ListGenres,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ServerConfig::load_from(path)?,
        None => ServerConfig::load()?,
    };
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::AddGenre { name } => add_genre(&config, name).await?,
        Commands::ListGenres => list_genres(&config).await?,
    }

    Ok(())
}

async fn open_storage(config: &ServerConfig) -> anyhow::Result<LocalStorageContext> {
    let pool = catalog_storage::create_pool(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    catalog_storage::run_migrations(&pool).await?;

    Ok(LocalStorageContext::new(pool))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Music Catalog Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let storage = open_storage(&config).await?;
    tracing::info!("Database connected");

    // Build application state
    let app_state = AppState::new(Arc::new(storage), config.pagination.clone());

    // Build router
    let app = api::router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_genre(config: &ServerConfig, name: String) -> anyhow::Result<()> {
    let storage = open_storage(config).await?;

    let genre = storage.create_genre(CreateGenre { name }).await?;
    tracing::info!(genre_id = genre.id, "Created genre");

    println!("Created genre {} - {}", genre.id, genre.name);

    Ok(())
}

async fn list_genres(config: &ServerConfig) -> anyhow::Result<()> {
    let storage = open_storage(config).await?;

    let genres = storage.get_all_genres().await?;

    println!("Genres:");
    for genre in genres {
        println!("  {} - {}", genre.id, genre.name);
    }

    Ok(())
}
