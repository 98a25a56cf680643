//! todoctl - serve a todo CRUD API over PostgreSQL
//!
//! Connection parameters come from flags, the environment, or a .env
//! file; flags win. `DATABASE_URL` overrides the individual fields.
//!
//! Usage:
//!   todoctl                             # defaults, 0.0.0.0:8000
//!   todoctl --bind 127.0.0.1:3000
//!   RUST_LOG=todoctl_server=debug todoctl

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use todoctl_server::db;
use todoctl_server::{DbConfig, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "todoctl",
    author,
    version,
    about = "HTTP CRUD server for todo items backed by PostgreSQL"
)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: SocketAddr,

    /// Full connection URL; overrides the individual db options
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Database host
    #[arg(long, env = "host_server", default_value = "localhost")]
    db_host: String,

    /// Database port
    #[arg(long, env = "db_server_port", default_value_t = 5432)]
    db_port: u16,

    /// Database name
    #[arg(long, env = "database_name", default_value = "fastapi")]
    db_name: String,

    /// Database username
    #[arg(long, env = "db_username", default_value = "postgres")]
    db_user: String,

    /// Database password
    #[arg(long, env = "db_password", default_value = "Off1ce")]
    db_password: String,

    /// Maximum pooled connections
    #[arg(long, default_value_t = todoctl_server::config::DEFAULT_MAX_CONNECTIONS)]
    pool_size: u32,

    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let db_config = DbConfig {
        host: cli.db_host,
        port: cli.db_port,
        database: cli.db_name,
        username: cli.db_user,
        password: cli.db_password,
        max_connections: cli.pool_size,
    };

    tracing::info!(
        host = %db_config.host,
        database = %db_config.database,
        pool_size = db_config.max_connections,
        "Connecting to database"
    );
    let pool = match &cli.database_url {
        Some(url) => db::create_pool_with_url(url, db_config.max_connections).await,
        None => db::create_pool(&db_config).await,
    }
    .context("could not connect to the database")?;

    db::schema::ensure(&pool)
        .await
        .context("schema setup failed")?;

    let server_config = ServerConfig {
        bind_addr: cli.bind,
    };
    todoctl_server::run_server(pool, server_config).await?;

    Ok(())
}
