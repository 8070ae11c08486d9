//! Service entry point: configuration, pool, schema setup, HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use catalog_api::inbound::http::state::HttpState;
use catalog_api::outbound::persistence::{
    DbPool, DieselCategoryRepository, DieselProductRepository, PoolConfig, ensure_schema,
};
use catalog_api::server::{self, ServerConfig};

/// Startup parameters; everything else is compiled in.
#[derive(Debug, Parser)]
#[command(name = "catalog-api", about = "HTTP catalogue service backed by PostgreSQL")]
struct Cli {
    /// Socket address the HTTP server listens on.
    #[arg(long, env = "CATALOG_BIND_ADDR", default_value = "0.0.0.0:8000")]
    bind_addr: SocketAddr,

    /// PostgreSQL connection string.
    #[arg(long, env = "CATALOG_DATABASE_URL")]
    database_url: String,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();

    let pool = DbPool::new(PoolConfig::new(&cli.database_url))
        .await
        .map_err(|err| std::io::Error::other(format!("database pool setup failed: {err}")))?;
    ensure_schema(&pool)
        .await
        .map_err(|err| std::io::Error::other(format!("schema setup failed: {err}")))?;

    let state = web::Data::new(HttpState::new(
        Arc::new(DieselProductRepository::new(pool.clone())),
        Arc::new(DieselCategoryRepository::new(pool)),
    ));

    info!(addr = %cli.bind_addr, "catalogue service listening");
    server::run(&ServerConfig::new(cli.bind_addr), state)?.await
}
