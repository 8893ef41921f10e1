//! Backend entry-point: parses configuration, connects storage, and serves
//! the REST API.

use actix_web::web;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use stackit_backend::inbound::http::health::HealthState;
use stackit_backend::outbound::persistence::{DbPool, PoolConfig};
use stackit_backend::server::{ServerArgs, ServerConfig, create_server};

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

    let args = ServerArgs::parse();

    let jwt_secret = match args.jwt_secret {
        Some(secret) => secret,
        None if cfg!(debug_assertions) => {
            warn!("JWT_SECRET unset; using a random per-process secret (dev only)");
            uuid::Uuid::new_v4().to_string()
        }
        None => {
            return Err(std::io::Error::other(
                "JWT_SECRET must be set in release builds",
            ));
        }
    };

    let pool_config = PoolConfig::new(&args.database_url).with_max_size(args.db_pool_max);
    let db_pool = DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(format!("database pool init failed: {e}")))?;

    let config = ServerConfig::new(
        args.bind_addr,
        db_pool,
        jwt_secret,
        chrono::Duration::hours(args.token_ttl_hours),
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
