//! HTTP server configuration object and command-line arguments.

use std::net::SocketAddr;

use clap::Parser;

use crate::outbound::persistence::DbPool;

/// Command-line and environment configuration for the server binary.
///
/// Every flag also reads an environment variable so container deployments
/// can configure the process without a command line.
#[derive(Debug, Parser)]
#[command(name = "stackit-backend", about = "StackIt Q&A backend server")]
pub struct ServerArgs {
    /// Socket address to bind the HTTP listener to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Secret used to sign bearer tokens. When unset, debug builds fall back
    /// to a random per-process secret.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,

    /// Bearer token validity in hours.
    #[arg(long, env = "TOKEN_TTL_HOURS", default_value_t = 24)]
    pub token_ttl_hours: i64,

    /// Maximum number of database connections in the pool.
    #[arg(long, env = "DB_POOL_MAX", default_value_t = 10)]
    pub db_pool_max: u32,
}

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) jwt_secret: String,
    pub(crate) token_ttl: chrono::Duration,
}

impl ServerConfig {
    /// Construct a server configuration from resolved parts.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        db_pool: DbPool,
        jwt_secret: String,
        token_ttl: chrono::Duration,
    ) -> Self {
        Self {
            bind_addr,
            db_pool,
            jwt_secret,
            token_ttl,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
