//! `campus-resources` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the API server.
//! - `migrate` — run pending database migrations.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use api::{AppState, AuthConfig, Repositories};

#[derive(Parser)]
#[command(
    name = "campus-resources",
    about = "Role-gated CRUD API for campus resources",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,
        #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
        max_connections: u32,
        /// Keep all rows in process memory instead of Postgres.
        #[arg(long)]
        in_memory: bool,
        /// Comma-separated `token=email` pairs accepted as bearer tokens.
        #[arg(long, env = "AUTH_TOKENS", default_value = "")]
        auth_tokens: String,
        /// Comma-separated emails granted the admin role.
        #[arg(long, env = "ADMIN_EMAILS", default_value = "")]
        admin_emails: String,
    },
    /// Run pending database migrations.
    Migrate {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            bind,
            database_url,
            max_connections,
            in_memory,
            auth_tokens,
            admin_emails,
        } => {
            let auth = AuthConfig::parse(&auth_tokens, &admin_emails)
                .context("invalid authentication configuration")?;
            if auth.token_count() == 0 {
                warn!("No AUTH_TOKENS configured; every protected endpoint will answer 403");
            }

            let repos = if in_memory {
                info!("Using in-memory repositories");
                Repositories::in_memory()
            } else {
                let database_url = database_url
                    .context("--database-url or DATABASE_URL is required unless --in-memory is set")?;
                let pool = db::pool::create_pool(&database_url, max_connections)
                    .await
                    .context("failed to connect to database")?;
                Repositories::postgres(pool)
            };

            info!("Starting API server on {bind}");
            api::serve(&bind, AppState::new(repos, auth))
                .await
                .context("server terminated")?;
        }
        Command::Migrate { database_url } => {
            info!("Running migrations");
            let pool = db::pool::create_pool(&database_url, 2)
                .await
                .context("failed to connect to database")?;
            db::pool::run_migrations(&pool)
                .await
                .context("migration failed")?;
            info!("Migrations applied successfully");
        }
    }

    Ok(())
}
