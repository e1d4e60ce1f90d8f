//! Backend entry-point: migrates the store, seeds the catalogue, and serves
//! the learner-facing endpoints.

use std::env;
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use aula_backend::inbound::http::health::HealthState;
use aula_backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use aula_backend::outbound::persistence::{DbPool, DieselSeedRepository, PoolConfig};
use aula_backend::seeding::{SeedSettings, seed_catalogue_on_startup};
use aula_backend::server::{ServerConfig, create_server};

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const DEFAULT_DATABASE_PATH: &str = "aula.sqlite3";
const BIND_ADDR_ENV: &str = "BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

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

    let database_path =
        env::var(DATABASE_URL_ENV).unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_owned());
    let pool = DbPool::new(&PoolConfig::new(database_path))
        .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
    pool.run_migrations()
        .map_err(|e| std::io::Error::other(format!("database migration failed: {e}")))?;

    let env_reader = DefaultEnv::default();
    let seed_settings = SeedSettings::from_env(&env_reader);
    let seed_repository = Arc::new(DieselSeedRepository::new(pool.clone()));
    seed_catalogue_on_startup(&seed_settings, seed_repository)
        .await
        .map_err(|e| std::io::Error::other(format!("catalogue seeding failed: {e}")))?;

    let session = session_settings_from_env(&env_reader, BuildMode::from_debug_assertions())
        .map_err(|e| std::io::Error::other(format!("session configuration invalid: {e}")))?;

    let bind_addr = env::var(BIND_ADDR_ENV)
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid {BIND_ADDR_ENV}: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        ServerConfig::new(session, bind_addr, pool),
    )?;
    server.await
}
