use std::sync::Arc;

use database::AppDatabase;
use dotenvy::dotenv;
use jobs::spawn_all_jobs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod constants;
pub mod database;
pub mod jobs;
pub mod models;
pub(crate) mod utils;

pub async fn start_scheduler() -> anyhow::Result<()> {
    // import .env file
    dotenv().ok();
    initialize_logging();
    // create database client
    let db_client = AppDatabase::new().await?;
    let db_client = Arc::new(db_client);
    spawn_all_jobs(db_client);
    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown signal received, stopping scheduler");
    Ok(())
}

fn initialize_logging() {
    // create default env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or("borrow_deadline_jobs=debug".into());

    // initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
