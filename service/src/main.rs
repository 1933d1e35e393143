use std::env;

use abi::Config;
use anyhow::Result;
use reservation::{seed_demo, BookingManager, Clock, PgRepository, SystemClock};
use service::{availability_report, config_path, CONFIG_ENV};
use tracing::info;
use tracing_subscriber::EnvFilter;

const REPORT_DAYS: i64 = 30;

/// usage: service [config.yml] [--seed], or set RESERVATION_CONFIG
#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let seed = args.iter().any(|a| a == "--seed");
    let filename = config_path(&args, env::var(CONFIG_ENV).ok());

    let config = Config::load(&filename)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .init();

    info!(host = %config.db.host, dbname = %config.db.dbname, "connecting to database");
    let repo = PgRepository::from_config(&config.db).await?;
    repo.migrate().await?;

    let today = SystemClock.today();
    if seed {
        seed_demo(&repo, &repo, &repo, today).await?;
    }

    let manager = BookingManager::new(repo.clone(), repo);
    let report = availability_report(&manager, today, REPORT_DAYS).await?;
    println!("{report}");

    Ok(())
}
