use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use neogeo_core::repositories::LocationRepo as _;

mod config;

#[derive(Parser)]
#[command(version, about = "Registry of named geographic locations", long_about = None)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// SQLite database URL (overrides the configuration and DATABASE_URL)
    #[arg(long, value_name = "URL")]
    db_url: Option<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config_file.as_deref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    run(cfg)
}

fn run(cfg: config::Config) -> Result<()> {
    let config::Config { db, webserver } = cfg;

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        db.conn_sqlite,
        db.conn_pool_size
    );
    let connections =
        neogeo_db_sqlite::Connections::init(&db.conn_sqlite, db.conn_pool_size.into())?;
    neogeo_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
    let count = connections.shared()?.count_locations()?;
    log::info!("Found {count} location(s) in the database");

    let web_cfg = neogeo_webserver::Cfg {
        public_base_url: webserver.public_base_url,
    };
    rocket::execute(neogeo_webserver::run(
        connections,
        webserver.enable_cors,
        web_cfg,
    ))
}
