pub mod migration;
pub mod polygon;

use crate::service::filesystem::data_dir_file_path;
use crate::{Error, Result};
use deadpool_sqlite::{Config, Pool, Runtime};
use rusqlite::Connection;
use std::fs::remove_file;
use tracing::{error, info};

pub fn open_connection() -> Result<Connection> {
    let conn = Connection::open(data_dir_file_path("polygon-api.db")?)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(conn)
}

pub fn pool() -> Result<Pool> {
    let pool = Config::new(data_dir_file_path("polygon-api.db")?)
        .builder(Runtime::Tokio1)?
        .build()?;
    Ok(pool)
}

pub fn cli(args: &[String], conn: Connection) -> Result<()> {
    let first_arg = match args.first() {
        Some(some) => some,
        None => Err(Error::CLI("No DB actions passed".into()))?,
    };

    match first_arg.as_str() {
        // Migrations run on every startup, so there's nothing left to do
        "migrate" => {}
        "drop" => drop_db(conn)?,
        _ => Err(Error::CLI(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}

fn drop_db(conn: Connection) -> Result<()> {
    let path = conn.path().map(|it| it.to_owned()).unwrap_or_default();
    if path.is_empty() {
        error!("Database does not exist");
        return Err("Database does not exist".into());
    }
    info!(path, "Found database");
    remove_file(&path)?;
    info!("Database file was removed");
    Ok(())
}
