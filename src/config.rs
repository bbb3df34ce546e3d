//! Process configuration resolved once at startup and handed to the serving
//! layer. No process-global state; everything the server needs travels in
//! this record.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CSV_PATH: &str = "data/world-pop.csv";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub csv_path: PathBuf,
}

impl ServerConfig {
    /// Bind to PORT if defined, otherwise default to 5000. WORLDPOP_CSV
    /// overrides the source file location. An unparseable PORT falls back to
    /// the default rather than aborting startup.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let csv_path = env::var("WORLDPOP_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CSV_PATH));

        ServerConfig {
            bind_addr: format!("0.0.0.0:{port}"),
            csv_path,
        }
    }
}
