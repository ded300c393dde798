// src/config.rs
//
// Command-line and environment configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{AppError, AppResult};

#[derive(Parser, Debug, Clone)]
#[command(name = "movieflix")]
#[command(about = "Movie review web application")]
#[command(version)]
pub struct Config {
    /// Directory containing movies.csv, users.csv and reviews.csv
    #[arg(short, long, env = "MOVIEFLIX_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:5000", env = "MOVIEFLIX_BIND")]
    pub bind: SocketAddr,
}

impl Config {
    /// The configured data directory, or the platform default.
    ///
    /// Path structure: {APP_DATA}/movieflix/data
    pub fn resolve_data_dir(&self) -> AppResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let app_data_dir = dirs::data_dir()
            .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

        Ok(app_data_dir.join("movieflix").join("data"))
    }
}
