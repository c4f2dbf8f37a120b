// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Username that receives the admin flag at sign-in.
/// A hardcoded convention: compared case-insensitively and backed by no
/// credential whatsoever.
pub const ADMIN_USERNAME: &str = "admin";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: String,
    pub listen_addr: String,
    pub rust_log: String,
}

impl Config {
    /// Every variable has a default, so the demo runs with no environment at all.
    pub fn from_env() -> Self {
        dotenv().ok();

        let data_dir = env::var("ECOPLAY_DATA_DIR")
            .unwrap_or_else(|_| "data".to_string());

        let listen_addr = env::var("ECOPLAY_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            data_dir,
            listen_addr,
            rust_log,
        }
    }
}
