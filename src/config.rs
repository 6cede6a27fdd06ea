use std::env;
use std::net::SocketAddr;

use crate::error::Error;

const DEFAULT_API_BASE: &str = "maps.googleapis.com";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub addr: SocketAddr,
}

// keep the key out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_base", &self.api_base)
            .field("addr", &self.addr)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Reads `GOOGLE_MAPS_API_KEY`, `GOOGLE_MAPS_API_BASE` and `WAYFARER_ADDR`,
    /// after loading a `.env` file if one is present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let api_key = env::var("GOOGLE_MAPS_API_KEY")?;
        let api_base = env::var("GOOGLE_MAPS_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());
        let addr = env::var("WAYFARER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

        Self::new(api_key, api_base, &addr)
    }

    pub fn new(api_key: String, api_base: String, addr: &str) -> Result<Self, Error> {
        let addr = addr
            .parse()
            .map_err(|_| Error::config_error(format!("invalid listen address: {}", addr)))?;

        Ok(Self {
            api_key,
            api_base,
            addr,
        })
    }
}
