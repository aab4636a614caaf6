use anyhow::{Context, Result};
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Reads `CARD_PROCESSOR_ADDR`, falling back to `0.0.0.0:3000`.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var("CARD_PROCESSOR_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        Self::from_addr(&raw)
    }

    fn from_addr(raw: &str) -> Result<Self> {
        let bind_addr = raw
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid CARD_PROCESSOR_ADDR: {raw}"))?;

        Ok(ServerConfig { bind_addr })
    }
}
