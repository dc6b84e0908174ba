use std::net::SocketAddr;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::prompt::PromptVersion;

// Which store holds cached replies
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
}

// CLI argument structure, every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "fitness-chat-gateway")]
#[command(about = "Caching chat backend for fitness meal and workout plans")]
pub struct Args {
    // Address to bind
    #[arg(long, env = "BIND_HOST", default_value = "127.0.0.1")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    // Credential for the completion API
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    #[arg(short, long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,

    #[arg(long, env = "REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    pub redis_url: String,

    #[arg(long, env = "CACHE_BACKEND", value_enum, default_value_t = CacheBackend::Redis)]
    pub cache_backend: CacheBackend,

    // Cache TTL in seconds
    #[arg(short, long, env = "CACHE_TTL", default_value_t = 24 * 60 * 60)]
    pub cache_ttl: u64,

    // System instruction revision
    #[arg(long, env = "PROMPT_VERSION", value_enum, default_value_t = PromptVersion::V3)]
    pub prompt_version: PromptVersion,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY must not be empty")]
    MissingApiKey,

    #[error("cache TTL must be greater than zero")]
    ZeroTtl,

    #[error("invalid bind address {addr}: {source}")]
    InvalidAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}

impl Args {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.openai_api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.cache_ttl == 0 {
            return Err(ConfigError::ZeroTtl);
        }
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|source| ConfigError::InvalidAddr { addr, source })
    }
}
