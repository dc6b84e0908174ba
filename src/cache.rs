//! Reply cache keyed by the raw prompt text.
//!
//! Values are stored as the JSON encoding of the reply string, so a Redis
//! instance shared with older deployments reads back the same entries.

use async_trait::async_trait;
use dashmap::DashMap;
use redis::{AsyncCommands, aio::ConnectionManager};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("cached value for key is not a JSON string: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait ReplyCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set_ex(&self, key: &str, reply: &str, ttl: Duration) -> Result<(), CacheError>;
}

fn encode(reply: &str) -> Result<String, CacheError> {
    Ok(serde_json::to_string(reply)?)
}

fn decode(raw: &str) -> Result<String, CacheError> {
    Ok(serde_json::from_str(raw)?)
}

// Redis-backed cache, ConnectionManager reconnects on its own
#[derive(Clone)]
pub struct RedisCache {
    conn_manager: ConnectionManager,
    redis_url: String,
}

impl fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCache")
            .field("redis_url", &self.redis_url)
            .finish_non_exhaustive()
    }
}

impl RedisCache {
    pub async fn connect(redis_url: &str) -> Result<Self, CacheError> {
        info!(redis_url, "Connecting to Redis");
        let client = redis::Client::open(redis_url)?;
        let conn_manager = ConnectionManager::new(client).await?;
        Ok(Self {
            conn_manager,
            redis_url: redis_url.to_string(),
        })
    }
}

#[async_trait]
impl ReplyCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn_manager.clone();
        let raw: Option<String> = conn.get(key).await?;
        raw.as_deref().map(decode).transpose()
    }

    async fn set_ex(&self, key: &str, reply: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.conn_manager.clone();
        conn.set_ex::<_, _, ()>(key, encode(reply)?, ttl.as_secs().max(1))
            .await?;
        Ok(())
    }
}

// Cache entry with timestamp
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub response: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

// In-process cache for running without Redis
#[derive(Default, Debug)]
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReplyCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let lookup = self
            .entries
            .get(key)
            .map(|entry| (entry.is_expired(), entry.response.clone()));

        match lookup {
            Some((false, raw)) => decode(&raw).map(Some),
            Some((true, _)) => {
                self.entries.remove_if(key, |_, entry| entry.is_expired());
                debug!("Expired entry evicted");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_ex(&self, key: &str, reply: &str, ttl: Duration) -> Result<(), CacheError> {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                response: encode(reply)?,
                created_at: Instant::now(),
                ttl,
            },
        );
        Ok(())
    }
}
