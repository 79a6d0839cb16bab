//! Redis Store Module
//!
//! [`ClipboardStore`] backed by an external Redis-compatible server.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::store::ClipboardStore;

// == Redis Store ==
/// Process-wide handle to the external store.
///
/// Holds one multiplexed [`ConnectionManager`] shared by every request. The
/// connection is opened by the first command (the startup ping), and again
/// by a later command if the store was unreachable then.
pub struct RedisStore {
    client: Client,
    connection: OnceCell<ConnectionManager>,
    address: String,
}

impl RedisStore {
    /// Creates a store handle from configuration without connecting.
    pub fn from_config(config: &Config) -> Result<Self> {
        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(config.store_host.clone(), config.store_port),
            redis: RedisConnectionInfo {
                username: config.store_username.clone(),
                password: config.store_password.clone(),
                ..Default::default()
            },
        };

        Ok(Self {
            client: Client::open(info)?,
            connection: OnceCell::new(),
            address: format!("{}:{}", config.store_host, config.store_port),
        })
    }

    async fn connection(&self) -> Result<ConnectionManager> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                debug!("Connecting to store at {}", self.address);
                // Failures surface to the caller; the client re-attempts
                let config = ConnectionManagerConfig::new().set_number_of_retries(0);
                let manager =
                    ConnectionManager::new_with_config(self.client.clone(), config).await?;
                info!("Connected to store at {}", self.address);
                Ok::<_, redis::RedisError>(manager)
            })
            .await?;
        Ok(manager.clone())
    }
}

#[async_trait]
impl ClipboardStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection().await?;
        let value: Option<Vec<u8>> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()> {
        let mut conn = self.connection().await?;
        let (): () = conn.set_ex(key, value, ttl.as_secs()).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        let _pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;

    fn unreachable_config() -> Config {
        // Port 1 on loopback refuses connections
        Config {
            store_host: "127.0.0.1".to_string(),
            store_port: 1,
            ..Config::default()
        }
    }

    #[test]
    fn test_from_config_does_not_connect() {
        let store = RedisStore::from_config(&unreachable_config()).unwrap();
        assert_eq!(store.backend(), "redis");
        assert_eq!(store.address, "127.0.0.1:1");
        assert!(store.connection.get().is_none());
    }

    #[tokio::test]
    async fn test_unreachable_store_is_unavailable() {
        let store = RedisStore::from_config(&unreachable_config()).unwrap();

        let result = store.get("clipboard:0000000000000000").await;
        assert!(matches!(result, Err(ClipboardError::StoreUnavailable(_))));

        let result = store.ping().await;
        assert!(matches!(result, Err(ClipboardError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_failed_ping_leaves_connection_unset() {
        let store = RedisStore::from_config(&unreachable_config()).unwrap();

        assert!(store.ping().await.is_err());
        // Next command attempts a fresh connection
        assert!(store.connection.get().is_none());
    }
}
