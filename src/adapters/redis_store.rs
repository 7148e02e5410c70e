use crate::domain::ports::{ProfileStore, StoreConnector};
use crate::utils::error::{FetchError, ProfileError, Result};
use crate::utils::validation::validate_store_url;

pub const DEFAULT_STORE_URL: &str = "redis://127.0.0.1:6379/";

/// Opens synchronous Redis connections to one fixed address.
///
/// Construction only parses the address; nothing touches the network until
/// [`StoreConnector::connect`].
#[derive(Debug, Clone)]
pub struct RedisConnector {
    client: redis::Client,
}

impl RedisConnector {
    pub fn new(store_url: &str) -> Result<Self> {
        validate_store_url("store_url", store_url)?;

        let client = redis::Client::open(store_url).map_err(|e| {
            ProfileError::InvalidConfigValueError {
                field: "store_url".to_string(),
                value: store_url.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self { client })
    }
}

impl StoreConnector for RedisConnector {
    type Store = RedisStore;

    fn connect(&self) -> std::result::Result<RedisStore, FetchError> {
        let conn = self
            .client
            .get_connection()
            .map_err(|e| FetchError::Connect {
                message: e.to_string(),
            })?;
        tracing::debug!("Connected to store at {:?}", self.client.get_connection_info().addr);

        Ok(RedisStore { conn: Some(conn) })
    }
}

pub struct RedisStore {
    conn: Option<redis::Connection>,
}

impl ProfileStore for RedisStore {
    fn get(&mut self, key: &str) -> std::result::Result<Option<Vec<u8>>, FetchError> {
        let conn = self.conn.as_mut().ok_or_else(|| FetchError::Lookup {
            key: key.to_string(),
            message: "connection already closed".to_string(),
        })?;

        redis::cmd("GET")
            .arg(key)
            .query::<Option<Vec<u8>>>(conn)
            .map_err(|e| FetchError::Lookup {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    fn close(&mut self) -> std::result::Result<(), FetchError> {
        // Dropping the connection shuts the socket.
        self.conn.take();
        Ok(())
    }
}
