use crate::domain::model::Profile;
use crate::domain::ports::{ProfileStore, RecordFetcher, StoreConnector};
use crate::utils::error::FetchError;

/// Reads a profile with one `GET` per call on a fresh connection.
pub struct StoreFetcher<C: StoreConnector> {
    connector: C,
}

impl<C: StoreConnector> StoreFetcher<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }
}

/// Closes the wrapped connection when dropped, whichever way the fetch ends.
struct StoreSession<S: ProfileStore> {
    store: S,
}

impl<S: ProfileStore> Drop for StoreSession<S> {
    fn drop(&mut self) {
        match self.store.close() {
            Ok(()) => tracing::debug!("Store connection released"),
            Err(e) => tracing::debug!("Failed to release store connection: {}", e),
        }
    }
}

impl<C: StoreConnector> RecordFetcher for StoreFetcher<C> {
    fn fetch_record(&self, username: &str) -> Result<Profile, FetchError> {
        tracing::debug!("Opening store connection for key: {}", username);
        let mut session = StoreSession {
            store: self.connector.connect()?,
        };

        let data = session
            .store
            .get(username)?
            .ok_or_else(|| FetchError::NotFound {
                key: username.to_string(),
            })?;
        tracing::debug!("Fetched {} bytes for key: {}", data.len(), username);

        Profile::from_json_slice(&data).map_err(|source| FetchError::Decode {
            key: username.to_string(),
            source,
        })
    }
}
