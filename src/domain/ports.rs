use crate::domain::model::Profile;
use crate::utils::error::FetchError;

/// An open connection to the key-value store.
pub trait ProfileStore {
    /// Point lookup. `Ok(None)` means the key is absent.
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>, FetchError>;

    /// Releases the connection. Calling it more than once is harmless.
    fn close(&mut self) -> Result<(), FetchError>;
}

/// Opens one store connection per fetch against a fixed address.
pub trait StoreConnector {
    type Store: ProfileStore;

    fn connect(&self) -> Result<Self::Store, FetchError>;
}

pub trait RecordFetcher {
    fn fetch_record(&self, username: &str) -> Result<Profile, FetchError>;
}

impl<F: RecordFetcher + ?Sized> RecordFetcher for &F {
    fn fetch_record(&self, username: &str) -> Result<Profile, FetchError> {
        (**self).fetch_record(username)
    }
}

pub trait ConfigProvider {
    fn store_url(&self) -> &str;
    fn log_level(&self) -> &str;
    fn json_logs(&self) -> bool;
}
