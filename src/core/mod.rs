pub mod fetcher;
pub mod lookup;

pub use crate::domain::model::Profile;
pub use crate::domain::ports::{ConfigProvider, ProfileStore, RecordFetcher, StoreConnector};
pub use crate::utils::error::Result;
