pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::redis_store::{RedisConnector, RedisStore, DEFAULT_STORE_URL};
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;
pub use core::{
    fetcher::StoreFetcher,
    lookup::{fetch_profile, ProfileLookup, RedisProfileLookup},
};
pub use domain::model::Profile;
pub use utils::error::{ErrorCategory, FetchError, ProfileError, Result};
pub use utils::validation::{is_valid_email, is_valid_username};
