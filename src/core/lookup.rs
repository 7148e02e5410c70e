use crate::adapters::redis_store::RedisConnector;
use crate::core::fetcher::StoreFetcher;
use crate::domain::model::Profile;
use crate::domain::ports::{ConfigProvider, RecordFetcher};
use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::{is_valid_email, is_valid_username};

/// Validates the username, fetches the record and validates its email.
///
/// Holds no mutable state: repeated lookups against an unchanged store
/// return the same result.
pub struct ProfileLookup<F: RecordFetcher> {
    fetcher: F,
}

impl<F: RecordFetcher> ProfileLookup<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetch_profile(&self, username: &str) -> Result<Profile> {
        if !is_valid_username(username) {
            return Err(ProfileError::InvalidUsername {
                username: username.to_string(),
            });
        }

        let profile = self.fetcher.fetch_record(username)?;

        if !is_valid_email(&profile.email) {
            return Err(ProfileError::InvalidEmail {
                email: profile.email,
            });
        }

        Ok(profile)
    }
}

pub type RedisProfileLookup = ProfileLookup<StoreFetcher<RedisConnector>>;

impl RedisProfileLookup {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let connector = RedisConnector::new(config.store_url())?;
        Ok(Self::new(StoreFetcher::new(connector)))
    }
}

/// One-shot lookup against the Redis store at `store_url`.
pub fn fetch_profile(store_url: &str, username: &str) -> Result<Profile> {
    let connector = RedisConnector::new(store_url)?;
    ProfileLookup::new(StoreFetcher::new(connector)).fetch_profile(username)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FetchError;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Hands out queued results in order and counts calls.
    struct FetchSequence {
        outputs: RefCell<VecDeque<std::result::Result<Profile, FetchError>>>,
        calls: Cell<usize>,
    }

    impl FetchSequence {
        fn new(outputs: Vec<std::result::Result<Profile, FetchError>>) -> Self {
            Self {
                outputs: RefCell::new(outputs.into()),
                calls: Cell::new(0),
            }
        }
    }

    impl RecordFetcher for FetchSequence {
        fn fetch_record(&self, _username: &str) -> std::result::Result<Profile, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.outputs
                .borrow_mut()
                .pop_front()
                .expect("fetch called more often than scripted")
        }
    }

    fn profile(username: &str, email: &str) -> Profile {
        Profile {
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_fetch_profile_sequence() {
        // "steven xxx" never reaches the fetcher, so only three outputs are queued.
        let fetcher = FetchSequence::new(vec![
            Ok(profile("invalid_email", "test.com")),
            Err(FetchError::Lookup {
                key: "throw_err".to_string(),
                message: "request err".to_string(),
            }),
            Ok(profile("steven", "12345678@qq.com")),
        ]);
        let lookup = ProfileLookup::new(&fetcher);

        let err = lookup.fetch_profile("steven xxx").unwrap_err();
        assert!(matches!(err, ProfileError::InvalidUsername { .. }));
        assert_eq!(fetcher.calls.get(), 0);

        let err = lookup.fetch_profile("invalid_email").unwrap_err();
        assert!(matches!(err, ProfileError::InvalidEmail { ref email } if email == "test.com"));

        let err = lookup.fetch_profile("throw_err").unwrap_err();
        assert!(matches!(
            err,
            ProfileError::FetchFailure(FetchError::Lookup { .. })
        ));

        let found = lookup.fetch_profile("steven").unwrap();
        assert_eq!(found, profile("steven", "12345678@qq.com"));
        assert_eq!(fetcher.calls.get(), 3);
    }

    #[test]
    fn test_fetch_error_propagates_unchanged() {
        let fetcher = FetchSequence::new(vec![Err(FetchError::NotFound {
            key: "ghost".to_string(),
        })]);

        let err = ProfileLookup::new(&fetcher).fetch_profile("ghost").unwrap_err();

        assert!(matches!(
            err,
            ProfileError::FetchFailure(FetchError::NotFound { ref key }) if key == "ghost"
        ));
    }

    #[test]
    fn test_fetch_profile_is_idempotent() {
        let fetcher = FetchSequence::new(vec![
            Ok(profile("steven", "12345678@qq.com")),
            Ok(profile("steven", "12345678@qq.com")),
        ]);
        let lookup = ProfileLookup::new(&fetcher);

        let first = lookup.fetch_profile("steven").unwrap();
        let second = lookup.fetch_profile("steven").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_fetch_profile_rejects_bad_store_url() {
        let err = fetch_profile("not a url", "steven").unwrap_err();
        assert!(matches!(err, ProfileError::InvalidConfigValueError { .. }));
    }
}
