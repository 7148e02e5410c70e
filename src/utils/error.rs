use thiserror::Error;

/// Failure while reading a record from the store.
///
/// The stages stay distinct here so diagnostics can tell them apart; callers
/// of the lookup only ever see them wrapped in [`ProfileError::FetchFailure`].
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not connect to store: {message}")]
    Connect { message: String },

    #[error("lookup of key `{key}` failed: {message}")]
    Lookup { key: String, message: String },

    #[error("no record stored under key `{key}`")]
    NotFound { key: String },

    #[error("stored record for `{key}` is not a valid profile: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("invalid username: {username:?}")]
    InvalidUsername { username: String },

    #[error("failed to fetch profile: {0}")]
    FetchFailure(#[from] FetchError),

    #[error("invalid email in stored profile: {email:?}")]
    InvalidEmail { email: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller passed a malformed username.
    Input,
    /// The store could not produce a record.
    Store,
    /// The store produced a record that fails validation.
    Data,
    Configuration,
}

impl ProfileError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProfileError::InvalidUsername { .. } => ErrorCategory::Input,
            ProfileError::FetchFailure(_) => ErrorCategory::Store,
            ProfileError::InvalidEmail { .. } => ErrorCategory::Data,
            ProfileError::ConfigError { .. }
            | ProfileError::InvalidConfigValueError { .. }
            | ProfileError::IoError(_) => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProfileError::InvalidUsername { username } => format!(
                "'{}' is not a valid username (3-16 characters: a-z, 0-9, '_' or '-')",
                username
            ),
            ProfileError::FetchFailure(_) => {
                "Could not fetch the profile from the store".to_string()
            }
            ProfileError::InvalidEmail { .. } => {
                "The stored profile has an invalid email address".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Input => 2,
            ErrorCategory::Store => 3,
            ErrorCategory::Data => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
