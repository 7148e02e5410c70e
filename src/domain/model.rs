use serde::{Deserialize, Serialize};

/// A username/email pair as stored under the username key.
///
/// Fields other than these two are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
}

impl Profile {
    pub fn from_json_slice(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let profile = Profile::from_json_slice(
            br#"{"username": "steven", "email": "1234567@qq.com", "age": 30}"#,
        )
        .unwrap();

        assert_eq!(
            profile,
            Profile {
                username: "steven".to_string(),
                email: "1234567@qq.com".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_requires_both_fields() {
        assert!(Profile::from_json_slice(br#"{"username": "steven"}"#).is_err());
        assert!(Profile::from_json_slice(br#"{"email": "1234567@qq.com"}"#).is_err());
        assert!(Profile::from_json_slice(b"123").is_err());
    }
}
