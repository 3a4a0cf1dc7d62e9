//! Secure credential handling using the secrecy crate
//!
//! The MongoDB password and any pre-built connection URI (which may embed a
//! password) are held in [`SecretString`]. The memory is zeroed on drop and
//! `Debug` output is redacted, so a config value can be logged with `?`
//! without leaking credentials.
//!
//! # Example
//!
//! ```rust
//! use listing_reports::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let password = secret_string("my-password".to_string());
//! assert_eq!(password.expose_secret().as_ref(), "my-password");
//! assert!(!format!("{password:?}").contains("my-password"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret};
use serde::{Deserialize, Deserializer};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// True when the value is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Secret string: zeroed on drop, redacted in `Debug`, read through
/// `expose_secret()` only
pub type SecretString = Secret<SecretValue>;

/// Wraps a String into a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string_creation() {
        let secret = secret_string("s3cr3t".to_string());
        assert_eq!(secret.expose_secret(), "s3cr3t");
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("mongodb://u:hunter2@db:27017".to_string());
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("hunter2"));
        assert!(debug_output.contains("REDACTED"));
    }

    #[test]
    fn test_secret_is_blank() {
        assert!(secret_string("   ".to_string()).expose_secret().is_blank());
        assert!(!secret_string("x".to_string()).expose_secret().is_blank());
    }

    #[test]
    fn test_secret_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Section {
            password: SecretString,
        }

        let section: Section = toml::from_str(r#"password = "pw""#).unwrap();
        assert_eq!(section.password.expose_secret(), "pw");
    }
}
