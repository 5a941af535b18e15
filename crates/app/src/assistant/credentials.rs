//! Assistant credentials.

use std::fmt;

use zeroize::Zeroize;

/// API key for the completion service, wiped from memory on drop.
#[derive(Clone)]
pub struct ApiKey {
    secret: String,
}

impl ApiKey {
    /// Wrap a raw key; blank keys count as absent.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            secret: trimmed.to_string(),
        })
    }

    /// The raw key, for request headers only.
    pub fn expose(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(**redacted**)")
    }
}

impl Drop for ApiKey {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keys_are_absent() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new(" \n").is_none());
    }

    #[test]
    fn key_is_trimmed_and_redacted() {
        let key = ApiKey::new(" secret-key ");

        assert_eq!(key.as_ref().map(ApiKey::expose), Some("secret-key"));
        assert_eq!(
            key.map(|key| format!("{key:?}")).as_deref(),
            Some("ApiKey(**redacted**)")
        );
    }
}
