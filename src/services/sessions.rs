//! In-memory admin session registry.
//!
//! A successful login mints a random token, kept server-side and handed
//! to the browser in a cookie. Tokens live only for the process lifetime;
//! there is no persistence and nothing is shared across instances.

use std::collections::HashSet;
use std::sync::Mutex;

use uuid::Uuid;

pub const SESSION_COOKIE: &str = "gita_admin_session";

#[derive(Default)]
pub struct SessionRegistry {
    tokens: Mutex<HashSet<String>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints and records a fresh session token.
    pub fn create(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.lock().insert(token.clone());
        token
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    pub fn revoke(&self, token: &str) {
        self.lock().remove(token);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        // A poisoned lock only means another request panicked mid-insert;
        // the set itself is still usable.
        self.tokens.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Pulls the session token out of a `Cookie` request header, if present.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_tokens_validate_until_revoked() {
        let registry = SessionRegistry::new();
        let token = registry.create();
        assert!(registry.is_valid(&token));
        registry.revoke(&token);
        assert!(!registry.is_valid(&token));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let registry = SessionRegistry::new();
        assert!(!registry.is_valid("made-up"));
    }

    #[test]
    fn cookie_header_parsing_finds_the_session_token() {
        let header = format!("theme=dark; {}=abc123; lang=hi", SESSION_COOKIE);
        assert_eq!(token_from_cookie_header(&header), Some("abc123"));
        assert_eq!(token_from_cookie_header("theme=dark"), None);
    }
}
