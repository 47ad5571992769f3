//! Authentication seam.
//!
//! Identity lives with a hosted provider; the API only ever needs "the
//! current user id, or none". [`AuthProvider`] is that seam: the default
//! [`BearerAuth`] reads a development-grade bearer token, and deployments
//! swap in a provider that verifies real session tokens.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::error::{ApiError, ApiResult};

/// Resolves the current user from request headers.
pub trait AuthProvider: Send + Sync {
    /// The authenticated user's id, or `None` for anonymous requests.
    fn current_user(&self, headers: &HeaderMap) -> Option<String>;

    /// The authenticated user's id, or `Unauthenticated`.
    ///
    /// Write paths call this; read paths prefer [`Self::current_user`]
    /// and degrade to an unsaved/empty view.
    fn require_user(&self, headers: &HeaderMap) -> ApiResult<String> {
        self.current_user(headers).ok_or(ApiError::Unauthenticated)
    }
}

/// Development stand-in for the hosted identity provider: accepts
/// `Authorization: Bearer user:<id>` and trusts the id inside.
#[derive(Clone, Copy, Debug, Default)]
pub struct BearerAuth;

impl AuthProvider for BearerAuth {
    fn current_user(&self, headers: &HeaderMap) -> Option<String> {
        let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
        let token = value.strip_prefix("Bearer ")?;
        let user = token.strip_prefix("user:")?.trim();
        if user.is_empty() {
            None
        } else {
            Some(user.to_string())
        }
    }
}

/// Provider that answers every request with one fixed user. Test-only in
/// spirit, occasionally useful for local single-user setups.
#[derive(Clone, Debug)]
pub struct StaticUser(pub String);

impl AuthProvider for StaticUser {
    fn current_user(&self, _headers: &HeaderMap) -> Option<String> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_token_resolves_user() {
        let auth = BearerAuth;
        assert_eq!(
            auth.current_user(&headers_with("Bearer user:u1")),
            Some("u1".to_string())
        );
    }

    #[test]
    fn missing_or_malformed_is_anonymous() {
        let auth = BearerAuth;
        assert!(auth.current_user(&HeaderMap::new()).is_none());
        assert!(auth.current_user(&headers_with("Bearer something-else")).is_none());
        assert!(auth.current_user(&headers_with("Bearer user:")).is_none());
    }

    #[test]
    fn require_user_rejects_anonymous() {
        let auth = BearerAuth;
        assert!(matches!(
            auth.require_user(&HeaderMap::new()),
            Err(ApiError::Unauthenticated)
        ));
    }

    #[test]
    fn static_user_always_answers() {
        let auth = StaticUser("u9".into());
        assert_eq!(auth.current_user(&HeaderMap::new()), Some("u9".into()));
    }
}
