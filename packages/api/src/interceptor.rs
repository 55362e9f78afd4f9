//! # Session interceptor
//!
//! Cross-cutting auth policy for every request the [`ApiClient`](crate::ApiClient)
//! sends, kept in one place instead of at each call site.
//!
//! - **Request side** ([`authorize`](SessionInterceptor::authorize)): attach
//!   `Authorization: Bearer <token>` when a token is persisted.
//! - **Response side** ([`inspect`](SessionInterceptor::inspect)): on `401`, clear
//!   the persisted token and run the `on_expired` hook. The UI installs a hook
//!   that drops the session user and hard-navigates to the login screen.
//!
//! The hook fires for whichever call saw the `401`, so it can run while an
//! unrelated screen is mounted.

use std::fmt;
use std::rc::Rc;

use reqwest::{RequestBuilder, StatusCode};
use store::TokenStore;

type ExpiryHook = Rc<dyn Fn()>;

#[derive(Clone)]
pub struct SessionInterceptor {
    tokens: Rc<dyn TokenStore>,
    on_expired: Option<ExpiryHook>,
}

impl SessionInterceptor {
    pub fn new(tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            tokens,
            on_expired: None,
        }
    }

    /// Replace the hook run after the token has been cleared on a `401`.
    pub fn set_expiry_hook(&mut self, hook: impl Fn() + 'static) {
        self.on_expired = Some(Rc::new(hook));
    }

    pub fn tokens(&self) -> &Rc<dyn TokenStore> {
        &self.tokens
    }

    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.load() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Returns `true` when the status ended the session.
    pub fn inspect(&self, status: StatusCode) -> bool {
        if status != StatusCode::UNAUTHORIZED {
            return false;
        }
        tracing::warn!("API answered 401, clearing session");
        if let Err(e) = self.tokens.clear() {
            tracing::warn!("Failed to clear token: {}", e);
        }
        if let Some(hook) = &self.on_expired {
            hook();
        }
        true
    }
}

impl fmt::Debug for SessionInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionInterceptor")
            .field("has_token", &self.tokens.has_token())
            .field("has_expiry_hook", &self.on_expired.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use store::MemoryTokenStore;

    use super::*;

    #[test]
    fn test_unauthorized_clears_token_and_fires_hook() {
        let tokens = MemoryTokenStore::with_token("stale");
        let fired = Rc::new(Cell::new(0));
        let mut interceptor = SessionInterceptor::new(Rc::new(tokens.clone()));
        let counter = fired.clone();
        interceptor.set_expiry_hook(move || counter.set(counter.get() + 1));

        assert!(interceptor.inspect(StatusCode::UNAUTHORIZED));
        assert!(tokens.load().is_none());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_other_statuses_are_ignored() {
        let tokens = MemoryTokenStore::with_token("live");
        let fired = Rc::new(Cell::new(false));
        let mut interceptor = SessionInterceptor::new(Rc::new(tokens.clone()));
        let flag = fired.clone();
        interceptor.set_expiry_hook(move || flag.set(true));

        for status in [
            StatusCode::OK,
            StatusCode::FORBIDDEN,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            assert!(!interceptor.inspect(status));
        }
        assert_eq!(tokens.load().as_deref(), Some("live"));
        assert!(!fired.get());
    }
}
