//! # Session store
//!
//! The single holder of "who is logged in" for the running client.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized ──mount──▶ Loading ──restore()──▶ Ready(user | none)
//! ```
//!
//! [`AuthProvider`] creates the [`ApiClient`], provides it and the
//! `Signal<AuthState>` via context, then checks any persisted token once.
//! Screens must not read [`AuthState::user`] while [`AuthState::loading`] is
//! true.
//!
//! The Dioxus-free core ([`login`], [`restore`], [`logout`]) only touches the
//! token store and the API, so it can be exercised against a mock server.
//! [`Session`] wraps it and is the only writer of the user signal.

use api::{ApiClient, ApiError, ClientConfig, UserInfo};
use dioxus::prelude::*;

use crate::platform::{hard_navigate, make_token_store};

/// Path of the login screen, target of the forced logout on `401`.
pub const AUTH_PATH: &str = "/auth";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub phase: SessionPhase,
    pub user: Option<UserInfo>,
}

impl AuthState {
    pub fn ready(user: Option<UserInfo>) -> Self {
        Self {
            phase: SessionPhase::Ready,
            user,
        }
    }

    /// True until the initial token check has finished.
    pub fn loading(&self) -> bool {
        self.phase != SessionPhase::Ready
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading() && self.user.is_some()
    }
}

/// Persist `token`, then confirm it with "who am I".
///
/// On failure the token is removed again and the error returned to the caller.
pub async fn login(client: &ApiClient, token: &str) -> Result<UserInfo, ApiError> {
    if let Err(e) = client.tokens().save(token) {
        tracing::warn!("Failed to persist token: {}", e);
    }
    match client.me().await {
        Ok(user) => {
            tracing::info!("Signed in as {}", user.email);
            Ok(user)
        }
        Err(e) => {
            clear_token(client);
            Err(e)
        }
    }
}

/// Initial check: resolve a persisted token to a user, silently dropping it
/// when the API rejects it.
pub async fn restore(client: &ApiClient) -> Option<UserInfo> {
    if !client.tokens().has_token() {
        return None;
    }
    match client.me().await {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::debug!("Persisted token rejected: {}", e);
            clear_token(client);
            None
        }
    }
}

/// Remove the persisted token. Always succeeds from the caller's view.
pub fn logout(client: &ApiClient) {
    clear_token(client);
    tracing::info!("Signed out");
}

fn clear_token(client: &ApiClient) {
    if let Err(e) = client.tokens().clear() {
        tracing::warn!("Failed to clear token: {}", e);
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The shared API client provided by [`AuthProvider`].
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_session() -> Session {
    Session {
        state: use_auth(),
        client: use_api(),
    }
}

/// Handle for the login/logout operations of the session store.
#[derive(Clone)]
pub struct Session {
    state: Signal<AuthState>,
    client: ApiClient,
}

impl Session {
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Complete a login with a freshly issued token.
    pub async fn login(&self, token: &str) -> Result<UserInfo, ApiError> {
        let user = login(&self.client, token).await?;
        let mut state = self.state;
        state.set(AuthState::ready(Some(user.clone())));
        Ok(user)
    }

    pub fn logout(&self) {
        logout(&self.client);
        let mut state = self.state;
        state.set(AuthState::ready(None));
    }
}

/// Forced logout after the API rejected the token: drop the user and reload
/// on the login screen.
fn expire_session(mut state: Signal<AuthState>) {
    state.set(AuthState::ready(None));
    hard_navigate(AUTH_PATH);
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);

    let client = use_hook(|| {
        let config = ClientConfig::load();
        tracing::info!("Using API at {}", config.api_base());
        ApiClient::new(&config, make_token_store())
            .with_expiry_hook(move || expire_session(auth_state))
    });

    use_context_provider(|| auth_state);
    use_context_provider(|| client.clone());

    // Check the persisted token once on mount
    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let mut state = auth_state;
            state.set(AuthState {
                phase: SessionPhase::Loading,
                user: None,
            });
            let user = restore(&client).await;
            state.set(AuthState::ready(user));
        }
    });

    rsx! {
        {children}
    }
}
