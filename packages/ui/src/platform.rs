//! Platform seams: token persistence, hard navigation, and timers.
//!
//! - **Web** (WASM + `web` feature): `localStorage`, `window.location`, `gloo-timers`
//! - **Native**: token file under the data dir, router-only navigation, `tokio::time`

use std::rc::Rc;
use std::time::Duration;

use store::TokenStore;

/// Create the platform token store.
pub fn make_token_store() -> Rc<dyn TokenStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageTokenStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Rc::new(store::MemoryTokenStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(store::FileTokenStore::in_data_dir())
    }
}

/// Full-page navigation, dropping all in-memory state.
///
/// Native builds have no page to reload; the route guards pick up the cleared
/// session instead.
pub fn hard_navigate(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate to {}: {:?}", url, e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("Hard navigation to {} handled by the router", url);
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
