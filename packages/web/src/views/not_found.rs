use dioxus::prelude::*;

use crate::Route;

/// Unknown paths go back to the landing page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();

    use_hook(|| {
        tracing::debug!("No route for /{}", segments.join("/"));
        nav.replace(Route::Landing {});
    });

    rsx! {}
}
