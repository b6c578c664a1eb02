//! Shared page chrome wrapping every route.

use leptos::prelude::*;

use super::footer::Footer;
use super::header::Header;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    redirect_legacy_hash_route();

    view! {
        <div class="layout">
            <Header/>
            <main class="layout__main">{children()}</main>
            <Footer/>
        </div>
    }
}

/// Rewrite `/#/profile`-style bookmarks to the equivalent path once hydrated.
fn redirect_legacy_hash_route() {
    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::state::nav::{Page, legacy_hash_route};

        let navigate = use_navigate();
        Effect::new(move |_| {
            let Some(hash) = web_sys::window().and_then(|w| w.location().hash().ok()) else {
                return;
            };
            if legacy_hash_route(&hash).is_some() {
                let page = Page::from_location(&hash);
                navigate(page.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
    }
}
