//! Site header with navigation and the mobile menu toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::{BRAND, HEADER_CTA, MOBILE_CTA, NAV_LINKS};
use crate::state::nav::{NavState, Page};

#[component]
pub fn Header() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let location = use_location();
    let current_page = Memo::new(move |_| Page::from_location(&location.pathname.get()));

    let toggle_menu = move |_| nav.update(NavState::toggle);
    let close_menu = move |_| nav.update(NavState::close);

    view! {
        <header class="site-header">
            <div class="site-header__bar">
                <a href="/" class="site-header__brand">
                    <span class="icon icon--shield-check" aria-hidden="true"></span>
                    <span>{BRAND}</span>
                </a>

                <nav class="site-header__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let page = link.page;
                            view! {
                                <a
                                    href=page.path()
                                    class="site-header__link"
                                    class:site-header__link--active=move || current_page.get() == page
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <a href=Page::Contact.path() class="site-header__cta">{HEADER_CTA}</a>

                <button
                    type="button"
                    class="site-header__toggle"
                    aria-label="메뉴"
                    aria-expanded=move || nav.get().mobile_menu_open.to_string()
                    on:click=toggle_menu
                >
                    <span
                        class="icon"
                        class:icon--x=move || nav.get().mobile_menu_open
                        class:icon--menu=move || !nav.get().mobile_menu_open
                        aria-hidden="true"
                    ></span>
                </button>
            </div>

            <Show when=move || nav.get().mobile_menu_open>
                <div class="mobile-menu">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let page = link.page;
                            view! {
                                <a
                                    href=page.path()
                                    class="mobile-menu__link"
                                    class:mobile-menu__link--active=move || current_page.get() == page
                                    on:click=close_menu
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=Page::Contact.path() class="mobile-menu__cta" on:click=close_menu>
                        {MOBILE_CTA}
                    </a>
                </div>
            </Show>
        </header>
    }
}
