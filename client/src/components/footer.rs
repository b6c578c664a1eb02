//! Site footer with quick links and office contact details.

use leptos::prelude::*;

use crate::content::{ADDRESS_STREET, FOOTER_LINKS, OFFICE_NAME, PHONE, TAGLINE, copyright};

#[component]
pub fn Footer() -> impl IntoView {
    let year = time::OffsetDateTime::now_utc().year();

    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div>
                    <h3 class="site-footer__title">
                        <span class="icon icon--shield-check" aria-hidden="true"></span>
                        {OFFICE_NAME}
                    </h3>
                    <p class="site-footer__tagline">{TAGLINE}</p>
                </div>
                <div>
                    <h4 class="site-footer__heading">"바로가기"</h4>
                    <ul class="site-footer__links">
                        {FOOTER_LINKS
                            .iter()
                            .map(|link| view! { <li><a href=link.page.path()>{link.label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="site-footer__heading">"연락처"</h4>
                    <ul class="site-footer__contact">
                        <li>
                            <span class="icon icon--phone" aria-hidden="true"></span>
                            <span>{PHONE}</span>
                        </li>
                        <li>
                            <span class="icon icon--map-pin" aria-hidden="true"></span>
                            <span>{format!("{ADDRESS_STREET}, 1202호")}</span>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="site-footer__legal">
                <p>{copyright(year)}</p>
            </div>
        </footer>
    }
}
