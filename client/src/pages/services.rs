//! Service areas page.

use leptos::prelude::*;

use crate::content::SERVICE_AREAS;
use crate::state::nav::Page;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="services">
            <div class="services__banner">
                <h1>"전문 업무 분야"</h1>
                <p>"기업의 지속 가능한 성장을 위해 반드시 필요한 핵심 법률 서비스를 제공합니다."</p>
            </div>
            <div class="services__list">
                {SERVICE_AREAS
                    .iter()
                    .map(|area| {
                        view! {
                            <section class="service" id=area.id>
                                <img src=area.image alt=area.title class="service__image"/>
                                <div class="service__body">
                                    <h2>{area.title}</h2>
                                    <ul class="checklist">
                                        {area.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                    </ul>
                                    <a href=Page::Contact.path() class="button button--primary">
                                        "해당 분야 상담 신청"
                                    </a>
                                </div>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
