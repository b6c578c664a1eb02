//! Landing page.

use leptos::prelude::*;

use crate::content::{OFFICE_NAME, SERVICE_PREVIEWS, TRUST_BADGES, WHY_US, assets};
use crate::state::nav::Page;

#[component]
pub fn HomePage() -> impl IntoView {
    let contact = Page::Contact.path();

    view! {
        <div class="home">
            <section class="hero">
                <img class="hero__bg" src=assets::HERO_BG alt="Office Background"/>
                <div class="hero__content">
                    <span class="hero__badge">"28년 경력의 노동·산재 전문가"</span>
                    <h1 class="hero__title">"기업의 안전과 근로자의 권리," <br/> "확실하게 지킵니다."</h1>
                    <p class="hero__lead">
                        "노동부·근로복지공단 실무 경험을 바탕으로 한" <br/>
                        "기업 맞춤형 노동·산업안전 솔루션을 제공합니다."
                    </p>
                    <a href=contact class="button button--secondary button--lg">"무료 상담 신청하기"</a>
                </div>
            </section>

            <section class="trust">
                <div>
                    <h2 class="trust__title">{OFFICE_NAME}</h2>
                    <p>"복잡한 노동 행정, 28년 공직 노하우로 풀어드립니다."</p>
                </div>
                <div class="trust__badges">
                    {TRUST_BADGES
                        .iter()
                        .map(|(icon, label)| {
                            view! {
                                <div class="trust__badge">
                                    <img src=*icon alt="" class="trust__icon"/>
                                    <span>{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="preview">
                <h2 class="section-title">"전문 업무 분야"</h2>
                <p class="section-lead">"기업 운영에 필수적인 핵심 법률 서비스를 제공합니다."</p>
                <div class="preview__grid">
                    {SERVICE_PREVIEWS
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="preview__card">
                                    <span class=format!("icon icon--{}", service.icon) aria-hidden="true"></span>
                                    <h3>{service.title}</h3>
                                    <p>{service.summary}</p>
                                    <a href=Page::Services.path() class="preview__more">"자세히 보기"</a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="why-us">
                <div class="why-us__text">
                    <h2>"왜 노동부, 공단 출신 행정사여야 할까요?"</h2>
                    <p>
                        "이론에만 치우친 자문은 현장에서 통하지 않습니다. "
                        "수천 건의 실무 경험을 통해 행정기관의 판단 기준을 정확히 알고 있습니다. "
                        "문제가 발생한 후가 아니라, 발생하기 전 예방하는 것이 최상의 솔루션입니다."
                    </p>
                    <ul class="checklist">
                        {WHY_US.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>
                <div class="why-us__cta">
                    <h3>"무료 초기 진단"</h3>
                    <p>"귀사의 현재 노동/안전 리스크를 진단해드립니다."</p>
                    <a href=contact class="button button--secondary">"상담 신청하기"</a>
                </div>
            </section>

            <section class="contact-banner">
                <p>"복잡한 노동 법률 문제, 지금 바로 전문가와 상의하세요."</p>
                <a href=contact class="contact-banner__link">"상담 문의 바로가기"</a>
            </section>
        </div>
    }
}
