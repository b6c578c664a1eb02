//! Representative profile page.

use leptos::prelude::*;

use crate::content::{CAREER, QUALIFICATIONS, assets};

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="profile">
            <aside class="profile__side">
                <img src=assets::PROFILE_IMG alt="대표 행정사" class="profile__photo"/>
                <div class="profile__quals">
                    <h3>"자격 사항"</h3>
                    <ul>{QUALIFICATIONS.iter().map(|q| view! { <li>{*q}</li> }).collect_view()}</ul>
                </div>
            </aside>
            <div class="profile__main">
                <h1>"대표 행정사"</h1>
                <p class="profile__subtitle">"노동부·근로복지공단 28년 경력"</p>
                <p class="profile__greeting">
                    "\"안녕하십니까, 대표행정사입니다." <br/>
                    "행정기관 대응부터 예방까지, 기업의 든든한 파트너가 되겠습니다.\""
                </p>
                <p>
                    "28년간 고용노동부와 근로복지공단 등 공공기관에서 근무하며 쌓은 현장 경험은 "
                    "저의 가장 큰 자산입니다. 법전 속에 있는 이론이 아니라, 실제 현장에서 "
                    "어떻게 법이 적용되고 집행되는지를 누구보다 잘 알고 있습니다."
                </p>
                <h3 class="profile__heading">"주요 약력"</h3>
                <ul class="career">
                    {CAREER
                        .iter()
                        .map(|entry| {
                            view! {
                                <li class="career__item" class:career__item--current=entry.current>
                                    <span class="career__title">{entry.title}</span>
                                    {entry.detail.map(|d| view! { <span class="career__detail">{d}</span> })}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
