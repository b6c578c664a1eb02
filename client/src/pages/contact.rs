//! Contact page: inquiry form, office details, and map.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `InquiryFlow` for the lifetime of the page. Submitting posts the
//! form to the server and always ends on the confirmation panel; delivery
//! errors are only logged.

use inquiry::{Category, Field};
use leptos::prelude::*;

use crate::content::{ADDRESS_STREET, ADDRESS_SUITE, BUSINESS_HOURS, PHONE, map_embed_url};
use crate::state::inquiry::InquiryFlow;

#[component]
pub fn ContactPage() -> impl IntoView {
    let flow = RwSignal::new(InquiryFlow::default());

    view! {
        <div class="contact">
            <div class="contact__intro">
                <h1>"상담 문의 및 오시는 길"</h1>
                <p>"궁금하신 사항을 남겨주시면 친절하고 신속하게 답변해 드립니다."</p>
            </div>
            <div class="contact__grid">
                <div class="contact__panel">
                    <Show when=move || flow.with(InquiryFlow::is_submitted) fallback=move || view! { <InquiryFormPanel flow=flow/> }>
                        <Confirmation flow=flow/>
                    </Show>
                </div>
                <OfficeInfo/>
            </div>
        </div>
    }
}

#[component]
fn InquiryFormPanel(flow: RwSignal<InquiryFlow>) -> impl IntoView {
    let submitting = move || flow.with(InquiryFlow::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(started) = flow.try_update(InquiryFlow::begin_submit) else {
            return;
        };
        let snapshot = match started {
            Ok(snapshot) => snapshot,
            Err(e) => {
                leptos::logging::warn!("inquiry not submitted: {e}");
                return;
            }
        };
        leptos::logging::log!("sending inquiry ({})", snapshot.category.value());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let delivery = crate::net::api::submit_inquiry(&snapshot).await;
            flow.update(|f| {
                if let Err(e) = f.finish_submit(delivery) {
                    leptos::logging::warn!("inquiry state: {e}");
                }
            });
        });
    };

    let on_category = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        update_field(flow, Field::Category, value);
    };

    view! {
        <h2 class="contact__heading">"무료 상담 신청"</h2>
        <form class="inquiry-form" on:submit=on_submit>
            <div class="inquiry-form__row">
                <TextField flow=flow field=Field::CompanyName label="회사명" input_type="text" placeholder="(주)기업명"/>
                <TextField flow=flow field=Field::ContactName label="담당자명" input_type="text" placeholder="홍길동"/>
            </div>
            <div class="inquiry-form__row">
                <TextField flow=flow field=Field::Phone label="연락처" input_type="tel" placeholder="010-1234-5678"/>
                <TextField flow=flow field=Field::Email label="이메일" input_type="email" placeholder="example@company.com"/>
            </div>
            <div class="inquiry-form__field">
                <label for="type">"문의 분야"</label>
                <select
                    id="type"
                    name="type"
                    prop:value=move || flow.with(|f| f.form().category.value())
                    on:change=on_category
                >
                    {Category::ALL
                        .into_iter()
                        .map(|c| view! { <option value=c.value()>{c.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="inquiry-form__field">
                <label for="message">"상세 내용"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="4"
                    required
                    placeholder="문의하실 내용을 간략히 적어주세요."
                    prop:value=move || flow.with(|f| f.form().message.clone())
                    on:input=move |ev| update_field(flow, Field::Message, event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="button button--secondary button--block" disabled=submitting>
                <Show when=submitting fallback=|| "상담 신청하기">
                    <span class="spinner" aria-hidden="true"></span>
                    "전송 중..."
                </Show>
            </button>
        </form>
    }
}

#[component]
fn TextField(
    flow: RwSignal<InquiryFlow>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let name = field.name();

    view! {
        <div class="inquiry-form__field">
            <label for=name>{label}</label>
            <input
                type=input_type
                id=name
                name=name
                required
                placeholder=placeholder
                prop:value=move || flow.with(|f| f.form().get(field).to_owned())
                on:input=move |ev| update_field(flow, field, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn Confirmation(flow: RwSignal<InquiryFlow>) -> impl IntoView {
    let on_reset = move |_| {
        flow.update(|f| {
            if let Err(e) = f.reset() {
                leptos::logging::warn!("inquiry reset: {e}");
            }
        });
    };

    view! {
        <div class="confirmation">
            <span class="icon icon--check-circle" aria-hidden="true"></span>
            <h3>"상담 신청이 완료되었습니다!"</h3>
            <p>"남겨주신 내용을 확인 후," <br/> "담당자가 신속하게 연락드리겠습니다."</p>
            <button type="button" class="button button--primary" on:click=on_reset>
                "추가 문의하기"
            </button>
        </div>
    }
}

#[component]
fn OfficeInfo() -> impl IntoView {
    view! {
        <div class="office-info">
            <div class="office-info__card">
                <h2 class="contact__heading">"사무소 정보"</h2>
                <ul>
                    <li>
                        <span class="office-info__label">"전화번호"</span>
                        <span class="office-info__value">{PHONE}</span>
                    </li>
                    <li>
                        <span class="office-info__label">"주소"</span>
                        <span class="office-info__value">{ADDRESS_STREET}</span>
                        <span>{ADDRESS_SUITE}</span>
                    </li>
                </ul>
                <h3>"운영 시간"</h3>
                <p>{BUSINESS_HOURS}</p>
            </div>
            <div class="office-info__map">
                <iframe
                    src=map_embed_url(ADDRESS_STREET)
                    width="100%"
                    height="100%"
                    style="border: 0"
                    allowfullscreen=true
                    title="Office Location"
                    {..leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                ></iframe>
            </div>
        </div>
    }
}

fn update_field(flow: RwSignal<InquiryFlow>, field: Field, value: String) {
    flow.update(|f| {
        if let Err(e) = f.update_field(field, value) {
            leptos::logging::warn!("inquiry field {}: {e}", field.name());
        }
    });
}
