//! Check-In Form Component
//!
//! The passport form: nickname, event day, country booth, feedback tags
//! and a free-text comment. Submission itself lives in the app so the
//! stamped view can keep using the day/country selection afterwards.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::constants::{COUNTRIES, DAYS, FEEDBACK_TAGS};
use crate::models::{self, AppStatus};

#[component]
pub fn CheckInForm(
    nickname: ReadSignal<String>,
    set_nickname: WriteSignal<String>,
    selected_day: ReadSignal<String>,
    set_selected_day: WriteSignal<String>,
    selected_country: ReadSignal<String>,
    set_selected_country: WriteSignal<String>,
    selected_tags: ReadSignal<Vec<String>>,
    set_selected_tags: WriteSignal<Vec<String>>,
    comment: ReadSignal<String>,
    set_comment: WriteSignal<String>,
    status: ReadSignal<AppStatus>,
    error_msg: ReadSignal<Option<String>>,
    #[prop(into)] on_submit: Callback<web_sys::SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="check-in-form" on:submit=move |ev| on_submit.run(ev)>
            <div class="form-field">
                <label class="form-label">"Identification / 您的稱呼"</label>
                <input
                    type="text"
                    placeholder="請輸入暱稱或稱呼"
                    prop:value=move || nickname.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_nickname.set(input.value());
                    }
                />
            </div>

            <div class="form-field">
                <label class="form-label">"Travel Date / 參加天數"</label>
                <div class="day-row">
                    {DAYS.iter().map(|day| {
                        let day = *day;
                        let is_selected = move || selected_day.get() == day;
                        view! {
                            <button
                                type="button"
                                class=move || if is_selected() { "day-btn active" } else { "day-btn" }
                                on:click=move |_| set_selected_day.set(day.to_string())
                            >
                                {day}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="form-field">
                <label class="form-label">"Discovery / 我今天吃了..."</label>
                <div class="country-grid">
                    {COUNTRIES.iter().map(|country| {
                        let id = country.id;
                        let is_selected = move || selected_country.get() == id;
                        view! {
                            <button
                                type="button"
                                class=move || if is_selected() { "country-btn active" } else { "country-btn" }
                                on:click=move |_| set_selected_country.set(id.to_string())
                            >
                                <span class="country-icon">{country.icon}</span>
                                <span class="country-name">{country.name}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="form-field">
                <label class="form-label">"Experience Tags / 必推理由"</label>
                <div class="tag-row">
                    {FEEDBACK_TAGS.iter().map(|tag| {
                        let tag = *tag;
                        let is_selected = move || selected_tags.get().iter().any(|t| t == tag);
                        view! {
                            <button
                                type="button"
                                class=move || if is_selected() { "tag-btn active" } else { "tag-btn" }
                                on:click=move |_| {
                                    set_selected_tags.update(|tags| models::toggle_tag(tags, tag));
                                }
                            >
                                {tag}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="form-field">
                <label class="form-label">"Message / 詳細留言"</label>
                <textarea
                    placeholder="想多說一點嗎？（選填）"
                    prop:value=move || comment.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_comment.set(area.value());
                    }
                ></textarea>
            </div>

            {move || error_msg.get().map(|msg| view! {
                <p class="form-error">{msg}</p>
            })}

            <button
                type="submit"
                class="submit-btn"
                disabled=move || status.get() == AppStatus::Submitting
            >
                {move || if status.get() == AppStatus::Submitting {
                    "Passporting..."
                } else {
                    "Claim My Stamp"
                }}
            </button>
        </form>
    }
}
