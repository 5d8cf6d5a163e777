//! Food Passport App
//!
//! Main component: owns the form state and submission lifecycle, drives
//! the caption request, the fire-and-forget backend write and the
//! community feed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::backend;
use crate::components::{CheckInForm, CommunityFeed, SetupNotice, StampView, ToastOverlay};
use crate::constants::{self, DAYS, ERROR_RESET_DELAY_MS, FEED_REFRESH_DELAY_MS};
use crate::context::{AppContext, Toast};
use crate::error::PassportError;
use crate::gemini;
use crate::models::{self, AppStatus, CheckInEntry, FeedEntry};

/// zh-TW locale timestamp on a 24h clock, matching the sheet's format
fn local_timestamp() -> String {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("hour12"), &JsValue::FALSE);
    String::from(js_sys::Date::new_0().to_locale_string("zh-TW", &options.into()))
}

/// Client-generated entry token (epoch millis)
fn entry_id() -> String {
    format!("{}", js_sys::Date::now() as u64)
}

/// Dispatch the best-effort write, then await only the caption. The write's
/// outcome is never observed; the caption call itself never errors, so an
/// Err here means the submission path failed before the caption was asked.
async fn run_submission(entry: CheckInEntry, ai_context: String) -> Result<String, PassportError> {
    backend::send_check_in(&entry)?;
    let caption = gemini::generate_caption(
        &entry.nickname,
        &entry.favorite_country,
        &ai_context,
        &entry.event_day,
    )
    .await;
    Ok(caption)
}

#[component]
pub fn App() -> impl IntoView {
    // Editable fields
    let (nickname, set_nickname) = signal(String::new());
    let (selected_day, set_selected_day) = signal(DAYS[0].to_string());
    let (selected_country, set_selected_country) = signal(String::from("VN"));
    let (selected_tags, set_selected_tags) = signal(Vec::<String>::new());
    let (comment, set_comment) = signal(String::new());

    // Submission lifecycle
    let (status, set_status) = signal(AppStatus::Idle);
    let (caption, set_caption) = signal(String::new());
    let (error_msg, set_error_msg) = signal::<Option<String>>(None);

    // Community feed
    let (feed, set_feed) = signal(Vec::<FeedEntry>::new());
    let (loading_feed, set_loading_feed) = signal(false);

    let (toast, set_toast) = signal::<Option<Toast>>(None);
    let (feed_trigger, set_feed_trigger) = signal(0u32);
    let ctx = AppContext::new((toast, set_toast), (feed_trigger, set_feed_trigger));
    provide_context(ctx);

    // Load the feed on mount and whenever the trigger bumps
    Effect::new(move |_| {
        let trigger = feed_trigger.get();
        if !constants::backend_configured() {
            return;
        }
        web_sys::console::log_1(&format!("[FEED] Loading, trigger={trigger}").into());
        spawn_local(async move {
            set_loading_feed.set(true);
            match backend::fetch_feed().await {
                Ok(Some(entries)) => set_feed.set(entries),
                Ok(None) => {}
                // Silent degrade, the previous list stays up
                Err(e) => web_sys::console::error_1(&format!("[FEED] Fetch failed: {e}").into()),
            }
            set_loading_feed.set(false);
        });
    });

    let on_submit = Callback::new(move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let entry = match CheckInEntry::build(
            &nickname.get(),
            &selected_country.get(),
            &selected_tags.get(),
            &comment.get(),
            &selected_day.get(),
            local_timestamp(),
            entry_id(),
        ) {
            Ok(entry) => entry,
            Err(_) => {
                set_error_msg.set(Some("請輸入稱呼，開啟你的美食護照！".to_string()));
                return;
            }
        };

        set_status.set(AppStatus::Submitting);
        let ai_context = models::ai_feedback_context(&selected_tags.get(), &comment.get());

        spawn_local(async move {
            match run_submission(entry, ai_context).await {
                Ok(text) => {
                    set_caption.set(text);
                    set_status.set(AppStatus::Success);

                    // Give the fire-and-forget write time to land before re-reading
                    spawn_local(async move {
                        TimeoutFuture::new(FEED_REFRESH_DELAY_MS).await;
                        ctx.refresh_feed();
                    });

                    set_nickname.set(String::new());
                    set_selected_tags.set(Vec::new());
                    set_comment.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Submit failed: {e}").into());
                    set_error_msg.set(Some("系統同步失敗，請再試一次！".to_string()));
                    set_status.set(AppStatus::Error);
                    TimeoutFuture::new(ERROR_RESET_DELAY_MS).await;
                    set_status.set(AppStatus::Idle);
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <ToastOverlay />

            <main class="passport-main">
                <header class="passport-header">
                    <p class="event-badge">"International Week 2026"</p>
                    <h1>"國際週美食護照"</h1>
                    <p class="subtitle">"Digital Food Passport"</p>
                </header>

                <SetupNotice />

                <div class="passport-card">
                    <Show
                        when=move || status.get() == AppStatus::Success
                        fallback=move || view! {
                            <CheckInForm
                                nickname=nickname
                                set_nickname=set_nickname
                                selected_day=selected_day
                                set_selected_day=set_selected_day
                                selected_country=selected_country
                                set_selected_country=set_selected_country
                                selected_tags=selected_tags
                                set_selected_tags=set_selected_tags
                                comment=comment
                                set_comment=set_comment
                                status=status
                                error_msg=error_msg
                                on_submit=on_submit
                            />
                        }
                    >
                        <StampView
                            caption=caption
                            selected_country=selected_country
                            set_status=set_status
                        />
                    </Show>
                </div>

                <CommunityFeed feed=feed loading=loading_feed />
            </main>
        </div>
    }
}
