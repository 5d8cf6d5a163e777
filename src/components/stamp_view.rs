//! Stamp View Component
//!
//! Shown after a successful check-in: the booth's stamp, the generated
//! caption and the three share actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::constants;
use crate::context::{AppContext, ToastKind};
use crate::models::AppStatus;
use crate::share;

#[component]
pub fn StampView(
    caption: ReadSignal<String>,
    selected_country: ReadSignal<String>,
    set_status: WriteSignal<AppStatus>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let share_ig = move |_| {
        let text = caption.get();
        spawn_local(async move {
            // Copy first so a dismissed or missing share sheet still leaves
            // the text ready to paste
            share::copy_share_text(&text).await;
            if share::share_sheet_available() {
                match share::open_share_sheet("國際週美食推薦", &text).await {
                    Ok(()) => ctx.show_toast("分享選單已開啟！", ToastKind::Info),
                    Err(()) => ctx.show_toast("文案已複製！請手動開啟 IG 發佈 📸", ToastKind::Success),
                }
            } else {
                ctx.show_toast("文案已複製！請開啟 IG 發佈限動 📸", ToastKind::Success);
            }
        });
    };

    let share_fb = move |_| {
        let text = caption.get();
        spawn_local(async move {
            share::copy_share_text(&text).await;
        });
        share::open_facebook_share(&caption.get());
        ctx.show_toast("即將前往臉書，文案已同步複製！", ToastKind::Info);
    };

    let copy_caption = move |_| {
        let text = caption.get();
        spawn_local(async move {
            if share::copy_share_text(&text).await {
                ctx.show_toast("文案已複製！快去發限動貼上吧 ✨", ToastKind::Success);
            }
        });
    };

    view! {
        <div class="stamp-view">
            <div class="stamp-badge">
                <span class="stamp-icon">
                    {move || constants::country_icon(&selected_country.get()).unwrap_or("🍕")}
                </span>
                <span class="stamp-verified">"Verified"</span>
            </div>
            <h2 class="stamp-title">"打卡完成！"</h2>
            <p class="stamp-subtitle">"獲得了此地戳印"</p>

            <div class="caption-box">
                <p class="caption-label">"AI 幫你寫好了推薦語："</p>
                <p class="caption-text">{move || format!("\"{}\"", caption.get())}</p>
            </div>

            <div class="share-row">
                <button class="share-btn ig" on:click=share_ig>"分享到 IG"</button>
                <button class="share-btn fb" on:click=share_fb>"分享到 FB"</button>
            </div>
            <button class="copy-btn" on:click=copy_caption>"僅複製推薦文案"</button>

            <button class="back-btn" on:click=move |_| set_status.set(AppStatus::Idle)>
                "Back / 繼續下一站"
            </button>
        </div>
    }
}
