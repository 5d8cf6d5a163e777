//! Setup Notice Component
//!
//! Persistent banner shown while no backend deployment is configured.
//! With the banner up, writes and feed reads are both suppressed.

use leptos::prelude::*;

use crate::constants;

#[component]
pub fn SetupNotice() -> impl IntoView {
    view! {
        <Show when=move || !constants::backend_configured()>
            <div class="setup-notice">
                <p>"資料庫尚未連動"</p>
                <p class="setup-hint">
                    "請部署 Apps Script 網頁應用程式後，將網址填入 constants.rs 的 SCRIPT_URL"
                </p>
            </div>
        </Show>
    }
}
