//! Toast Overlay Component
//!
//! Renders the transient notification from the app context.

use leptos::prelude::*;

use crate::context::{AppContext, ToastKind};

#[component]
pub fn ToastOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast success",
                ToastKind::Info => "toast info",
            };
            view! {
                <div class="toast-overlay">
                    <div class=class>{toast.message}</div>
                </div>
            }
        })}
    }
}
