//! Application Context
//!
//! Shared state provided via Leptos Context API: the toast notification
//! slot and the feed reload trigger.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::constants::TOAST_DURATION_MS;

#[derive(Debug, Clone, PartialEq)]
pub enum ToastKind {
    Success,
    Info,
}

/// One transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current toast, if any - read
    pub toast: ReadSignal<Option<Toast>>,
    set_toast: WriteSignal<Option<Toast>>,
    /// Trigger to reload the community feed - read
    pub feed_trigger: ReadSignal<u32>,
    set_feed_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>),
        feed_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            toast: toast.0,
            set_toast: toast.1,
            feed_trigger: feed_trigger.0,
            set_feed_trigger: feed_trigger.1,
        }
    }

    /// Show a toast, auto-dismissing after the fixed delay
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) {
        self.set_toast.set(Some(Toast {
            message: message.into(),
            kind,
        }));
        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            set_toast.set(None);
        });
    }

    /// Trigger a reload of the community feed
    pub fn refresh_feed(&self) {
        self.set_feed_trigger.update(|v| *v += 1);
    }
}
