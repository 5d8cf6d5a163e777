//! Community Feed Component
//!
//! Most-recent-first list of other visitors' check-ins, with a manual
//! refresh control. Purely display; the app owns the fetch.

use leptos::prelude::*;

use crate::constants;
use crate::context::AppContext;
use crate::models::FeedEntry;

#[component]
pub fn CommunityFeed(
    feed: ReadSignal<Vec<FeedEntry>>,
    loading: ReadSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <section class="community-feed">
            <div class="feed-header">
                <h3>"大家都在吃"</h3>
                <button
                    class="feed-refresh-btn"
                    disabled=move || loading.get()
                    on:click=move |_| ctx.refresh_feed()
                >
                    {move || if loading.get() { "更新中..." } else { "重新整理" }}
                </button>
            </div>

            <Show when=move || constants::backend_configured() && feed.get().is_empty() && !loading.get()>
                <p class="feed-empty">"還沒有人打卡，快來搶頭香！"</p>
            </Show>

            <ul class="feed-list">
                {move || feed.get().iter().map(|entry| feed_item(entry)).collect_view()}
            </ul>
        </section>
    }
}

fn feed_item(entry: &FeedEntry) -> impl IntoView {
    let FeedEntry {
        event_day,
        timestamp,
        nickname,
        favorite_country,
        tags,
        feedback,
    } = entry.clone();
    view! {
        <li class="feed-item">
            <p class="feed-headline">
                <span class="feed-nickname">{nickname}</span>
                " 推薦了 "
                <span class="feed-country">{favorite_country}</span>
            </p>
            <p class="feed-meta">{event_day} " · " {timestamp}</p>
            {(!tags.is_empty()).then(|| view! { <p class="feed-tags">{tags}</p> })}
            {(!feedback.is_empty()).then(|| view! { <p class="feed-comment">{feedback}</p> })}
        </li>
    }
}
