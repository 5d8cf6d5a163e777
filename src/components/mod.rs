//! UI Components
//!
//! Leptos components for the passport form, stamp view, feed and toasts.

mod check_in_form;
mod community_feed;
mod setup_notice;
mod stamp_view;
mod toast;

pub use check_in_form::CheckInForm;
pub use community_feed::CommunityFeed;
pub use setup_notice::SetupNotice;
pub use stamp_view::StampView;
pub use toast::ToastOverlay;
