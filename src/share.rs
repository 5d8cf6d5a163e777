//! Share Helpers
//!
//! Compose the hashtag-suffixed share text and push it out through the
//! clipboard, the platform share sheet, or the Facebook sharer URL.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

const SHARE_PREFIX: &str = "【國際週美食護照】";
const SHARE_HASHTAGS: &str = "#InternationalWeek #美食護照 #NTNU";

/// Final share text: fixed prefix, caption verbatim, fixed hashtag line
pub fn compose_share_text(caption: &str) -> String {
    format!("{SHARE_PREFIX}{caption}\n{SHARE_HASHTAGS}")
}

/// Facebook sharer URL with the page url and caption pre-filled
pub fn facebook_share_url(page_url: &str, quote: &str) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
        utf8_percent_encode(page_url, NON_ALPHANUMERIC),
        utf8_percent_encode(quote, NON_ALPHANUMERIC)
    )
}

/// Copy the composed share text to the clipboard. Returns whether the text
/// actually landed there.
pub async fn copy_share_text(caption: &str) -> bool {
    let text = compose_share_text(caption);
    write_clipboard(&text).await
}

async fn write_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard = window.navigator().clipboard();
    match JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => true,
        // Older webviews reject the async API, fall back to execCommand
        Err(_) => legacy_copy(text),
    }
}

fn legacy_copy(text: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Ok(element) = document.create_element("textarea") else {
        return false;
    };
    let Ok(area) = element.dyn_into::<web_sys::HtmlTextAreaElement>() else {
        return false;
    };
    area.set_value(text);
    let Some(body) = document.body() else {
        return false;
    };
    if body.append_child(&area).is_err() {
        return false;
    }
    area.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .map(|d| d.exec_command("copy").unwrap_or(false))
        .unwrap_or(false);
    let _ = body.remove_child(&area);
    copied
}

/// Whether the platform exposes a native share sheet
pub fn share_sheet_available() -> bool {
    web_sys::window()
        .map(|w| {
            js_sys::Reflect::has(w.navigator().as_ref(), &JsValue::from_str("share"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Open the native share sheet with the composed text. Errors when the
/// sheet is unavailable or the user dismisses it; callers fall back to
/// copy-and-instruct.
pub async fn open_share_sheet(title: &str, caption: &str) -> Result<(), ()> {
    let window = web_sys::window().ok_or(())?;
    let data = web_sys::ShareData::new();
    data.set_title(title);
    data.set_text(&compose_share_text(caption));
    if let Ok(href) = window.location().href() {
        data.set_url(&href);
    }
    JsFuture::from(window.navigator().share_with_data(&data))
        .await
        .map(|_| ())
        .map_err(|_| ())
}

/// Open the Facebook sharer in a new tab with the caption pre-filled
pub fn open_facebook_share(caption: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let page_url = window.location().href().unwrap_or_default();
    let url = facebook_share_url(&page_url, caption);
    if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
        web_sys::console::error_1(&format!("[SHARE] window.open failed: {e:?}").into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_text_has_prefix_and_hashtag_suffix() {
        let text = compose_share_text("越南小吃超好吃！");
        assert!(text.starts_with("【國際週美食護照】越南小吃超好吃！"));
        assert!(text.ends_with("#InternationalWeek #美食護照 #NTNU"));
    }

    #[test]
    fn test_share_text_suffix_survives_line_breaks_and_emoji() {
        let text = compose_share_text("第一行 🔥\n第二行 ✈️");
        assert!(text.contains("第一行 🔥\n第二行 ✈️"));
        assert!(text.ends_with("#InternationalWeek #美食護照 #NTNU"));

        let empty = compose_share_text("");
        assert!(empty.ends_with("#InternationalWeek #美食護照 #NTNU"));
    }

    #[test]
    fn test_facebook_share_url_encodes_both_params() {
        let url = facebook_share_url("https://example.com/a?b=1", "超好吃 🔥");
        assert!(url.starts_with("https://www.facebook.com/sharer/sharer.php?u="));
        assert!(url.contains("https%3A%2F%2Fexample%2Ecom"));
        assert!(url.contains("&quote="));
        // No raw multibyte or space characters leak into the query string
        assert!(url.is_ascii());
        assert!(!url.contains(' '));
    }
}
