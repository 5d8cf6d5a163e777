//! Caption Generator
//!
//! Asks the hosted model for a short share-ready recommendation.
//! `generate_caption` always resolves to usable text: every failure mode
//! folds into one of two fixed fallback templates at this boundary, so the
//! caller never sees an error.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::PassportError;

const GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

fn build_prompt(nickname: &str, country: &str, feedback_context: &str, day: &str) -> String {
    format!(
        "你是一位「國際週社群小編」。\n\
         顧客（暱稱: {nickname}）在國際週的 {day} 吃了「{country}」的小吃。\n\
         他的反饋是：{feedback_context}。\n\
         請根據以上資訊，寫一段「適合發在 IG/FB 動態」的超級推薦語（25字以內）。\n\
         語氣要非常興奮、有吸引力，像是發現了隱藏美食一樣。\n\
         必須包含：該國家名稱、活動天數、以及一個關於味道的正評。\n\
         請使用台灣繁體中文，加上亮眼的 Emoji 📸🔥🌟"
    )
}

/// Fallback when the model answered but the text came back empty
pub fn fallback_empty_response(country: &str, day: &str) -> String {
    format!("國際週 {day} 必吃！{country} 的美味讓我瞬間飛到異國，大家快來！✈️🍴")
}

/// Fallback when the request itself failed (auth, network, decode)
pub fn fallback_request_failed(country: &str, day: &str) -> String {
    format!("國際週 {day} 驚喜發現！{country} 的小吃真的很有誠意，推一個！👍❤️")
}

/// One model request, high-variability sampling. `Ok(None)` = the model
/// responded but produced no text.
async fn request_caption(prompt: String) -> Result<Option<String>, PassportError> {
    let api_key = constants::GEMINI_API_KEY
        .ok_or_else(|| PassportError::Generation("API key not configured".into()))?;

    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        generation_config: GenerationConfig {
            temperature: 1.0,
            top_p: 0.9,
        },
    };

    let response: GenerateResponse = reqwest::Client::new()
        .post(GENERATE_URL)
        .header("x-goog-api-key", api_key)
        .json(&request)
        .send()
        .await?
        .json()
        .await?;

    let text = response
        .candidates
        .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
        .and_then(|c| c.content)
        .and_then(|mut c| if c.parts.is_empty() { None } else { Some(c.parts.remove(0)) })
        .map(|p| p.text)
        .filter(|t| !t.trim().is_empty());
    Ok(text)
}

/// Generate the share caption for a check-in. Never errors; repeated calls
/// with identical inputs may differ (sampling is intentionally random).
pub async fn generate_caption(
    nickname: &str,
    country: &str,
    feedback_context: &str,
    day: &str,
) -> String {
    let prompt = build_prompt(nickname, country, feedback_context, day);
    match request_caption(prompt).await {
        Ok(Some(text)) => text,
        Ok(None) => fallback_empty_response(country, day),
        Err(e) => {
            web_sys::console::error_1(&format!("[GEMINI] {e}").into());
            fallback_request_failed(country, day)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_all_inputs() {
        let prompt = build_prompt("Amy", "越南", "評價：🔥 味道超道地。留言：超好吃", "Day 1");
        assert!(prompt.contains("Amy"));
        assert!(prompt.contains("越南"));
        assert!(prompt.contains("Day 1"));
        assert!(prompt.contains("🔥 味道超道地"));
        assert!(prompt.contains("25字以內"));
    }

    #[test]
    fn test_fallbacks_interpolate_country_and_day() {
        assert_eq!(
            fallback_request_failed("越南", "Day 1"),
            "國際週 Day 1 驚喜發現！越南 的小吃真的很有誠意，推一個！👍❤️"
        );
        assert_eq!(
            fallback_empty_response("日本", "Day 3"),
            "國際週 Day 3 必吃！日本 的美味讓我瞬間飛到異國，大家快來！✈️🍴"
        );
    }

    #[test]
    fn test_fallbacks_are_never_empty_and_distinct() {
        let a = fallback_empty_response("泰國", "Day 2");
        let b = fallback_request_failed("泰國", "Day 2");
        assert!(!a.is_empty());
        assert!(!b.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_response_decoding_shapes() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"好吃！"}]}}]}"#;
        let resp: GenerateResponse = serde_json::from_str(body).expect("Parse failed");
        let text = resp.candidates.unwrap().remove(0).content.unwrap().parts.remove(0).text;
        assert_eq!(text, "好吃！");

        let empty: GenerateResponse = serde_json::from_str("{}").expect("Parse failed");
        assert!(empty.candidates.is_none());
    }

    #[test]
    fn test_generation_config_wire_names() {
        let config = GenerationConfig { temperature: 1.0, top_p: 0.9 };
        let json = serde_json::to_value(&config).expect("Serialize failed");
        assert_eq!(json["temperature"], 1.0);
        assert_eq!(json["topP"], 0.9);
    }
}
