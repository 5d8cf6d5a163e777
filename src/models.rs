//! Frontend Models
//!
//! Data structures matching the backend sheet contract, plus the pure
//! submit-time helpers (entry building, tag toggling, AI context).

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::PassportError;

/// One check-in, built at submit time and sent to the backend as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInEntry {
    pub nickname: String,
    pub favorite_country: String,
    pub selected_tags: Vec<String>,
    pub feedback: String,
    pub event_day: String,
    pub timestamp: String,
    pub id: String,
}

impl CheckInEntry {
    /// Build an entry from the raw form fields.
    ///
    /// The only validation anywhere: nickname must be non-empty after
    /// trimming, otherwise no entry (and no network call) happens.
    /// The country id is resolved to its display name; an id outside the
    /// booth list degrades to an empty name rather than failing.
    pub fn build(
        nickname: &str,
        country_id: &str,
        selected_tags: &[String],
        feedback: &str,
        event_day: &str,
        timestamp: String,
        id: String,
    ) -> Result<Self, PassportError> {
        if nickname.trim().is_empty() {
            return Err(PassportError::MissingNickname);
        }
        Ok(Self {
            nickname: nickname.to_string(),
            favorite_country: constants::country_name(country_id)
                .unwrap_or_default()
                .to_string(),
            selected_tags: selected_tags.to_vec(),
            feedback: feedback.to_string(),
            event_day: event_day.to_string(),
            timestamp,
            id,
        })
    }
}

/// One row of the community feed as the backend returns it
/// (tags already flattened to a display string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    pub event_day: String,
    pub timestamp: String,
    pub nickname: String,
    pub favorite_country: String,
    pub tags: String,
    pub feedback: String,
}

/// Feed read response; a missing `feed` field means "no data", not an error
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    pub feed: Option<Vec<FeedEntry>>,
}

/// Submission lifecycle for the one form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Toggle membership of `tag` in the selection, preserving the order the
/// remaining tags were picked in
pub fn toggle_tag(tags: &mut Vec<String>, tag: &str) {
    if let Some(pos) = tags.iter().position(|t| t == tag) {
        tags.remove(pos);
    } else {
        tags.push(tag.to_string());
    }
}

/// Feedback context handed to the caption generator
pub fn ai_feedback_context(tags: &[String], comment: &str) -> String {
    format!("評價：{}。留言：{}", tags.join(", "), comment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(nickname: &str) -> Result<CheckInEntry, PassportError> {
        CheckInEntry::build(
            nickname,
            "VN",
            &["🔥 味道超道地".to_string()],
            "超好吃",
            "Day 1",
            "2026/3/2 12:00:00".to_string(),
            "1770000000000".to_string(),
        )
    }

    #[test]
    fn test_build_entry_resolves_country_name() {
        let entry = entry("Amy").expect("Build failed");
        assert_eq!(entry.nickname, "Amy");
        assert_eq!(entry.favorite_country, "越南");
        assert_eq!(entry.event_day, "Day 1");
        assert_eq!(entry.selected_tags, vec!["🔥 味道超道地".to_string()]);
        assert_eq!(entry.feedback, "超好吃");
    }

    #[test]
    fn test_build_entry_rejects_empty_nickname() {
        assert!(matches!(entry(""), Err(PassportError::MissingNickname)));
        assert!(matches!(entry("   "), Err(PassportError::MissingNickname)));
    }

    #[test]
    fn test_build_entry_keeps_nickname_as_typed() {
        let entry = entry(" Amy ").expect("Build failed");
        assert_eq!(entry.nickname, " Amy ");
    }

    #[test]
    fn test_build_entry_unknown_country_degrades_to_empty_name() {
        let entry = CheckInEntry::build(
            "Amy",
            "ZZ",
            &[],
            "",
            "Day 2",
            String::new(),
            String::new(),
        )
        .expect("Build failed");
        assert_eq!(entry.favorite_country, "");
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = entry("Amy").expect("Build failed");
        let json = serde_json::to_value(&entry).expect("Serialize failed");
        assert_eq!(json["favoriteCountry"], "越南");
        assert_eq!(json["eventDay"], "Day 1");
        assert_eq!(json["selectedTags"][0], "🔥 味道超道地");
        assert!(json.get("favorite_country").is_none());
    }

    #[test]
    fn test_toggle_tag_twice_restores_selection() {
        let mut tags = vec!["😋 吃了還想吃".to_string()];
        toggle_tag(&mut tags, "🔥 味道超道地");
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(&"🔥 味道超道地".to_string()));
        toggle_tag(&mut tags, "🔥 味道超道地");
        assert_eq!(tags, vec!["😋 吃了還想吃".to_string()]);
    }

    #[test]
    fn test_toggle_tag_removal_keeps_order_of_rest() {
        let mut tags = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        toggle_tag(&mut tags, "b");
        assert_eq!(tags, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_ai_feedback_context_format() {
        let tags = vec!["🔥 味道超道地".to_string(), "😋 吃了還想吃".to_string()];
        assert_eq!(
            ai_feedback_context(&tags, "超好吃"),
            "評價：🔥 味道超道地, 😋 吃了還想吃。留言：超好吃"
        );
        assert_eq!(ai_feedback_context(&[], ""), "評價：。留言：");
    }

    #[test]
    fn test_feed_response_missing_field_is_no_data() {
        let resp: FeedResponse = serde_json::from_str("{}").expect("Parse failed");
        assert!(resp.feed.is_none());
    }

    #[test]
    fn test_feed_response_decodes_entries() {
        let body = r#"{"feed":[{
            "eventDay":"Day 1",
            "timestamp":"2026/3/2 12:00:00",
            "nickname":"Amy",
            "favoriteCountry":"越南",
            "tags":"🔥 味道超道地",
            "feedback":"超好吃"
        }]}"#;
        let resp: FeedResponse = serde_json::from_str(body).expect("Parse failed");
        let feed = resp.feed.expect("Feed missing");
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].nickname, "Amy");
        assert_eq!(feed[0].favorite_country, "越南");
    }
}
