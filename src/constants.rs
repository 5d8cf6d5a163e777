//! Event Reference Data
//!
//! Fixed enumerations for the event (days, country booths, feedback tags)
//! plus the compiled-in endpoint configuration.

/// One country booth at the event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Country {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const DAYS: &[&str] = &["Day 1", "Day 2", "Day 3"];

pub const COUNTRIES: &[Country] = &[
    Country { id: "VN", name: "越南", icon: "🇻🇳" },
    Country { id: "TH", name: "泰國", icon: "🇹🇭" },
    Country { id: "ID", name: "印尼", icon: "🇮🇩" },
    Country { id: "FR", name: "法國", icon: "🇫🇷" },
    Country { id: "GB", name: "英國", icon: "🇬🇧" },
    Country { id: "KR", name: "韓國", icon: "🇰🇷" },
    Country { id: "JP", name: "日本", icon: "🇯🇵" },
];

pub const FEEDBACK_TAGS: &[&str] = &[
    "🔥 味道超道地",
    "😋 吃了還想吃",
    "📸 看起來超美",
    "💰 CP值無敵強",
    "🏮 攤位超漂亮",
    "💖 服務超熱情",
];

/// Deployed Apps Script web-app URL acting as write sink and feed source.
/// Leave non-matching (or empty) to run the UI without a backend.
pub const SCRIPT_URL: &str =
    "https://script.google.com/macros/s/AKfycbx9plr2nCZ8g52HcPsAqmL9r4Jz7R0csh3ZmeNr2e3R4F0RV0FP9hkxYhnLwiyGqOnW/exec";

/// Model service credential, baked in at build time
pub const GEMINI_API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");

/// Delay before re-reading the feed after a submit, gives the
/// fire-and-forget write time to land
pub const FEED_REFRESH_DELAY_MS: u32 = 1_500;

/// How long the error status stays up before reverting to idle
pub const ERROR_RESET_DELAY_MS: u32 = 3_000;

/// Toast auto-dismiss delay
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Backend calls are only issued against a real Apps Script deployment
pub fn backend_configured() -> bool {
    SCRIPT_URL.starts_with("https://script.google.com")
}

/// Display name for a country id, if it is one of the event booths
pub fn country_name(id: &str) -> Option<&'static str> {
    COUNTRIES.iter().find(|c| c.id == id).map(|c| c.name)
}

/// Flag emoji for a country id
pub fn country_icon(id: &str) -> Option<&'static str> {
    COUNTRIES.iter().find(|c| c.id == id).map(|c| c.icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_name_lookup() {
        assert_eq!(country_name("VN"), Some("越南"));
        assert_eq!(country_name("JP"), Some("日本"));
        assert_eq!(country_name("XX"), None);
    }

    #[test]
    fn test_country_icon_lookup() {
        assert_eq!(country_icon("KR"), Some("🇰🇷"));
        assert_eq!(country_icon(""), None);
    }

    #[test]
    fn test_reference_tables_are_populated() {
        assert_eq!(DAYS.len(), 3);
        assert_eq!(COUNTRIES.len(), 7);
        assert_eq!(FEEDBACK_TAGS.len(), 6);
    }
}
