//! Language type used to localize error messages

use serde::{Deserialize, Serialize};

/// Language preference for localized responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// Pick the preferred supported language from an Accept-Language header
    ///
    /// Example header: "zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7". Unsupported
    /// languages are ignored and English is the fallback.
    pub fn from_accept_language(header: &str) -> Self {
        let mut preferred = Language::English;
        let mut max_quality = 0.0_f32;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or_default().trim().to_lowercase();
            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            let candidate = if tag.starts_with("zh") {
                Language::Chinese
            } else if tag.starts_with("en") {
                Language::English
            } else {
                continue;
            };

            if quality > max_quality {
                preferred = candidate;
                max_quality = quality;
            }
        }

        preferred
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Select the message matching this language
    pub fn localize<'a>(&self, en: &'a str, zh: &'a str) -> &'a str {
        match self {
            Language::English => en,
            Language::Chinese => zh,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
