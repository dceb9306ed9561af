use serde::{Deserialize, Serialize};

/// Display languages the site can render. `Sa` is selectable even though
/// most records carry no dedicated Sanskrit prose; lookups fall back to
/// English (see `LocalizedText::resolve`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Sa,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Sa => "sa",
        }
    }

    /// Parses a language code, defaulting to English for anything unknown.
    pub fn from_code(code: &str) -> Language {
        match code {
            "hi" => Language::Hi,
            "sa" => Language::Sa,
            _ => Language::En,
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Sa => "संस्कृत",
        }
    }

    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Sa];
}

/// Parallel per-language variants of one piece of display text.
/// English and Hindi are always authored; Sanskrit prose is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sa: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, hi: impl Into<String>) -> Self {
        LocalizedText {
            en: en.into(),
            hi: hi.into(),
            sa: None,
        }
    }

    /// Returns the variant for `language`, falling back to English when the
    /// requested variant is absent. Never returns an empty placeholder.
    pub fn resolve(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Hi => &self.hi,
            Language::Sa => self.sa.as_deref().unwrap_or(&self.en),
        }
    }
}

/// One numbered shloka within a chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shloka {
    pub number: u32,
    /// Original Devanagari text.
    pub sanskrit: String,
    pub transliteration: String,
    pub translation: LocalizedText,
    pub commentary: LocalizedText,
    /// Optional recitation audio, played by a plain media element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// One of the eighteen chapters. `verses` is the declared count for the
/// chapter; `shlokas` holds only the verses authored so far and may be
/// shorter (or empty) without being invalid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    pub name_hindi: String,
    pub name_english: String,
    pub name_sanskrit: String,
    pub subtitle: String,
    pub verses: u32,
    pub theme: String,
    pub description: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_teachings: Option<KeyTeachings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_video_id: Option<String>,
    pub shlokas: Vec<Shloka>,
}

impl Chapter {
    /// Authored shloka for `number`, if any. `None` covers both
    /// out-of-range and not-yet-authored; callers that need to tell those
    /// apart go through `ContentStore::verse`.
    pub fn shloka(&self, number: u32) -> Option<&Shloka> {
        self.shlokas.iter().find(|s| s.number == number)
    }
}

/// Per-language key-teaching bullet lists attached to a chapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyTeachings {
    pub en: Vec<String>,
    pub hi: Vec<String>,
}

impl KeyTeachings {
    /// Same fallback rule as `LocalizedText::resolve`: Sanskrit has no
    /// dedicated list, so it resolves to English.
    pub fn resolve(&self, language: Language) -> &[String] {
        match language {
            Language::Hi => &self.hi,
            Language::En | Language::Sa => &self.en,
        }
    }
}

/// A gallery entry; images are referenced by URL, never fetched or stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub title: String,
    pub title_hindi: String,
    pub description: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_requested_variant() {
        let text = LocalizedText::new("duty", "कर्तव्य");
        assert_eq!(text.resolve(Language::En), "duty");
        assert_eq!(text.resolve(Language::Hi), "कर्तव्य");
    }

    #[test]
    fn sanskrit_falls_back_to_english_when_absent() {
        let text = LocalizedText::new("X", "एक्स");
        assert_eq!(text.resolve(Language::Sa), "X");
    }

    #[test]
    fn sanskrit_variant_used_when_present() {
        let mut text = LocalizedText::new("X", "एक्स");
        text.sa = Some("क्षः".to_string());
        assert_eq!(text.resolve(Language::Sa), "क्षः");
    }

    #[test]
    fn unknown_language_code_defaults_to_english() {
        assert_eq!(Language::from_code("fr"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
        assert_eq!(Language::from_code("hi"), Language::Hi);
    }
}
