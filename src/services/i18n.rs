//! Static catalog of UI chrome strings per display language.
//!
//! Content records carry their own `LocalizedText` bundles; this module
//! covers only the site chrome (navigation labels, section headings,
//! button captions). The Sanskrit catalog authors Devanagari labels where
//! natural ones exist and reuses the English caption elsewhere, mirroring
//! the fallback rule content bundles follow.

use crate::models::Language;

pub struct UiStrings {
    pub site_name: &'static str,
    pub tagline: &'static str,
    pub home: &'static str,
    pub chapters: &'static str,
    pub gallery: &'static str,
    pub donate: &'static str,
    pub admin: &'static str,
    pub verses: &'static str,
    pub shloka: &'static str,
    pub chapter_overview: &'static str,
    pub key_teachings: &'static str,
    pub video_lectures: &'static str,
    pub back_to_chapters: &'static str,
    pub all_chapters: &'static str,
    pub all_chapters_desc: &'static str,
    pub wisdom: &'static str,
    pub features: &'static str,
    pub feature_chapters_desc: &'static str,
    pub feature_languages: &'static str,
    pub feature_languages_desc: &'static str,
    pub feature_wisdom_desc: &'static str,
    pub feature_everyone: &'static str,
    pub feature_everyone_desc: &'static str,
    pub read_more: &'static str,
    pub explore_chapters: &'static str,
    pub begin_journey: &'static str,
    pub start_reading: &'static str,
    pub previous_chapter: &'static str,
    pub next_chapter: &'static str,
    pub previous_verse: &'static str,
    pub next_verse: &'static str,
    pub transliteration: &'static str,
    pub translation: &'static str,
    pub commentary: &'static str,
    pub chapter_not_found: &'static str,
    pub verse_out_of_range: &'static str,
    pub verse_not_yet_authored: &'static str,
    pub back_home: &'static str,
    pub select_language: &'static str,
    pub support: &'static str,
    pub support_desc: &'static str,
    pub donation_thanks: &'static str,
    pub donation_invalid: &'static str,
    pub admin_panel: &'static str,
    pub password: &'static str,
    pub login: &'static str,
    pub logout: &'static str,
    pub invalid_password: &'static str,
    pub saved: &'static str,
}

static EN: UiStrings = UiStrings {
    site_name: "Gita Prerna",
    tagline: "Timeless wisdom of the Bhagavad Gita",
    home: "Home",
    chapters: "Chapters",
    gallery: "Gallery",
    donate: "Donate",
    admin: "Admin",
    verses: "Verses",
    shloka: "Shloka",
    chapter_overview: "Chapter Overview",
    key_teachings: "Key Teachings",
    video_lectures: "Video Lectures",
    back_to_chapters: "Back to Chapters",
    all_chapters: "All Chapters",
    all_chapters_desc: "Explore all eighteen chapters of the Bhagavad Gita",
    wisdom: "Wisdom",
    features: "Features",
    feature_chapters_desc: "Complete Bhagavad Gita with detailed explanations",
    feature_languages: "Multiple Languages",
    feature_languages_desc: "Hindi, English, Sanskrit and more",
    feature_wisdom_desc: "Key teachings and profound insights",
    feature_everyone: "For Everyone",
    feature_everyone_desc: "Accessible spiritual knowledge for all",
    read_more: "Read More",
    explore_chapters: "Explore Chapters",
    begin_journey: "Begin Your Journey",
    start_reading: "Start Reading",
    previous_chapter: "← Previous Chapter",
    next_chapter: "Next Chapter →",
    previous_verse: "← Previous Verse",
    next_verse: "Next Verse →",
    transliteration: "Transliteration",
    translation: "Translation",
    commentary: "Commentary",
    chapter_not_found: "Chapter Not Found",
    verse_out_of_range: "This verse number is outside the chapter",
    verse_not_yet_authored: "This verse has not been added yet",
    back_home: "Back to Home",
    select_language: "Select Language",
    support: "Support Us",
    support_desc: "Help us spread the teachings of the Gita to every seeker",
    donation_thanks: "Thank you for your donation",
    donation_invalid: "Please select an amount and payment method",
    admin_panel: "Admin Panel",
    password: "Password",
    login: "Login",
    logout: "Logout",
    invalid_password: "Invalid password",
    saved: "Content saved",
};

static HI: UiStrings = UiStrings {
    site_name: "गीता प्रेरणा",
    tagline: "भगवद गीता का कालातीत ज्ञान",
    home: "मुखपृष्ठ",
    chapters: "अध्याय",
    gallery: "गैलरी",
    donate: "दान करें",
    admin: "प्रशासन",
    verses: "श्लोक",
    shloka: "श्लोक",
    chapter_overview: "अध्याय परिचय",
    key_teachings: "मुख्य शिक्षाएं",
    video_lectures: "वीडियो प्रवचन",
    back_to_chapters: "अध्यायों पर वापस जाएं",
    all_chapters: "सभी अध्याय",
    all_chapters_desc: "भगवद गीता के सभी अठारह अध्यायों का अन्वेषण करें",
    wisdom: "ज्ञान",
    features: "विशेषताएं",
    feature_chapters_desc: "विस्तृत व्याख्या के साथ संपूर्ण भगवद गीता",
    feature_languages: "कई भाषाएं",
    feature_languages_desc: "हिंदी, अंग्रेजी, संस्कृत और भी",
    feature_wisdom_desc: "मुख्य शिक्षाएं और गहन अंतर्दृष्टि",
    feature_everyone: "सभी के लिए",
    feature_everyone_desc: "सभी के लिए सुलभ आध्यात्मिक ज्ञान",
    read_more: "और पढ़ें",
    explore_chapters: "अध्याय देखें",
    begin_journey: "अपनी यात्रा शुरू करें",
    start_reading: "पढ़ना शुरू करें",
    previous_chapter: "← पिछला अध्याय",
    next_chapter: "अगला अध्याय →",
    previous_verse: "← पिछला श्लोक",
    next_verse: "अगला श्लोक →",
    transliteration: "लिप्यंतरण",
    translation: "अनुवाद",
    commentary: "भावार्थ",
    chapter_not_found: "अध्याय नहीं मिला",
    verse_out_of_range: "यह श्लोक संख्या अध्याय से बाहर है",
    verse_not_yet_authored: "यह श्लोक अभी जोड़ा नहीं गया है",
    back_home: "मुखपृष्ठ पर वापस जाएं",
    select_language: "भाषा चुनें",
    support: "सहयोग करें",
    support_desc: "गीता की शिक्षाओं को हर जिज्ञासु तक पहुंचाने में हमारी मदद करें",
    donation_thanks: "आपके दान के लिए धन्यवाद",
    donation_invalid: "कृपया राशि और भुगतान विधि चुनें",
    admin_panel: "प्रशासन पैनल",
    password: "पासवर्ड",
    login: "लॉगिन",
    logout: "लॉगआउट",
    invalid_password: "गलत पासवर्ड",
    saved: "सामग्री सहेजी गई",
};

// Sanskrit chrome is only partially authored; unauthored captions reuse
// the English text, the same fallback rule content bundles apply.
static SA: UiStrings = UiStrings {
    site_name: "गीता प्रेरणा",
    tagline: "भगवद्गीतायाः शाश्वतं ज्ञानम्",
    home: "गृहम्",
    chapters: "अध्यायाः",
    gallery: "चित्रशाला",
    donate: "दानम्",
    admin: "Admin",
    verses: "श्लोकाः",
    shloka: "श्लोकः",
    chapter_overview: "अध्यायपरिचयः",
    key_teachings: "मुख्यशिक्षाः",
    video_lectures: "Video Lectures",
    back_to_chapters: "अध्यायाः प्रति",
    all_chapters: "सर्वे अध्यायाः",
    all_chapters_desc: "Explore all eighteen chapters of the Bhagavad Gita",
    wisdom: "ज्ञानम्",
    features: "Features",
    feature_chapters_desc: "Complete Bhagavad Gita with detailed explanations",
    feature_languages: "अनेकाः भाषाः",
    feature_languages_desc: "Hindi, English, Sanskrit and more",
    feature_wisdom_desc: "Key teachings and profound insights",
    feature_everyone: "For Everyone",
    feature_everyone_desc: "Accessible spiritual knowledge for all",
    read_more: "Read More",
    explore_chapters: "Explore Chapters",
    begin_journey: "Begin Your Journey",
    start_reading: "Start Reading",
    previous_chapter: "← पूर्वः अध्यायः",
    next_chapter: "अग्रिमः अध्यायः →",
    previous_verse: "← पूर्वः श्लोकः",
    next_verse: "अग्रिमः श्लोकः →",
    transliteration: "Transliteration",
    translation: "अनुवादः",
    commentary: "भाष्यम्",
    chapter_not_found: "Chapter Not Found",
    verse_out_of_range: "This verse number is outside the chapter",
    verse_not_yet_authored: "This verse has not been added yet",
    back_home: "Back to Home",
    select_language: "भाषां चिनोतु",
    support: "Support Us",
    support_desc: "Help us spread the teachings of the Gita to every seeker",
    donation_thanks: "Thank you for your donation",
    donation_invalid: "Please select an amount and payment method",
    admin_panel: "Admin Panel",
    password: "Password",
    login: "Login",
    logout: "Logout",
    invalid_password: "Invalid password",
    saved: "Content saved",
};

pub fn ui(language: Language) -> &'static UiStrings {
    match language {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Sa => &SA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_catalog() {
        for lang in Language::ALL {
            assert!(!ui(lang).site_name.is_empty());
            assert!(!ui(lang).chapters.is_empty());
        }
    }

    #[test]
    fn unauthored_sanskrit_captions_reuse_english() {
        assert_eq!(ui(Language::Sa).video_lectures, ui(Language::En).video_lectures);
        assert_eq!(ui(Language::Sa).admin, ui(Language::En).admin);
    }

    #[test]
    fn hindi_catalog_is_distinct() {
        assert_ne!(ui(Language::Hi).chapters, ui(Language::En).chapters);
    }
}
