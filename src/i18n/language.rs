use serde::{Deserialize, Serialize};

/// Closed set of supported interface languages.
///
/// Tags follow the underscore form used by the settings profile
/// (`en_US`, `de_DE`, ...). Anything outside this set degrades to
/// [`Language::default`] at the lookup boundary, never to an error.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "es_ES")]
    EsEs,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "pt_PT")]
    PtPt,
    #[serde(rename = "it_IT")]
    ItIt,
    #[serde(rename = "ru_RU")]
    RuRu,
    #[serde(rename = "ja_JP")]
    JaJp,
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[serde(rename = "ko_KR")]
    KoKr,
    #[serde(rename = "tr_TR")]
    TrTr,
    #[serde(rename = "ar_SA")]
    ArSa,
    #[serde(rename = "hi_IN")]
    HiIn,
}

impl Default for Language {
    fn default() -> Self {
        Language::EnUs
    }
}

impl Language {
    /// Every supported language, in settings-panel order.
    pub const ALL: [Language; 13] = [
        Language::EnUs,
        Language::DeDe,
        Language::EsEs,
        Language::FrFr,
        Language::PtPt,
        Language::ItIt,
        Language::RuRu,
        Language::JaJp,
        Language::ZhCn,
        Language::KoKr,
        Language::TrTr,
        Language::ArSa,
        Language::HiIn,
    ];

    /// Parse an underscore tag. Unknown tags yield `None`; callers that
    /// must not fail go through [`crate::i18n::resolve`] instead.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en_US" => Some(Language::EnUs),
            "de_DE" => Some(Language::DeDe),
            "es_ES" => Some(Language::EsEs),
            "fr_FR" => Some(Language::FrFr),
            "pt_PT" => Some(Language::PtPt),
            "it_IT" => Some(Language::ItIt),
            "ru_RU" => Some(Language::RuRu),
            "ja_JP" => Some(Language::JaJp),
            "zh_CN" => Some(Language::ZhCn),
            "ko_KR" => Some(Language::KoKr),
            "tr_TR" => Some(Language::TrTr),
            "ar_SA" => Some(Language::ArSa),
            "hi_IN" => Some(Language::HiIn),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Language::EnUs => "en_US",
            Language::DeDe => "de_DE",
            Language::EsEs => "es_ES",
            Language::FrFr => "fr_FR",
            Language::PtPt => "pt_PT",
            Language::ItIt => "it_IT",
            Language::RuRu => "ru_RU",
            Language::JaJp => "ja_JP",
            Language::ZhCn => "zh_CN",
            Language::KoKr => "ko_KR",
            Language::TrTr => "tr_TR",
            Language::ArSa => "ar_SA",
            Language::HiIn => "hi_IN",
        }
    }

    /// English display label, for logs and admin surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::DeDe => "German",
            Language::EsEs => "Spanish",
            Language::FrFr => "French",
            Language::PtPt => "Portuguese",
            Language::ItIt => "Italian",
            Language::RuRu => "Russian",
            Language::JaJp => "Japanese",
            Language::ZhCn => "Chinese",
            Language::KoKr => "Korean",
            Language::TrTr => "Turkish",
            Language::ArSa => "Arabic",
            Language::HiIn => "Hindi",
        }
    }

    /// Label in the language itself, for the settings picker.
    pub fn native_label(&self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::DeDe => "Deutsch",
            Language::EsEs => "Español",
            Language::FrFr => "Français",
            Language::PtPt => "Português",
            Language::ItIt => "Italiano",
            Language::RuRu => "Русский",
            Language::JaJp => "日本語",
            Language::ZhCn => "中文",
            Language::KoKr => "한국어",
            Language::TrTr => "Türkçe",
            Language::ArSa => "العربية",
            Language::HiIn => "हिन्दी",
        }
    }
}
