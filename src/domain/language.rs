use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::NoorError;

/// UI language for supplication content.
///
/// The set is closed: every localized string in the crate is an exhaustive
/// `match` over these variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Bengali,
    English,
    Hindi,
    Urdu,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Bengali,
        Language::English,
        Language::Hindi,
        Language::Urdu,
    ];

    /// Label shown on the language selector, in the language itself.
    pub fn label(self) -> &'static str {
        match self {
            Language::Bengali => "বাংলা",
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Urdu => "اردو",
        }
    }

    /// Heading of the supplication list when nothing narrows it.
    pub fn collection_title(self) -> &'static str {
        match self {
            Language::Bengali => "দোয়া সংকলন",
            Language::English => "Dua Collection",
            Language::Hindi => "दुआ संग्रह",
            Language::Urdu => "دعا مجموعہ",
        }
    }

    pub fn search_placeholder(self) -> &'static str {
        match self {
            Language::Bengali => "দোয়া খুঁজুন...",
            Language::English => "Search duas...",
            Language::Hindi => "दुआ खोजें...",
            Language::Urdu => "دعا تلاش کریں...",
        }
    }

    pub fn arabic_label(self) -> &'static str {
        match self {
            Language::Bengali => "আরবি",
            Language::English => "Arabic",
            Language::Hindi => "अरबी",
            Language::Urdu => "عربی",
        }
    }

    pub fn transliteration_label(self) -> &'static str {
        match self {
            Language::Bengali => "উচ্চারণ",
            Language::English => "Transliteration",
            Language::Hindi => "उच्चारण",
            Language::Urdu => "تلفظ",
        }
    }

    pub fn translation_label(self) -> &'static str {
        match self {
            Language::Bengali => "অনুবাদ",
            Language::English => "Translation",
            Language::Hindi => "अनुवाद",
            Language::Urdu => "ترجمہ",
        }
    }

    /// Next language in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Language::Bengali => Language::English,
            Language::English => Language::Hindi,
            Language::Hindi => Language::Urdu,
            Language::Urdu => Language::Bengali,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Bengali => "bengali",
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Urdu => "urdu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = NoorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bengali" | "bn" | "bangla" => Ok(Language::Bengali),
            "english" | "en" => Ok(Language::English),
            "hindi" | "hi" => Ok(Language::Hindi),
            "urdu" | "ur" => Ok(Language::Urdu),
            _ => Err(NoorError::UnknownLanguage(s.to_string())),
        }
    }
}
