use crate::domain::Language;

/// Localized fields of a supplication in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub title: &'static str,
    pub category: &'static str,
    pub body: &'static str,
}

/// One translation per supported language.
///
/// Having a field per variant of [`Language`] means a record cannot be
/// built with a language missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub bengali: Translation,
    pub english: Translation,
    pub hindi: Translation,
    pub urdu: Translation,
}

impl Translations {
    pub fn get(&self, language: Language) -> &Translation {
        match language {
            Language::Bengali => &self.bengali,
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
            Language::Urdu => &self.urdu,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplicationRecord {
    pub id: u32,
    pub arabic: &'static str,
    pub transliteration: &'static str,
    pub translations: Translations,
}

impl SupplicationRecord {
    pub fn translation(&self, language: Language) -> &Translation {
        self.translations.get(language)
    }

    pub fn title(&self, language: Language) -> &'static str {
        self.translation(language).title
    }

    pub fn category(&self, language: Language) -> &'static str {
        self.translation(language).category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation(title: &'static str) -> Translation {
        Translation {
            title,
            category: "c",
            body: "b",
        }
    }

    #[test]
    fn test_translation_lookup_per_language() {
        let record = SupplicationRecord {
            id: 1,
            arabic: "a",
            transliteration: "t",
            translations: Translations {
                bengali: translation("bn"),
                english: translation("en"),
                hindi: translation("hi"),
                urdu: translation("ur"),
            },
        };

        assert_eq!(record.title(Language::Bengali), "bn");
        assert_eq!(record.title(Language::English), "en");
        assert_eq!(record.title(Language::Hindi), "hi");
        assert_eq!(record.title(Language::Urdu), "ur");
    }
}
