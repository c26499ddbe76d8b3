use crate::domain::{ChapterRecord, Language, SupplicationRecord};

pub const QURAN_HEADING: &str = "الْقُرْآن الْكَرِيم";
pub const QURAN_SUBHEADING: &str = "পবিত্র কুরআন মাজীদ";

/// Heading for the supplication screen.
///
/// Detail shows the record's localized title, a selected category shows
/// its raw label, and the plain list shows the collection name.
pub fn dua_title<'a>(
    language: Language,
    category: Option<&'a str>,
    selected: Option<&SupplicationRecord>,
) -> &'a str {
    if let Some(record) = selected {
        return record.title(language);
    }
    if let Some(category) = category {
        return category;
    }
    language.collection_title()
}

pub fn quran_title(selected: Option<&ChapterRecord>) -> &str {
    match selected {
        Some(chapter) => &chapter.english_name,
        None => QURAN_HEADING,
    }
}
