//! Pure filtering over the in-memory record lists.
//!
//! Every function here preserves the order of its input and never mutates
//! it. They are cheap enough to re-run on each keystroke.

use crate::domain::{ChapterRecord, Language, SupplicationRecord};

/// Chapters surfaced in the quick-access strip, by number.
pub const FEATURED_CHAPTERS: [u16; 6] = [1, 36, 67, 55, 56, 18];

/// Filter supplications by search text and optional category.
///
/// The query matches case-insensitively against the localized title, the
/// transliteration, or the localized body. An empty query matches every
/// record. A category, when given, must equal the record's category in
/// `language` exactly.
pub fn filter_supplications<'a>(
    records: &'a [SupplicationRecord],
    query: &str,
    category: Option<&str>,
    language: Language,
) -> Vec<&'a SupplicationRecord> {
    let query = query.to_lowercase();

    records
        .iter()
        .filter(|record| {
            let translation = record.translation(language);
            let matches_search = translation.title.to_lowercase().contains(&query)
                || record.transliteration.to_lowercase().contains(&query)
                || translation.body.to_lowercase().contains(&query);
            let matches_category = category.is_none_or(|c| translation.category == c);
            matches_search && matches_category
        })
        .collect()
}

/// Distinct categories for `language`, in the order they first appear.
pub fn categories(records: &[SupplicationRecord], language: Language) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for record in records {
        let category = record.category(language);
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

/// Filter chapters by search text.
///
/// The common name is compared case-insensitively; the local name and the
/// chapter number are compared against the raw query.
pub fn filter_chapters<'a>(records: &'a [ChapterRecord], query: &str) -> Vec<&'a ChapterRecord> {
    let lowered = query.to_lowercase();

    records
        .iter()
        .filter(|chapter| {
            chapter.english_name.to_lowercase().contains(&lowered)
                || chapter.name.contains(query)
                || chapter.number.to_string().contains(query)
        })
        .collect()
}

/// Chapters listed in [`FEATURED_CHAPTERS`], in table order.
pub fn featured_chapters(records: &[ChapterRecord]) -> Vec<&ChapterRecord> {
    records
        .iter()
        .filter(|chapter| FEATURED_CHAPTERS.contains(&chapter.number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RevelationPlace;
    use crate::store::SUPPLICATIONS;

    fn chapter(number: u16, name: &str, english_name: &str) -> ChapterRecord {
        ChapterRecord {
            number,
            name: name.to_string(),
            english_name: english_name.to_string(),
            english_name_translation: String::new(),
            number_of_ayahs: 7,
            revelation_type: RevelationPlace::Meccan,
        }
    }

    fn ids(records: &[&SupplicationRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        for lang in Language::ALL {
            let result = filter_supplications(SUPPLICATIONS, "", None, lang);
            let expected: Vec<u32> = SUPPLICATIONS.iter().map(|r| r.id).collect();
            assert_eq!(ids(&result), expected);
        }
    }

    #[test]
    fn test_search_morning_in_english() {
        let result = filter_supplications(SUPPLICATIONS, "morning", None, Language::English);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title(Language::English), "Morning Dua");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let lower = filter_supplications(SUPPLICATIONS, "ayatul", None, Language::English);
        let upper = filter_supplications(SUPPLICATIONS, "AYATUL", None, Language::English);
        assert_eq!(ids(&lower), vec![9]);
        assert_eq!(ids(&lower), ids(&upper));
    }

    #[test]
    fn test_search_matches_transliteration() {
        let result = filter_supplications(SUPPLICATIONS, "bismika", None, Language::Bengali);
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_search_matches_body() {
        let result = filter_supplications(SUPPLICATIONS, "resurrection", None, Language::English);
        assert_eq!(ids(&result), vec![4]);
    }

    #[test]
    fn test_search_uses_active_language_only() {
        let result = filter_supplications(SUPPLICATIONS, "morning", None, Language::Bengali);
        assert!(result.is_empty());
    }

    #[test]
    fn test_every_result_matches_query() {
        for query in ["allah", "dua", "in the name", "x"] {
            let result = filter_supplications(SUPPLICATIONS, query, None, Language::English);
            for record in &result {
                let t = record.translation(Language::English);
                let hit = t.title.to_lowercase().contains(query)
                    || record.transliteration.to_lowercase().contains(query)
                    || t.body.to_lowercase().contains(query);
                assert!(hit, "record {} should not match {:?}", record.id, query);
            }
        }
    }

    #[test]
    fn test_food_category_returns_two_in_order() {
        let result = filter_supplications(SUPPLICATIONS, "", Some("Food"), Language::English);
        assert_eq!(ids(&result), vec![5, 6]);
    }

    #[test]
    fn test_stale_category_matches_nothing() {
        let result = filter_supplications(SUPPLICATIONS, "", Some("Food"), Language::Urdu);
        assert!(result.is_empty());
    }

    #[test]
    fn test_query_and_category_both_apply() {
        let result = filter_supplications(SUPPLICATIONS, "leaving", Some("Home"), Language::English);
        assert_eq!(ids(&result), vec![8]);

        let result = filter_supplications(SUPPLICATIONS, "morning", Some("Home"), Language::English);
        assert!(result.is_empty());
    }

    #[test]
    fn test_categories_first_seen_without_duplicates() {
        let cats = categories(SUPPLICATIONS, Language::English);
        assert_eq!(
            cats,
            vec![
                "Morning",
                "Evening",
                "Sleep",
                "Waking Up",
                "Food",
                "Home",
                "Protection",
                "Forgiveness",
            ]
        );
    }

    #[test]
    fn test_categories_are_per_language() {
        let cats = categories(SUPPLICATIONS, Language::Bengali);
        assert_eq!(cats.first(), Some(&"সকাল"));
        assert_eq!(cats.len(), 8);
    }

    #[test]
    fn test_filter_chapters_by_name_and_number() {
        let chapters = vec![
            chapter(1, "الفاتحة", "Al-Faatiha"),
            chapter(2, "البقرة", "Al-Baqara"),
            chapter(12, "يوسف", "Yusuf"),
        ];

        let by_name = filter_chapters(&chapters, "baq");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].number, 2);

        let by_number = filter_chapters(&chapters, "2");
        let numbers: Vec<u16> = by_number.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![2, 12]);

        let by_local = filter_chapters(&chapters, "يوسف");
        assert_eq!(by_local[0].number, 12);

        assert_eq!(filter_chapters(&chapters, "").len(), 3);
    }

    #[test]
    fn test_featured_chapters_keep_table_order() {
        let chapters: Vec<ChapterRecord> = (1..=114)
            .map(|n| chapter(n, "", &format!("Chapter {}", n)))
            .collect();
        let featured: Vec<u16> = featured_chapters(&chapters).iter().map(|c| c.number).collect();
        assert_eq!(featured, vec![1, 18, 36, 55, 56, 67]);
    }
}
