use serde::{Deserialize, Serialize};

pub const CHAPTER_COUNT: u16 = 114;
pub const JUZ_COUNT: u8 = 30;
pub const AYAH_COUNT: u16 = 6236;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevelationPlace {
    Meccan,
    Medinan,
}

impl RevelationPlace {
    pub fn label(self) -> &'static str {
        match self {
            RevelationPlace::Meccan => "মক্কী",
            RevelationPlace::Medinan => "মাদানী",
        }
    }
}

/// Chapter metadata as served by the metadata API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRecord {
    pub number: u16,
    /// Local (Arabic) name.
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: u16,
    pub revelation_type: RevelationPlace,
}

impl ChapterRecord {
    pub fn ayah_label(&self) -> String {
        format!("{} আয়াত", self.number_of_ayahs)
    }
}

/// A single verse of a chapter, as shown by the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub number_in_surah: u16,
    pub text: String,
}
