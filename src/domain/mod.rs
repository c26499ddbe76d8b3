pub mod chapter;
pub mod language;
pub mod supplication;

pub use chapter::{ChapterRecord, RevelationPlace, Verse};
pub use language::Language;
pub use supplication::{SupplicationRecord, Translation, Translations};
