use crate::app::{AppContext, NoorError, Result};
use crate::domain::Language;
use crate::filter;
use crate::store::ContentStore;

pub fn list_duas(
    ctx: &AppContext,
    language: Language,
    query: &str,
    category: Option<&str>,
) -> Result<()> {
    let records = filter::filter_supplications(ctx.store.supplications(), query, category, language);

    if records.is_empty() {
        println!("No duas found");
        return Ok(());
    }

    for record in records {
        let translation = record.translation(language);
        println!("{:>3}. [{}] {}", record.id, translation.category, translation.title);
        println!("     {}", record.arabic);
        println!("     {}", record.transliteration);
        println!("     {}", translation.body);
        println!();
    }

    Ok(())
}

pub fn show_dua(ctx: &AppContext, id: u32, language: Language) -> Result<()> {
    let record = ctx
        .store
        .supplication(id)
        .ok_or(NoorError::DuaNotFound(id))?;
    let translation = record.translation(language);

    println!("{}", translation.title);
    println!("[{}]", translation.category);
    println!();
    println!("{}:", language.arabic_label());
    println!("  {}", record.arabic);
    println!("{}:", language.transliteration_label());
    println!("  {}", record.transliteration);
    println!("{}:", language.translation_label());
    println!("  {}", translation.body);
    Ok(())
}

pub fn list_categories(ctx: &AppContext, language: Language) -> Result<()> {
    for category in filter::categories(ctx.store.supplications(), language) {
        println!("{}", category);
    }
    Ok(())
}

pub async fn list_chapters(ctx: &AppContext, query: &str) -> Result<()> {
    let chapters = ctx.source.fetch_chapters().await?;
    tracing::debug!("Fetched {} chapters", chapters.len());

    let matches = filter::filter_chapters(&chapters, query);
    if matches.is_empty() {
        println!("No chapters found");
        return Ok(());
    }

    for chapter in matches {
        println!(
            "{:>3}. {} ({}) - {}, {}, {}",
            chapter.number,
            chapter.english_name,
            chapter.name,
            chapter.english_name_translation,
            chapter.ayah_label(),
            chapter.revelation_type.label()
        );
    }

    Ok(())
}
