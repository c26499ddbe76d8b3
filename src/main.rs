use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use noor::app::AppContext;
use noor::cli::{commands, Cli, Commands};
use noor::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The TUI owns stdout, so logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let ctx = AppContext::new(config)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            noor::tui::run(Arc::new(ctx)).await?;
        }
        Commands::Duas {
            language,
            query,
            category,
        } => {
            let language = language.unwrap_or(ctx.config.general.language);
            commands::list_duas(&ctx, language, &query, category.as_deref())?;
        }
        Commands::Dua { id, language } => {
            let language = language.unwrap_or(ctx.config.general.language);
            commands::show_dua(&ctx, id, language)?;
        }
        Commands::Categories { language } => {
            let language = language.unwrap_or(ctx.config.general.language);
            commands::list_categories(&ctx, language)?;
        }
        Commands::Chapters { query } => {
            commands::list_chapters(&ctx, &query).await?;
        }
    }

    Ok(())
}
