pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Language;

#[derive(Parser)]
#[command(name = "noor")]
#[command(about = "Browse supplications and Quran chapters in the terminal", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/noor/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI
    Tui,
    /// Print supplications matching a search
    Duas {
        /// bengali, english, hindi or urdu (default: from config)
        #[arg(short, long)]
        language: Option<Language>,

        /// Text to look for in title, transliteration or translation
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only show this category (exact, in the chosen language)
        #[arg(long)]
        category: Option<String>,
    },
    /// Print one supplication in full
    Dua {
        /// Supplication id, as shown by `noor duas`
        id: u32,

        #[arg(short, long)]
        language: Option<Language>,
    },
    /// Print the supplication categories for a language
    Categories {
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// Fetch and print chapters matching a search
    Chapters {
        /// Name or number to look for
        #[arg(short, long, default_value = "")]
        query: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["noor"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_duas_arguments() {
        let cli = Cli::try_parse_from([
            "noor",
            "duas",
            "--language",
            "english",
            "--query",
            "morning",
            "--category",
            "Morning",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Duas {
                language,
                query,
                category,
            }) => {
                assert_eq!(language, Some(Language::English));
                assert_eq!(query, "morning");
                assert_eq!(category.as_deref(), Some("Morning"));
            }
            _ => panic!("expected duas command"),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["noor", "chapters", "--config", "/tmp/noor.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/noor.toml")));
    }

    #[test]
    fn test_dua_id_is_positional() {
        let cli = Cli::try_parse_from(["noor", "dua", "7", "-l", "ur"]).unwrap();
        match cli.command {
            Some(Commands::Dua { id, language }) => {
                assert_eq!(id, 7);
                assert_eq!(language, Some(Language::Urdu));
            }
            _ => panic!("expected dua command"),
        }
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["noor", "categories", "-l", "latin"]).is_err());
    }
}
