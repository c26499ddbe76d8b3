//! # Noor
//!
//! A terminal browser for a bundled collection of supplications (duas) and
//! for the chapters of the Quran.
//!
//! ## Architecture
//!
//! ```text
//! Store / ChapterSource → Filter → Browse → TUI
//! ```
//!
//! - [`store`]: the supplication table compiled into the binary
//! - [`fetcher`]: chapter metadata and verses over HTTP, loaded in the background
//! - [`filter`]: pure search and category filtering
//! - [`browse`]: list/detail state machines for each screen
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the TUI
//! noor
//!
//! # Search supplications from the shell
//! noor duas --language english --query morning
//!
//! # List chapters matching a name
//! noor chapters --query yasin
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the config, the supplication store
/// and the chapter source together.
pub mod app;

/// List/detail browsing state for the supplication and Quran screens.
pub mod browse;

/// Command-line interface using clap.
///
/// - `tui` - Launch the TUI (default)
/// - `duas` - Print filtered supplications
/// - `categories` - Print the categories for a language
/// - `chapters` - Fetch and print filtered chapters
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/noor/config.toml`, supporting:
/// - Default language and API endpoint
/// - Custom colors (named or hex)
/// - Custom keybindings
pub mod config;

/// Core domain models.
///
/// - [`SupplicationRecord`](domain::SupplicationRecord): one dua with every translation
/// - [`ChapterRecord`](domain::ChapterRecord): chapter metadata
/// - [`Language`](domain::Language): supported display languages
pub mod domain;

/// Chapter metadata and verse fetching.
///
/// - [`ChapterSource`](fetcher::ChapterSource): Async trait for chapter providers
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`Loader`](fetcher::Loader): background load polled from the UI loop
pub mod fetcher;

/// Search and category filtering over record lists.
pub mod filter;

/// Verse reader opened from the chapter list.
pub mod reader;

/// Read-only supplication content.
pub mod store;

/// Terminal user interface.
///
/// Home menu, supplication screen (categories, list, detail) and Quran
/// screen (tabs, chapter list, reader).
pub mod tui;
