//! List/detail view-state machines for the two browsing screens.
//!
//! ```text
//!            select(r)                back()
//!   [List] -----------> [Detail] -----------> [List]
//!     |
//!     | back() with a category or non-default tab: clear it, stay in List
//!     | back() otherwise: BackOutcome::Exit (state untouched)
//! ```
//!
//! Transitions are plain methods with no rendering dependency.

pub mod chapter;
pub mod dua;
pub mod title;

pub use chapter::{ChapterBrowser, ChapterListing, QuranTab};
pub use dua::DuaBrowser;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    List,
    Detail,
}

/// Result of a back request on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// The screen consumed the request and changed its own state.
    Handled,
    /// The screen is at its outermost state; the caller should navigate
    /// to the parent.
    Exit,
}
