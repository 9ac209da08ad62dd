//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Brand Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch to the next brand view
    NextBrand,
    /// Switch to the previous brand view
    PrevBrand,

    // ─────────────────────────────────────────────────────────────────────────
    // Sub-nav Action Button
    // ─────────────────────────────────────────────────────────────────────────
    /// Activate the sub-nav action button for the current brand.
    /// The effect depends on the brand: external navigation, slideout
    /// panel, or settings modal. Intentionally not debounced.
    ActivateNav,

    // ─────────────────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────────────────
    /// Dismiss the visible overlay for the current brand. Every dismiss
    /// affordance (backdrop click, close key, Cancel) maps here; a no-op
    /// when the overlay is already closed.
    CloseOverlay,
    /// Confirm the overlay (Save in the settings modal). Converges on the
    /// same closed state as `CloseOverlay`.
    ConfirmOverlay,
    /// Move focus/selection up inside the open overlay
    OverlayUp,
    /// Move focus/selection down inside the open overlay
    OverlayDown,
    /// Cycle the focused overlay field backward (dealer selection)
    OverlayLeft,
    /// Cycle the focused overlay field forward (dealer selection)
    OverlayRight,
    /// Toggle the focused overlay field (notification checkboxes)
    OverlayToggle,

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the quit confirmation dialog
    OpenQuitDialog,
    /// Open the help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Open the recent searches dialog
    OpenHistory,
    /// Close the top app dialog (quit/help/history)
    CloseDialog,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode without committing the query to history
    ExitSearchMode,
    /// Add character to the search query
    SearchInput(char),
    /// Remove last character from the search query
    SearchBackspace,
    /// Exit search mode and record the query in recent searches
    CommitSearch,
    /// Replace the current brand's query with one picked from history
    ApplySearch(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextBrand => write!(f, "NextBrand"),
            Action::PrevBrand => write!(f, "PrevBrand"),
            Action::ActivateNav => write!(f, "ActivateNav"),
            Action::CloseOverlay => write!(f, "CloseOverlay"),
            Action::ConfirmOverlay => write!(f, "ConfirmOverlay"),
            Action::OverlayUp => write!(f, "OverlayUp"),
            Action::OverlayDown => write!(f, "OverlayDown"),
            Action::OverlayLeft => write!(f, "OverlayLeft"),
            Action::OverlayRight => write!(f, "OverlayRight"),
            Action::OverlayToggle => write!(f, "OverlayToggle"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenHistory => write!(f, "OpenHistory"),
            Action::CloseDialog => write!(f, "CloseDialog"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::CommitSearch => write!(f, "CommitSearch"),
            Action::ApplySearch(q) => write!(f, "ApplySearch({})", q),
        }
    }
}
