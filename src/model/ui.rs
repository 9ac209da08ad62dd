//! UI state - presentation state separate from brand data

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// App-level dialogs, layered above whatever brand overlay is open
///
/// At most one dialog is visible at a time; the top dialog receives the
/// input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    QuitConfirm,
    Help,
    History,
}
