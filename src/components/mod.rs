//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation.

pub mod help_dialog;
pub mod history_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod settings_dialog;
pub mod showroom;
pub mod slideout;
pub mod splash;
pub mod subnav;

pub use help_dialog::HelpDialog;
pub use history_dialog::HistoryDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use settings_dialog::SettingsDialog;
pub use showroom::ShowroomComponent;
pub use slideout::SlideoutPanel;
pub use splash::SplashComponent;
pub use subnav::{SubNav, SubNavContext};
