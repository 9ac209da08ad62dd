//! Data model for the application
//!
//! Brand definitions and catalogs are static display data; everything else
//! is transient per-view UI state.

pub mod brand;
pub mod catalog;
pub mod history;
pub mod overlay;
pub mod settings;
pub mod ui;
pub mod view;
