//! Per-brand view state
//!
//! Each brand view owns exactly one search query and one overlay state
//! machine. Views are independent: nothing here crosses a view boundary,
//! so switching brands preserves every view's own state.

use crate::model::brand::{Brand, NavVariant};
use crate::model::catalog::{self, Vehicle};
use crate::model::overlay::OverlayState;
use crate::model::settings::SettingsForm;

/// Entries in the Ford slideout menu
pub const SLIDEOUT_MENU: &[&str] = &["Vehicles", "Services", "Financing", "Support"];

/// What an activation of the sub-nav action button did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// The view's overlay transitioned to `Open`
    OpenedOverlay,
    /// Fire-and-forget external navigation was requested; view state is
    /// unchanged
    Navigate(&'static str),
}

/// State owned by a single brand view
#[derive(Debug, Clone)]
pub struct BrandView {
    pub brand: Brand,
    /// Search text; lives for the view's lifetime, never reset
    pub search_query: String,
    pub overlay: OverlayState,
    /// Form state for the settings modal (Lincoln)
    pub settings: SettingsForm,
    /// Highlighted entry in the slideout menu (Ford)
    pub slideout_cursor: usize,
}

impl BrandView {
    pub fn new(brand: Brand) -> Self {
        Self {
            brand,
            search_query: String::new(),
            overlay: OverlayState::default(),
            settings: SettingsForm::default(),
            slideout_cursor: 0,
        }
    }

    /// Activate the sub-nav action button
    ///
    /// Exactly one effect per activation, not debounced: two rapid
    /// activations produce two effects.
    pub fn activate(&mut self) -> NavEffect {
        match self.brand.nav_variant() {
            NavVariant::Redirect { url } => NavEffect::Navigate(url),
            NavVariant::Slideout => {
                self.slideout_cursor = 0;
                self.overlay.open();
                NavEffect::OpenedOverlay
            }
            NavVariant::Settings => {
                self.settings.reset();
                self.overlay.open();
                NavEffect::OpenedOverlay
            }
        }
    }

    /// Dismiss the overlay; idempotent, shared by every dismiss affordance
    pub fn dismiss(&mut self) {
        self.overlay.dismiss();
    }

    /// Confirm the overlay (Save in the settings modal). The form is not
    /// persisted; confirmation converges on the same closed state as any
    /// other dismiss.
    pub fn confirm(&mut self) {
        self.overlay.dismiss();
    }

    /// Append a character to the search query
    pub fn search_push(&mut self, c: char) {
        self.search_query.push(c);
    }

    /// Remove the last character of the search query
    pub fn search_pop(&mut self) {
        self.search_query.pop();
    }

    /// Replace the query wholesale (picked from recent searches)
    pub fn set_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Catalog entries matching the current query
    pub fn filtered_vehicles(&self) -> Vec<Vehicle> {
        catalog::filter(self.brand, &self.search_query)
    }

    pub fn slideout_up(&mut self) {
        self.slideout_cursor = self.slideout_cursor.saturating_sub(1);
    }

    pub fn slideout_down(&mut self) {
        if self.slideout_cursor + 1 < SLIDEOUT_MENU.len() {
            self.slideout_cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_activation_navigates_without_state_change() {
        // Scenario A: the redirect brand requests navigation exactly once
        // per activation and its view state is untouched.
        let mut view = BrandView::new(Brand::Audi);
        let before = view.overlay;

        let effect = view.activate();
        assert_eq!(
            effect,
            NavEffect::Navigate("https://www.audi.com/en/models.html")
        );
        assert_eq!(view.overlay, before);
        assert!(!view.overlay.is_open());

        // Not debounced: a second activation fires again.
        assert_eq!(
            view.activate(),
            NavEffect::Navigate("https://www.audi.com/en/models.html")
        );
    }

    #[test]
    fn test_slideout_opens_and_backdrop_closes() {
        // Scenario B
        let mut view = BrandView::new(Brand::Ford);
        assert_eq!(view.activate(), NavEffect::OpenedOverlay);
        assert!(view.overlay.is_open());
        view.dismiss();
        assert!(!view.overlay.is_open());
    }

    #[test]
    fn test_all_modal_dismiss_paths_converge() {
        // Scenario C: Save, Cancel, and backdrop all end in Closed.
        let mut saved = BrandView::new(Brand::Lincoln);
        saved.activate();
        saved.confirm();

        let mut cancelled = BrandView::new(Brand::Lincoln);
        cancelled.activate();
        cancelled.dismiss();

        assert_eq!(saved.overlay, cancelled.overlay);
        assert_eq!(saved.overlay, OverlayState::Closed);
    }

    #[test]
    fn test_dismiss_twice_equals_dismiss_once() {
        let mut view = BrandView::new(Brand::Ford);
        view.activate();
        view.dismiss();
        let once = view.overlay;
        view.dismiss();
        assert_eq!(view.overlay, once);
    }

    #[test]
    fn test_dismiss_with_no_overlay_open_is_a_noop() {
        let mut view = BrandView::new(Brand::Lincoln);
        view.dismiss();
        assert_eq!(view.overlay, OverlayState::Closed);
    }

    #[test]
    fn test_keystrokes_accumulate_in_order() {
        let mut view = BrandView::new(Brand::Ford);
        for c in "mustang".chars() {
            view.search_push(c);
        }
        assert_eq!(view.search_query, "mustang");

        view.search_pop();
        view.search_pop();
        assert_eq!(view.search_query, "musta");

        view.search_push('n');
        assert_eq!(view.search_query, "mustan");
    }

    #[test]
    fn test_search_survives_overlay_lifecycle() {
        let mut view = BrandView::new(Brand::Lincoln);
        view.search_push('n');
        view.activate();
        view.confirm();
        assert_eq!(view.search_query, "n");
    }

    #[test]
    fn test_settings_form_resets_on_each_open() {
        let mut view = BrandView::new(Brand::Lincoln);
        view.activate();
        view.settings.dealer_next();
        view.settings.focus_down();
        view.settings.toggle_focused();
        view.dismiss();

        view.activate();
        assert_eq!(view.settings, SettingsForm::default());
    }

    #[test]
    fn test_slideout_cursor_clamps() {
        let mut view = BrandView::new(Brand::Ford);
        view.activate();
        view.slideout_up();
        assert_eq!(view.slideout_cursor, 0);
        for _ in 0..10 {
            view.slideout_down();
        }
        assert_eq!(view.slideout_cursor, SLIDEOUT_MENU.len() - 1);
    }

    #[test]
    fn test_filtered_vehicles_follow_query() {
        let mut view = BrandView::new(Brand::Audi);
        assert_eq!(view.filtered_vehicles().len(), 3);
        for c in "q7".chars() {
            view.search_push(c);
        }
        let matches = view.filtered_vehicles();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Q7");
    }
}
