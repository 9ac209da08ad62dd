//! Settings form state for the Lincoln modal
//!
//! Ephemeral form-field state local to the overlay. Discarded on every
//! dismiss path, Save included, and reset to defaults on the next open;
//! nothing here is persisted.

/// Dealer choices; index 0 is the unselected state
pub const DEALERS: &[&str] = &[
    "Select a dealer",
    "Lincoln of Downtown",
    "Lincoln Premium Motors",
    "Lincoln Luxury Center",
];

/// Notification checkbox labels, in focus order
pub const NOTIFICATIONS: &[&str] = &[
    "Service reminders",
    "New model alerts",
    "Promotional offers",
];

/// Form state for the settings modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    /// Index into `DEALERS`
    pub dealer_index: usize,
    /// Checkbox states, parallel to `NOTIFICATIONS`
    pub notifications: [bool; 3],
    /// Focused row: 0 is the dealer field, 1..=3 are the checkboxes
    pub focus: usize,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            dealer_index: 0,
            // Service reminders and new model alerts start checked
            notifications: [true, true, false],
            focus: 0,
        }
    }
}

impl SettingsForm {
    /// Back to defaults, called whenever the modal opens
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus_up(&mut self) {
        if self.focus > 0 {
            self.focus -= 1;
        }
    }

    pub fn focus_down(&mut self) {
        if self.focus < NOTIFICATIONS.len() {
            self.focus += 1;
        }
    }

    /// Cycle the dealer selection backward (only when the dealer row is
    /// focused)
    pub fn dealer_prev(&mut self) {
        if self.focus == 0 {
            self.dealer_index = if self.dealer_index == 0 {
                DEALERS.len() - 1
            } else {
                self.dealer_index - 1
            };
        }
    }

    /// Cycle the dealer selection forward (only when the dealer row is
    /// focused)
    pub fn dealer_next(&mut self) {
        if self.focus == 0 {
            self.dealer_index = (self.dealer_index + 1) % DEALERS.len();
        }
    }

    /// Toggle the focused checkbox; no effect on the dealer row
    pub fn toggle_focused(&mut self) {
        if self.focus >= 1 {
            let idx = self.focus - 1;
            self.notifications[idx] = !self.notifications[idx];
        }
    }

    pub fn dealer_label(&self) -> &'static str {
        DEALERS[self.dealer_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_state() {
        let form = SettingsForm::default();
        assert_eq!(form.dealer_index, 0);
        assert_eq!(form.notifications, [true, true, false]);
        assert_eq!(form.dealer_label(), "Select a dealer");
    }

    #[test]
    fn test_dealer_cycles_and_wraps() {
        let mut form = SettingsForm::default();
        form.dealer_next();
        assert_eq!(form.dealer_label(), "Lincoln of Downtown");
        form.dealer_prev();
        form.dealer_prev();
        assert_eq!(form.dealer_label(), "Lincoln Luxury Center");
    }

    #[test]
    fn test_dealer_keys_ignored_when_checkbox_focused() {
        let mut form = SettingsForm::default();
        form.focus_down();
        form.dealer_next();
        assert_eq!(form.dealer_index, 0);
    }

    #[test]
    fn test_toggle_only_affects_focused_checkbox() {
        let mut form = SettingsForm::default();
        form.toggle_focused(); // dealer row, no effect
        assert_eq!(form.notifications, [true, true, false]);

        form.focus_down();
        form.toggle_focused();
        assert_eq!(form.notifications, [false, true, false]);

        form.focus_down();
        form.focus_down();
        form.toggle_focused();
        assert_eq!(form.notifications, [false, true, true]);
    }

    #[test]
    fn test_focus_clamps_at_ends() {
        let mut form = SettingsForm::default();
        form.focus_up();
        assert_eq!(form.focus, 0);
        for _ in 0..10 {
            form.focus_down();
        }
        assert_eq!(form.focus, NOTIFICATIONS.len());
    }

    #[test]
    fn test_reset_discards_edits() {
        let mut form = SettingsForm::default();
        form.dealer_next();
        form.focus_down();
        form.toggle_focused();
        form.reset();
        assert_eq!(form, SettingsForm::default());
    }
}
