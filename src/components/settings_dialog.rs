//! Settings modal component (Lincoln)
//!
//! A centered dialog with a preferred-dealer selection and notification
//! checkboxes. Save, Cancel, Esc, and a backdrop click all dismiss it the
//! same way; the form state is discarded on close.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::settings::NOTIFICATIONS;
use crate::model::view::BrandView;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Lincoln settings modal
#[derive(Default)]
pub struct SettingsDialog {
    /// Where the modal was last drawn, for backdrop hit-testing
    modal_area: Rect,
}

impl SettingsDialog {
    pub fn new() -> Self {
        Self::default()
    }

    fn on_backdrop(&self, column: u16, row: u16) -> bool {
        let m = self.modal_area;
        !(column >= m.x && column < m.x + m.width && row >= m.y && row < m.y + m.height)
    }

    /// Draw the modal over the given full-screen area
    pub fn draw_with(&mut self, frame: &mut Frame, area: Rect, view: &BrandView) -> Result<()> {
        let accent = view.brand.theme().accent;
        let form = &view.settings;
        let popup_area = centered_popup(area, 52, 14);
        self.modal_area = popup_area;

        frame.render_widget(Clear, popup_area);

        let row_style = |focused: bool| {
            if focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            }
        };

        let mut content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Preferred Dealer",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("   ◀ {} ▶", form.dealer_label()),
                row_style(form.focus == 0),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Notifications",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        for (i, label) in NOTIFICATIONS.iter().enumerate() {
            let mark = if form.notifications[i] { "x" } else { " " };
            content.push(Line::from(Span::styled(
                format!("   [{}] {}", mark, label),
                row_style(form.focus == i + 1),
            )));
        }

        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Save  "),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel  "),
            Span::styled(
                " Space ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Toggle"),
        ]));

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .title(format!(" {} Settings ", view.brand.name()))
                .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

impl Component for SettingsDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('c') => Some(Action::CloseOverlay),
            KeyCode::Enter | KeyCode::Char('s') => Some(Action::ConfirmOverlay),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::OverlayUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::OverlayDown),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::OverlayLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::OverlayRight),
            KeyCode::Char(' ') => Some(Action::OverlayToggle),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && self.on_backdrop(mouse.column, mouse.row)
        {
            return Ok(Some(Action::CloseOverlay));
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Rendering needs a brand view; App calls draw_with.
        Ok(())
    }
}
