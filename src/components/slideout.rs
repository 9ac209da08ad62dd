//! Slideout panel component (Ford)
//!
//! A menu panel anchored to the left edge, drawn over the showroom.
//! Dismissed by Esc, 'x', or a click on the backdrop; every path maps to
//! the same `CloseOverlay` action.

use crate::action::Action;
use crate::component::Component;
use crate::model::view::{BrandView, SLIDEOUT_MENU};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Width of the panel in columns
const PANEL_WIDTH: u16 = 34;

/// Slideout menu panel
pub struct SlideoutPanel {
    /// Where the panel was last drawn, for backdrop hit-testing
    panel_area: Rect,
    list_state: ListState,
}

impl Default for SlideoutPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideoutPanel {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            panel_area: Rect::default(),
            list_state,
        }
    }

    /// Draw the panel over the given full-screen area
    pub fn draw_with(&mut self, frame: &mut Frame, area: Rect, view: &BrandView) -> Result<()> {
        let accent = view.brand.theme().accent;
        let panel = Rect::new(
            area.x,
            area.y,
            PANEL_WIDTH.min(area.width),
            area.height,
        );
        self.panel_area = panel;
        self.list_state.select(Some(view.slideout_cursor));

        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(format!(" {} Menu ", view.brand.name()))
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let items: Vec<ListItem> = SLIDEOUT_MENU
            .iter()
            .map(|entry| ListItem::new(Line::from(format!("  {}", entry))))
            .collect();
        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        );

        let mut list_area = inner;
        if list_area.height > 2 {
            // Leave the bottom line for the close hint
            list_area.height -= 2;
        }
        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        if inner.height >= 2 {
            let hint_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
            let hint = Paragraph::new(Line::from(vec![
                Span::styled(
                    " Esc/x ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Close  "),
                Span::styled(
                    " j/k ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Navigate"),
            ]));
            frame.render_widget(hint, hint_area);
        }

        Ok(())
    }

    fn on_backdrop(&self, column: u16, row: u16) -> bool {
        let p = self.panel_area;
        !(column >= p.x && column < p.x + p.width && row >= p.y && row < p.y + p.height)
    }
}

impl Component for SlideoutPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('x') => Some(Action::CloseOverlay),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::OverlayUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::OverlayDown),
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
