//! Sub-navigation bar component
//!
//! A horizontal bar with exactly one action affordance on the leading edge
//! and a search field in the center. The bar owns no brand state: the icon,
//! placeholder, and query are supplied per draw, and user input bubbles
//! upward as Actions.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Per-draw inputs for the bar; the view that owns the state fills this in
pub struct SubNavContext<'a> {
    /// Glyph rendered on the action button
    pub icon: &'a str,
    /// Hint text shown while the query is empty
    pub placeholder: &'a str,
    /// Controlled query value; `None` leaves the field presentationally
    /// inert (input accepted, nothing observable upstream)
    pub query: Option<&'a str>,
    /// Brand accent for the button border
    pub accent: Color,
}

/// Sub-navigation bar
///
/// Remembers where the button and field were drawn so mouse clicks can be
/// hit-tested against them.
pub struct SubNav {
    /// Whether keystrokes are routed into the search field
    pub search_mode: bool,
    /// Whether a search binding was supplied at construction
    search_bound: bool,
    button_area: Rect,
    field_area: Rect,
}

impl Default for SubNav {
    fn default() -> Self {
        Self::new()
    }
}

impl SubNav {
    /// Bar with a live search binding
    pub fn new() -> Self {
        Self {
            search_mode: false,
            search_bound: true,
            button_area: Rect::default(),
            field_area: Rect::default(),
        }
    }

    /// Bar whose search field is presentationally inert
    pub fn without_search() -> Self {
        Self {
            search_bound: false,
            ..Self::new()
        }
    }

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height
    }

    /// Draw the bar with the supplied context
    pub fn draw_with(&mut self, frame: &mut Frame, area: Rect, ctx: &SubNavContext) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(area);

        self.button_area = chunks[0];
        self.field_area = chunks[1];

        let button = Paragraph::new(Line::from(Span::styled(
            ctx.icon,
            Style::default()
                .fg(ctx.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ctx.accent)),
        );
        frame.render_widget(button, chunks[0]);

        // Inner width of the field, minus borders and the leading glyph
        let budget = chunks[1].width.saturating_sub(6) as usize;
        let query = ctx.query.unwrap_or("");
        let mut shown = query.to_string();
        while shown.width() > budget && !shown.is_empty() {
            shown.remove(0);
        }

        let field_line = if query.is_empty() && !self.search_mode {
            Line::from(vec![
                Span::styled("🔍 ", Style::default().fg(Color::DarkGray)),
                Span::styled(ctx.placeholder, Style::default().fg(Color::DarkGray)),
            ])
        } else {
            let mut spans = vec![
                Span::styled("🔍 ", Style::default().fg(Color::DarkGray)),
                Span::raw(shown),
            ];
            if self.search_mode {
                spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        };

        let field_border = if self.search_mode {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let field = Paragraph::new(field_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border),
        );
        frame.render_widget(field, chunks[1]);

        Ok(())
    }
}

impl Component for SubNav {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.search_mode {
            return Ok(None);
        }
        let action = match key.code {
            KeyCode::Esc => Some(Action::ExitSearchMode),
            KeyCode::Enter => Some(Action::CommitSearch),
            // Without a binding the field swallows edits silently.
            KeyCode::Backspace if self.search_bound => Some(Action::SearchBackspace),
            KeyCode::Char(c) if self.search_bound => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        if Self::contains(self.button_area, mouse.column, mouse.row) {
            return Ok(Some(Action::ActivateNav));
        }
        if Self::contains(self.field_area, mouse.column, mouse.row) {
            return Ok(Some(Action::EnterSearchMode));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Fallback rendering without brand context; App uses draw_with.
        let ctx = SubNavContext {
            icon: "·",
            placeholder: "Search...",
            query: None,
            accent: Color::White,
        };
        self.draw_with(frame, area, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_keystrokes_forwarded_when_bound() {
        let mut subnav = SubNav::new();
        subnav.enter_search_mode();
        let action = subnav.handle_key_event(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(action, Some(Action::SearchInput('x')));
        let action = subnav.handle_key_event(key(KeyCode::Backspace)).unwrap();
        assert_eq!(action, Some(Action::SearchBackspace));
    }

    #[test]
    fn test_unbound_field_swallows_input() {
        // Typing into a bar constructed without a search binding must not
        // panic and must not emit anything upstream.
        let mut subnav = SubNav::without_search();
        subnav.enter_search_mode();
        for c in "quiet".chars() {
            let action = subnav.handle_key_event(key(KeyCode::Char(c))).unwrap();
            assert_eq!(action, None);
        }
        assert_eq!(
            subnav.handle_key_event(key(KeyCode::Backspace)).unwrap(),
            None
        );
    }

    #[test]
    fn test_no_actions_outside_search_mode() {
        let mut subnav = SubNav::new();
        let action = subnav.handle_key_event(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(action, None);
    }

    #[test]
    fn test_escape_and_enter_leave_search_mode() {
        let mut subnav = SubNav::new();
        subnav.enter_search_mode();
        assert_eq!(
            subnav.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::ExitSearchMode)
        );
        assert_eq!(
            subnav.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::CommitSearch)
        );
    }

    #[test]
    fn test_button_click_activates() {
        let mut subnav = SubNav::new();
        subnav.button_area = Rect::new(0, 0, 7, 3);
        subnav.field_area = Rect::new(7, 0, 40, 3);

        let action = subnav.handle_mouse_event(click(3, 1)).unwrap();
        assert_eq!(action, Some(Action::ActivateNav));

        // Two clicks fire twice: activation is not debounced.
        let action = subnav.handle_mouse_event(click(3, 1)).unwrap();
        assert_eq!(action, Some(Action::ActivateNav));
    }

    #[test]
    fn test_field_click_enters_search_mode() {
        let mut subnav = SubNav::new();
        subnav.button_area = Rect::new(0, 0, 7, 3);
        subnav.field_area = Rect::new(7, 0, 40, 3);

        let action = subnav.handle_mouse_event(click(20, 1)).unwrap();
        assert_eq!(action, Some(Action::EnterSearchMode));
    }

    #[test]
    fn test_click_elsewhere_does_nothing() {
        let mut subnav = SubNav::new();
        subnav.button_area = Rect::new(0, 0, 7, 3);
        subnav.field_area = Rect::new(7, 0, 40, 3);

        let action = subnav.handle_mouse_event(click(60, 10)).unwrap();
        assert_eq!(action, None);
    }
}
