//! Recent searches dialog component
//!
//! Lists committed search queries; Enter re-applies the selected query to
//! its brand's view.

use crate::action::Action;
use crate::component::Component;
use crate::model::history::SearchEntry;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Recent searches dialog
#[derive(Default)]
pub struct HistoryDialog {
    /// Snapshot of the entries, set when the dialog opens
    pub entries: Vec<SearchEntry>,
    pub selected_index: usize,
    list_state: ListState,
}

impl HistoryDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the entries to display and reset the selection
    pub fn set_entries(&mut self, entries: Vec<SearchEntry>) {
        self.entries = entries;
        self.selected_index = 0;
        self.list_state = ListState::default();
        if !self.entries.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < self.entries.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for HistoryDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('r') | KeyCode::Char('q') => Some(Action::CloseDialog),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Enter => self
                .entries
                .get(self.selected_index)
                .map(|e| Action::ApplySearch(e.query.clone())),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Recent Searches ")
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::Magenta));

        if self.entries.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  No searches yet - press '/' and type, then Enter.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(block);
            frame.render_widget(empty, dialog_area);
            return Ok(());
        }

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", entry.formatted_time()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{:<8}", entry.brand),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(entry.query.clone()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_stateful_widget(list, dialog_area, &mut self.list_state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn entry(brand: &str, query: &str) -> SearchEntry {
        SearchEntry {
            timestamp: Local::now(),
            brand: brand.to_string(),
            query: query.to_string(),
        }
    }

    #[test]
    fn test_enter_applies_selected_query() {
        let mut dialog = HistoryDialog::new();
        dialog.set_entries(vec![entry("Ford", "mustang"), entry("Audi", "q7")]);

        dialog.handle_key_event(key(KeyCode::Down)).unwrap();
        let action = dialog.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::ApplySearch("q7".to_string())));
    }

    #[test]
    fn test_enter_with_no_entries_does_nothing() {
        let mut dialog = HistoryDialog::new();
        dialog.set_entries(Vec::new());
        let action = dialog.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, None);
    }

    #[test]
    fn test_selection_clamps_at_list_edges() {
        let mut dialog = HistoryDialog::new();
        dialog.set_entries(vec![entry("Ford", "a"), entry("Ford", "b")]);

        dialog.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(dialog.selected_index, 0);
        for _ in 0..5 {
            dialog.handle_key_event(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(dialog.selected_index, 1);
    }
}
