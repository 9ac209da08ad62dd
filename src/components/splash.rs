//! Splash screen component
//!
//! Displays the showroom wordmark briefly before transitioning to the
//! main app.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1200),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    fn get_logo() -> Vec<&'static str> {
        vec![
            " ____  _                                            ",
            "/ ___|| |__   _____      ___ __ ___   ___  _ __ ___  ",
            "\\___ \\| '_ \\ / _ \\ \\ /\\ / / '__/ _ \\ / _ \\| '_ ` _ \\ ",
            " ___) | | | | (_) \\ V  V /| | | (_) | (_) | | | | | |",
            "|____/|_| |_|\\___/ \\_/\\_/ |_|  \\___/ \\___/|_| |_| |_|",
        ]
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        Ok(Some(Action::SplashComplete))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let logo = Self::get_logo();
        let logo_height = logo.len() as u16 + 4;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(logo_height),
                Constraint::Min(0),
            ])
            .split(area);

        let mut lines: Vec<Line> = logo
            .iter()
            .map(|row| {
                Line::from(Span::styled(
                    *row,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Audi · Ford · Lincoln",
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph =
            Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(paragraph, chunks[1]);

        Ok(())
    }
}
