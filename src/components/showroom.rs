//! Showroom component - vehicle card grid for the active brand
//!
//! Pure rendering over the brand view's state: title, welcome line, and a
//! row of vehicle cards filtered by the view's search query.

use crate::action::Action;
use crate::component::Component;
use crate::model::brand::Brand;
use crate::model::view::BrandView;
use anyhow::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

/// Showroom body below the sub-nav bar
#[derive(Default)]
pub struct ShowroomComponent;

impl ShowroomComponent {
    pub fn new() -> Self {
        Self
    }

    /// Draw the showroom for the given brand view
    pub fn draw_with(&mut self, frame: &mut Frame, area: Rect, view: &BrandView) -> Result<()> {
        let theme = view.brand.theme();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(7),
            ])
            .split(area);

        // Brand tabs so the user can see where they are
        let titles: Vec<Line> = Brand::all()
            .iter()
            .map(|b| Line::from(b.name()))
            .collect();
        let selected = Brand::all()
            .iter()
            .position(|b| *b == view.brand)
            .unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(" | ");
        frame.render_widget(tabs, chunks[0]);

        let title = Paragraph::new(Line::from(Span::styled(
            view.brand.name(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, chunks[1]);

        let welcome = Paragraph::new(Line::from(Span::styled(
            view.brand.welcome(),
            Style::default().fg(Color::Gray),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(welcome, chunks[2]);

        let vehicles = view.filtered_vehicles();
        if vehicles.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                format!("No vehicles match \"{}\"", view.search_query),
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(empty, chunks[3]);
            return Ok(());
        }

        let constraints: Vec<Constraint> = vehicles
            .iter()
            .map(|_| Constraint::Ratio(1, vehicles.len() as u32))
            .collect();
        let card_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(chunks[3]);

        for (vehicle, card_area) in vehicles.iter().zip(card_areas.iter()) {
            let card = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    vehicle.name,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    vehicle.tagline,
                    Style::default().fg(Color::Gray),
                )),
            ])
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(card, *card_area);
        }

        Ok(())
    }
}

impl Component for ShowroomComponent {
    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Rendering needs a brand view; App calls draw_with.
        Ok(())
    }
}
