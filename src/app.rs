//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. App coordinates between components; the brand views own
//! their own search and overlay state.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, HelpDialog, HistoryDialog, QuitDialog, SettingsDialog,
    ShowroomComponent, SlideoutPanel, SplashComponent, SubNav, SubNavContext,
};
use crate::config::Config;
use crate::model::brand::{Brand, NavVariant};
use crate::model::history::{self, SearchEntry, SearchHistory};
use crate::model::ui::{AppMode, Dialog};
use crate::model::view::BrandView;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// One view per brand; each owns its search query and overlay state
    pub views: Vec<BrandView>,

    /// Index of the active brand view
    pub active: usize,

    /// App-level dialog layered above everything else
    pub dialog: Option<Dialog>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Recent committed searches, persisted across runs
    pub recent_searches: Vec<SearchEntry>,

    /// URL requested by a redirect activation; the main loop spawns the
    /// browser and takes it (fire-and-forget, no completion tracking)
    pub pending_nav_url: Option<String>,

    /// Loaded config
    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub subnav: SubNav,
    pub showroom: ShowroomComponent,
    pub slideout: SlideoutPanel,
    pub settings_dialog: SettingsDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub history_dialog: HistoryDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance from the on-disk config
    pub fn new() -> App {
        let config = Config::load().unwrap_or_default();
        let mut app = Self::with_config(config);
        app.recent_searches = SearchHistory::load();
        app
    }

    /// Create an App with an explicit config and no persisted history
    pub fn with_config(config: Config) -> App {
        let views: Vec<BrandView> = Brand::all().into_iter().map(BrandView::new).collect();
        let active = match config.start_brand.to_lowercase().as_str() {
            "ford" => 1,
            "lincoln" => 2,
            _ => 0,
        };

        App {
            mode: AppMode::Splash,
            views,
            active,
            dialog: None,
            should_quit: false,
            status_message: None,
            recent_searches: Vec::new(),
            pending_nav_url: None,
            config,
            splash: SplashComponent::new(),
            subnav: SubNav::new(),
            showroom: ShowroomComponent::new(),
            slideout: SlideoutPanel::new(),
            settings_dialog: SettingsDialog::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            history_dialog: HistoryDialog::new(),
        }
    }

    pub fn active_view(&self) -> &BrandView {
        &self.views[self.active]
    }

    pub fn active_view_mut(&mut self) -> &mut BrandView {
        &mut self.views[self.active]
    }

    /// Key handling for the running screen with no dialog on top
    fn handle_running_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.active_view().overlay.is_open() {
            return match self.active_view().brand.nav_variant() {
                NavVariant::Slideout => self.slideout.handle_key_event(key),
                NavVariant::Settings => self.settings_dialog.handle_key_event(key),
                // The redirect brand never has an open overlay.
                NavVariant::Redirect { .. } => Ok(None),
            };
        }

        if self.subnav.search_mode {
            return self.subnav.handle_key_event(key);
        }

        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char('a') | KeyCode::Enter => Some(Action::ActivateNav),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('r') => Some(Action::OpenHistory),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Tab | KeyCode::Char(']') => Some(Action::NextBrand),
            KeyCode::BackTab | KeyCode::Char('[') => Some(Action::PrevBrand),
            _ => None,
        };
        Ok(action)
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Ctrl-C always force-quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(dialog) = self.dialog {
                    match dialog {
                        Dialog::QuitConfirm => self.quit_dialog.handle_key_event(key),
                        Dialog::Help => self.help_dialog.handle_key_event(key),
                        Dialog::History => self.history_dialog.handle_key_event(key),
                    }
                } else {
                    self.handle_running_key_event(key)
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode != AppMode::Running || self.dialog.is_some() {
            return Ok(None);
        }

        if self.active_view().overlay.is_open() {
            return match self.active_view().brand.nav_variant() {
                NavVariant::Slideout => self.slideout.handle_mouse_event(mouse),
                NavVariant::Settings => self.settings_dialog.handle_mouse_event(mouse),
                NavVariant::Redirect { .. } => Ok(None),
            };
        }

        self.subnav.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────
            // Brand Navigation
            // ─────────────────────────────────────────────────────────────
            Action::NextBrand => {
                self.active = (self.active + 1) % self.views.len();
                self.subnav.exit_search_mode();
            }
            Action::PrevBrand => {
                self.active = if self.active == 0 {
                    self.views.len() - 1
                } else {
                    self.active - 1
                };
                self.subnav.exit_search_mode();
            }

            // ─────────────────────────────────────────────────────────────
            // Sub-nav Action Button
            // ─────────────────────────────────────────────────────────────
            Action::ActivateNav => {
                use crate::model::view::NavEffect;
                match self.active_view_mut().activate() {
                    NavEffect::Navigate(url) => {
                        self.pending_nav_url = Some(url.to_string());
                        self.status_message = Some(format!("Opening {}", url));
                    }
                    NavEffect::OpenedOverlay => {}
                }
            }

            // ─────────────────────────────────────────────────────────────
            // Overlays
            // ─────────────────────────────────────────────────────────────
            Action::CloseOverlay => {
                self.active_view_mut().dismiss();
            }
            Action::ConfirmOverlay => {
                self.active_view_mut().confirm();
            }
            Action::OverlayUp => {
                let view = self.active_view_mut();
                match view.brand.nav_variant() {
                    NavVariant::Slideout => view.slideout_up(),
                    NavVariant::Settings => view.settings.focus_up(),
                    NavVariant::Redirect { .. } => {}
                }
            }
            Action::OverlayDown => {
                let view = self.active_view_mut();
                match view.brand.nav_variant() {
                    NavVariant::Slideout => view.slideout_down(),
                    NavVariant::Settings => view.settings.focus_down(),
                    NavVariant::Redirect { .. } => {}
                }
            }
            Action::OverlayLeft => {
                self.active_view_mut().settings.dealer_prev();
            }
            Action::OverlayRight => {
                self.active_view_mut().settings.dealer_next();
            }
            Action::OverlayToggle => {
                self.active_view_mut().settings.toggle_focused();
            }

            // ─────────────────────────────────────────────────────────────
            // Dialogs
            // ─────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.dialog = Some(Dialog::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.dialog = Some(Dialog::Help);
            }
            Action::OpenHistory => {
                self.history_dialog.set_entries(self.recent_searches.clone());
                self.dialog = Some(Dialog::History);
            }
            Action::CloseDialog => {
                self.dialog = None;
            }

            // ─────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────
            Action::EnterSearchMode => {
                self.subnav.enter_search_mode();
            }
            Action::ExitSearchMode => {
                self.subnav.exit_search_mode();
            }
            Action::SearchInput(c) => {
                self.active_view_mut().search_push(c);
            }
            Action::SearchBackspace => {
                self.active_view_mut().search_pop();
            }
            Action::CommitSearch => {
                let brand = self.active_view().brand.name().to_string();
                let query = self.active_view().search_query.clone();
                history::record(&mut self.recent_searches, &brand, &query);
                let _ = SearchHistory::save(&self.recent_searches);
                self.subnav.exit_search_mode();
            }
            Action::ApplySearch(query) => {
                self.active_view_mut().set_query(&query);
                self.dialog = None;
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let layout = calculate_main_layout(area, self.status_message.is_some());

                let view = &self.views[self.active];
                let ctx = SubNavContext {
                    icon: view.brand.nav_icon(),
                    placeholder: view.brand.search_placeholder(),
                    query: Some(&view.search_query),
                    accent: view.brand.theme().accent,
                };
                self.subnav.draw_with(frame, layout.subnav, &ctx)?;
                self.showroom.draw_with(frame, layout.content, view)?;

                if let Some(status_area) = layout.status {
                    if let Some(ref message) = self.status_message {
                        let status = Paragraph::new(Line::from(Span::styled(
                            message.as_str(),
                            Style::default().fg(Color::Green),
                        )));
                        frame.render_widget(status, status_area);
                    }
                }

                let help = Paragraph::new(Line::from(vec![
                    Span::styled(
                        " a ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("Action  "),
                    Span::styled(
                        " / ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("Search  "),
                    Span::styled(
                        " Tab ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("Brand  "),
                    Span::styled(
                        " r ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("Recent  "),
                    Span::styled(
                        " ? ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("Help  "),
                    Span::styled(
                        " q ",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("Quit"),
                ]))
                .alignment(ratatui::layout::Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
                frame.render_widget(help, layout.help);

                // Brand overlay above the showroom
                if self.views[self.active].overlay.is_open() {
                    let view = &self.views[self.active];
                    match view.brand.nav_variant() {
                        NavVariant::Slideout => self.slideout.draw_with(frame, area, view)?,
                        NavVariant::Settings => {
                            self.settings_dialog.draw_with(frame, area, view)?
                        }
                        NavVariant::Redirect { .. } => {}
                    }
                }

                // App dialogs above everything
                if let Some(dialog) = self.dialog {
                    match dialog {
                        Dialog::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                        Dialog::Help => self.help_dialog.draw(frame, area)?,
                        Dialog::History => self.history_dialog.draw(frame, area)?,
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::overlay::OverlayState;

    fn running_app() -> App {
        let mut app = App::with_config(Config::default());
        app.mode = AppMode::Running;
        app
    }

    fn running_app_for(brand: &str) -> App {
        let mut app = App::with_config(Config {
            start_brand: brand.to_string(),
            browser_command: String::new(),
        });
        app.mode = AppMode::Running;
        app
    }

    #[test]
    fn test_start_brand_selects_view() {
        assert_eq!(running_app_for("audi").active_view().brand, Brand::Audi);
        assert_eq!(running_app_for("ford").active_view().brand, Brand::Ford);
        assert_eq!(
            running_app_for("lincoln").active_view().brand,
            Brand::Lincoln
        );
        // Unknown names fall back to the first brand.
        assert_eq!(running_app_for("saab").active_view().brand, Brand::Audi);
    }

    #[test]
    fn test_redirect_activation_queues_navigation_once() {
        let mut app = running_app_for("audi");
        app.update(Action::ActivateNav).unwrap();

        assert_eq!(
            app.pending_nav_url.take(),
            Some("https://www.audi.com/en/models.html".to_string())
        );
        assert!(!app.active_view().overlay.is_open());
        // Nothing queued until the next activation.
        assert_eq!(app.pending_nav_url, None);

        app.update(Action::ActivateNav).unwrap();
        assert!(app.pending_nav_url.is_some());
    }

    #[test]
    fn test_slideout_open_and_close() {
        let mut app = running_app_for("ford");
        app.update(Action::ActivateNav).unwrap();
        assert!(app.active_view().overlay.is_open());
        assert_eq!(app.pending_nav_url, None);

        app.update(Action::CloseOverlay).unwrap();
        assert!(!app.active_view().overlay.is_open());

        // A second close is a no-op.
        app.update(Action::CloseOverlay).unwrap();
        assert!(!app.active_view().overlay.is_open());
    }

    #[test]
    fn test_modal_save_and_cancel_converge() {
        let mut app = running_app_for("lincoln");

        app.update(Action::ActivateNav).unwrap();
        app.update(Action::ConfirmOverlay).unwrap();
        assert_eq!(app.active_view().overlay, OverlayState::Closed);

        app.update(Action::ActivateNav).unwrap();
        app.update(Action::CloseOverlay).unwrap();
        assert_eq!(app.active_view().overlay, OverlayState::Closed);
    }

    #[test]
    fn test_search_edits_accumulate_in_order() {
        let mut app = running_app_for("ford");
        app.update(Action::EnterSearchMode).unwrap();
        for c in "truck".chars() {
            app.update(Action::SearchInput(c)).unwrap();
        }
        app.update(Action::SearchBackspace).unwrap();
        assert_eq!(app.active_view().search_query, "truc");
    }

    #[test]
    fn test_brand_views_are_independent() {
        let mut app = running_app();
        app.update(Action::SearchInput('a')).unwrap();
        app.update(Action::NextBrand).unwrap();
        assert_eq!(app.active_view().brand, Brand::Ford);
        assert_eq!(app.active_view().search_query, "");

        app.update(Action::ActivateNav).unwrap();
        app.update(Action::NextBrand).unwrap();
        app.update(Action::PrevBrand).unwrap();
        // Ford's slideout is still open after a round trip.
        assert!(app.active_view().overlay.is_open());
        app.update(Action::PrevBrand).unwrap();
        assert_eq!(app.active_view().search_query, "a");
    }

    #[test]
    fn test_overlay_navigation_routes_by_variant() {
        let mut app = running_app_for("lincoln");
        app.update(Action::ActivateNav).unwrap();
        app.update(Action::OverlayDown).unwrap();
        app.update(Action::OverlayToggle).unwrap();
        assert_eq!(app.active_view().settings.notifications, [false, true, false]);

        let mut app = running_app_for("ford");
        app.update(Action::ActivateNav).unwrap();
        app.update(Action::OverlayDown).unwrap();
        assert_eq!(app.active_view().slideout_cursor, 1);
    }

    #[test]
    fn test_apply_search_sets_query_and_closes_dialog() {
        let mut app = running_app_for("ford");
        app.dialog = Some(Dialog::History);
        app.update(Action::ApplySearch("mustang".to_string())).unwrap();
        assert_eq!(app.active_view().search_query, "mustang");
        assert_eq!(app.dialog, None);
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = running_app();
        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.dialog, Some(Dialog::QuitConfirm));
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }
}
