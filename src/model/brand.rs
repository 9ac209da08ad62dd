//! Brand definitions
//!
//! Each brand carries its theme, its sub-nav configuration, and the nav
//! action variant bound to it at construction. The variant set is closed:
//! no runtime inspection decides what the action button does.

use ratatui::style::Color;

/// The three brand views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Audi,
    Ford,
    Lincoln,
}

/// What the sub-nav action button does for a brand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVariant {
    /// Fire-and-forget external navigation; no overlay state at all
    Redirect { url: &'static str },
    /// Slide-in menu panel anchored to the left edge
    Slideout,
    /// Centered settings modal with a dealer selection and notifications
    Settings,
}

/// Explicit brand theme passed into rendering, never ambient state
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color for titles and borders
    pub accent: Color,
}

impl Brand {
    pub fn all() -> Vec<Brand> {
        vec![Brand::Audi, Brand::Ford, Brand::Lincoln]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Brand::Audi => "Audi",
            Brand::Ford => "Ford",
            Brand::Lincoln => "Lincoln",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            Brand::Audi => Theme { accent: Color::Red },
            Brand::Ford => Theme { accent: Color::Blue },
            Brand::Lincoln => Theme { accent: Color::White },
        }
    }

    /// Glyph shown on the sub-nav action button
    pub fn nav_icon(&self) -> &'static str {
        match self {
            Brand::Audi => "↗",
            Brand::Ford => "≡",
            Brand::Lincoln => "⚙",
        }
    }

    /// Placeholder for the sub-nav search field
    pub fn search_placeholder(&self) -> &'static str {
        match self {
            Brand::Audi => "Search Audi models...",
            Brand::Ford => "Search Ford vehicles...",
            Brand::Lincoln => "Search Lincoln luxury vehicles...",
        }
    }

    /// Intro line shown above the vehicle cards
    pub fn welcome(&self) -> &'static str {
        match self {
            Brand::Audi => {
                "Welcome to the Audi showroom. Press 'a' to open the official Audi models page."
            }
            Brand::Ford => {
                "Welcome to the Ford showroom. Press 'a' to open the menu slideout."
            }
            Brand::Lincoln => {
                "Welcome to the Lincoln luxury showroom. Press 'a' to open settings."
            }
        }
    }

    /// The nav action variant bound to this brand
    pub fn nav_variant(&self) -> NavVariant {
        match self {
            Brand::Audi => NavVariant::Redirect {
                url: "https://www.audi.com/en/models.html",
            },
            Brand::Ford => NavVariant::Slideout,
            Brand::Lincoln => NavVariant::Settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_brand_has_a_distinct_variant() {
        assert!(matches!(
            Brand::Audi.nav_variant(),
            NavVariant::Redirect { .. }
        ));
        assert_eq!(Brand::Ford.nav_variant(), NavVariant::Slideout);
        assert_eq!(Brand::Lincoln.nav_variant(), NavVariant::Settings);
    }

    #[test]
    fn test_redirect_url_is_fixed() {
        if let NavVariant::Redirect { url } = Brand::Audi.nav_variant() {
            assert_eq!(url, "https://www.audi.com/en/models.html");
        } else {
            panic!("Audi should be the redirect brand");
        }
    }
}
