// Theme system for the TUI
//
// Provides color themes that can be switched at runtime with 't'.
// Each theme defines colors for the chrome, the grid and the cell badges.

use crate::sheet::{PriorityCategory, StatusCategory};
use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
    Dracula,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Nord,
            ThemeKind::Dracula,
        ]
    }

    /// Look up a theme by display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
            ThemeKind::Dracula => "Dracula",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Dracula => Theme::dracula(),
        }
    }
}

/// Badge palette, one color per badge family
#[derive(Debug, Clone, Copy)]
pub struct BadgeColors {
    pub blue: Color,
    pub yellow: Color,
    pub green: Color,
    pub red: Color,
    pub gray: Color,
    /// Text drawn on top of a badge
    pub text: Color,
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,

    // Header, toolbar and status
    pub title: Color,
    pub accent: Color,
    pub status_bar: Color,

    // Grid
    pub column_header: Color,
    pub gutter: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub editing_bg: Color,
    pub editing_fg: Color,

    // Footer tabs
    pub tab_active: Color,
    pub tab_inactive: Color,

    pub error: Color,
    pub badges: BadgeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Cyan,

            title: Color::Cyan,
            accent: Color::Green,
            status_bar: Color::Green,

            column_header: Color::Cyan,
            gutter: Color::DarkGray,
            selected_bg: Color::DarkGray,
            selected_fg: Color::Yellow,
            editing_bg: Color::Blue,
            editing_fg: Color::White,

            tab_active: Color::Green,
            tab_inactive: Color::Gray,

            error: Color::Red,
            badges: BadgeColors {
                blue: Color::Blue,
                yellow: Color::Yellow,
                green: Color::Green,
                red: Color::Red,
                gray: Color::Gray,
                text: Color::Black,
            },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Blue,

            title: Color::Blue,
            accent: Color::Green,
            status_bar: Color::DarkGray,

            column_header: Color::Blue,
            gutter: Color::Gray,
            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,
            editing_bg: Color::LightYellow,
            editing_fg: Color::Black,

            tab_active: Color::Green,
            tab_inactive: Color::DarkGray,

            error: Color::Red,
            badges: BadgeColors {
                blue: Color::Rgb(219, 234, 254),   // blue-100
                yellow: Color::Rgb(254, 249, 195), // yellow-100
                green: Color::Rgb(220, 252, 231),  // green-100
                red: Color::Rgb(254, 226, 226),    // red-100
                gray: Color::Rgb(243, 244, 246),   // gray-100
                text: Color::Rgb(31, 41, 55),      // gray-800
            },
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(236, 239, 244),
            muted: Color::Rgb(76, 86, 106),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208), // Frost

            title: Color::Rgb(136, 192, 208),
            accent: Color::Rgb(163, 190, 140),
            status_bar: Color::Rgb(163, 190, 140),

            column_header: Color::Rgb(129, 161, 193),
            gutter: Color::Rgb(76, 86, 106),
            selected_bg: Color::Rgb(67, 76, 94),
            selected_fg: Color::Rgb(235, 203, 139),
            editing_bg: Color::Rgb(94, 129, 172),
            editing_fg: Color::Rgb(236, 239, 244),

            tab_active: Color::Rgb(163, 190, 140),
            tab_inactive: Color::Rgb(76, 86, 106),

            error: Color::Rgb(191, 97, 106),
            badges: BadgeColors {
                blue: Color::Rgb(129, 161, 193),
                yellow: Color::Rgb(235, 203, 139),
                green: Color::Rgb(163, 190, 140),
                red: Color::Rgb(191, 97, 106),
                gray: Color::Rgb(216, 222, 233),
                text: Color::Rgb(46, 52, 64),
            },
        }
    }

    /// Dracula theme
    pub fn dracula() -> Self {
        Self {
            bg: Color::Rgb(40, 42, 54),
            fg: Color::Rgb(248, 248, 242),
            muted: Color::Rgb(98, 114, 164),
            border: Color::Rgb(68, 71, 90),
            border_focused: Color::Rgb(189, 147, 249), // Purple

            title: Color::Rgb(139, 233, 253),
            accent: Color::Rgb(80, 250, 123),
            status_bar: Color::Rgb(80, 250, 123),

            column_header: Color::Rgb(189, 147, 249),
            gutter: Color::Rgb(98, 114, 164),
            selected_bg: Color::Rgb(68, 71, 90),
            selected_fg: Color::Rgb(241, 250, 140),
            editing_bg: Color::Rgb(98, 114, 164),
            editing_fg: Color::Rgb(248, 248, 242),

            tab_active: Color::Rgb(80, 250, 123),
            tab_inactive: Color::Rgb(98, 114, 164),

            error: Color::Rgb(255, 85, 85),
            badges: BadgeColors {
                blue: Color::Rgb(139, 233, 253),
                yellow: Color::Rgb(241, 250, 140),
                green: Color::Rgb(80, 250, 123),
                red: Color::Rgb(255, 85, 85),
                gray: Color::Rgb(191, 191, 191),
                text: Color::Rgb(40, 42, 54),
            },
        }
    }

    // Helper methods for creating styles

    /// Base style with theme foreground
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Border style (unfocused)
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border style (focused)
    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Title style
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    /// Selected cell style
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Cell being edited
    pub fn editing_style(&self) -> Style {
        Style::default().bg(self.editing_bg).fg(self.editing_fg)
    }

    fn badge(&self, color: Color) -> Style {
        Style::default().bg(color).fg(self.badges.text)
    }

    /// Badge style for a status value
    pub fn status_badge(&self, category: StatusCategory) -> Style {
        let b = &self.badges;
        self.badge(match category {
            StatusCategory::InProcess => b.blue,
            StatusCategory::NeedToStart => b.yellow,
            StatusCategory::Complete => b.green,
            StatusCategory::Blocked => b.red,
            StatusCategory::Default => b.gray,
        })
    }

    /// Badge style for a priority value
    pub fn priority_badge(&self, category: PriorityCategory) -> Style {
        let b = &self.badges;
        self.badge(match category {
            PriorityCategory::High => b.red,
            PriorityCategory::Medium => b.yellow,
            PriorityCategory::Low => b.blue,
            PriorityCategory::Default => b.gray,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_resolve() {
        assert_eq!(ThemeKind::from_name("nord"), Some(ThemeKind::Nord));
        assert_eq!(ThemeKind::from_name(" Dracula "), Some(ThemeKind::Dracula));
        assert_eq!(ThemeKind::from_name("Solarized"), None);
    }

    #[test]
    fn cycling_visits_every_theme() {
        let mut kind = ThemeKind::default();
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);
    }

    #[test]
    fn badges_share_colors_across_columns() {
        let theme = Theme::dark();
        assert_eq!(
            theme.status_badge(StatusCategory::Blocked).bg,
            theme.priority_badge(PriorityCategory::High).bg
        );
        assert_eq!(
            theme.status_badge(StatusCategory::Default).bg,
            Some(theme.badges.gray)
        );
    }
}
