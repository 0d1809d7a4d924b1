use crate::state::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme. `Palette::for_theme` is the only place a `Theme`
/// turns into concrete colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub item: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub brand: Color,
    pub icon: Color,
    pub lyrics_bg: Color,
    pub lyrics_fg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(249, 250, 251),
                surface: Color::Rgb(255, 255, 255),
                item: Color::Rgb(243, 244, 246),
                text: Color::Rgb(17, 24, 39),
                muted: Color::Rgb(75, 85, 99),
                accent: Color::Rgb(147, 51, 234),
                brand: Color::Rgb(236, 72, 153),
                icon: Color::Rgb(55, 65, 81),
                lyrics_bg: Color::Rgb(31, 41, 55),
                lyrics_fg: Color::Rgb(255, 255, 255),
            },
            Theme::Dark => Self {
                background: Color::Rgb(17, 24, 39),
                surface: Color::Rgb(31, 41, 55),
                item: Color::Rgb(55, 65, 81),
                text: Color::Rgb(243, 244, 246),
                muted: Color::Rgb(209, 213, 219),
                accent: Color::Rgb(192, 132, 252),
                brand: Color::Rgb(236, 72, 153),
                icon: Color::Rgb(253, 224, 71),
                lyrics_bg: Color::Rgb(31, 41, 55),
                lyrics_fg: Color::Rgb(255, 255, 255),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn brand(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self, focused: bool) -> Style {
        let style = Style::default().bg(self.item).fg(self.accent);
        if focused {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            style
        }
    }

    pub fn lyrics(&self) -> Style {
        Style::default().fg(self.lyrics_fg).bg(self.lyrics_bg)
    }

    /// Icon for the theme toggle: a sun offers light mode, a moon offers dark.
    pub fn theme_icon(theme: Theme) -> &'static str {
        match theme {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}
