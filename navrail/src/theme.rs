use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Light/dark selection owned by the [`ThemeManager`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ColorMode {
    #[default]
    Dark,
    Light,
}

impl ColorMode {
    /// Return the opposite mode.
    pub(crate) fn toggled(self) -> Self {
        match self {
            ColorMode::Dark => ColorMode::Light,
            ColorMode::Light => ColorMode::Dark,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            ColorMode::Dark => "dark",
            ColorMode::Light => "light",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) background: String,
    pub(crate) background_secondary: String,
    pub(crate) foreground: String,
    pub(crate) dim_foreground: String,
    pub(crate) link: String,
    pub(crate) hover: String,
    pub(crate) hover_background: String,
    pub(crate) active: String,
    pub(crate) active_background: String,
    pub(crate) tooltip_background: String,
    pub(crate) tooltip_foreground: String,
    pub(crate) success: String,
    pub(crate) warning: String,
    pub(crate) danger: String,
}

impl ColorPalette {
    pub(crate) fn dark() -> Self {
        Self {
            background: String::from("#161822"),
            background_secondary: String::from("#0F1115"),
            foreground: String::from("#C0C5CE"),
            dim_foreground: String::from("#6B7280"),
            link: String::from("#9CA3AF"),
            hover: String::from("#ECEFF4"),
            hover_background: String::from("#232530"),
            active: String::from("#4FA6ED"),
            active_background: String::from("#1C2A3A"),
            tooltip_background: String::from("#2B2E3B"),
            tooltip_foreground: String::from("#FFFFFF"),
            success: String::from("#98C379"),
            warning: String::from("#E5C07B"),
            danger: String::from("#E06C75"),
        }
    }

    pub(crate) fn light() -> Self {
        Self {
            background: String::from("#FFFFFF"),
            background_secondary: String::from("#F3F4F6"),
            foreground: String::from("#1F2937"),
            dim_foreground: String::from("#9CA3AF"),
            link: String::from("#4B5563"),
            hover: String::from("#111827"),
            hover_background: String::from("#E5E7EB"),
            active: String::from("#2563EB"),
            active_background: String::from("#DBEAFE"),
            tooltip_background: String::from("#1F2937"),
            tooltip_foreground: String::from("#FFFFFF"),
            success: String::from("#16A34A"),
            warning: String::from("#CA8A04"),
            danger: String::from("#DC2626"),
        }
    }

    pub(crate) fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Dark => Self::dark(),
            ColorMode::Light => Self::light(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) background_secondary: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) link: Color,
    pub(crate) hover: Color,
    pub(crate) hover_background: Color,
    pub(crate) active: Color,
    pub(crate) active_background: Color,
    pub(crate) tooltip_background: Color,
    pub(crate) tooltip_foreground: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) danger: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            background: parse_hex_color(&p.background),
            background_secondary: parse_hex_color(&p.background_secondary),
            foreground: parse_hex_color(&p.foreground),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            link: parse_hex_color(&p.link),
            hover: parse_hex_color(&p.hover),
            hover_background: parse_hex_color(&p.hover_background),
            active: parse_hex_color(&p.active),
            active_background: parse_hex_color(&p.active_background),
            tooltip_background: parse_hex_color(&p.tooltip_background),
            tooltip_foreground: parse_hex_color(&p.tooltip_foreground),
            success: parse_hex_color(&p.success),
            warning: parse_hex_color(&p.warning),
            danger: parse_hex_color(&p.danger),
        }
    }
}

/// Parse a `#RRGGBB` string, falling back to magenta.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    value.parse::<Color>().unwrap_or_else(|_| {
        log::warn!("invalid palette color '{value}'");
        Color::from_rgb(1.0, 0.0, 1.0)
    })
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    mode: ColorMode,
    iced_palette: IcedColorPalette,
}

impl AppTheme {
    pub(crate) fn from_mode(mode: ColorMode) -> Self {
        let raw_palette = ColorPalette::for_mode(mode);
        Self {
            mode,
            iced_palette: IcedColorPalette::from(&raw_palette),
        }
    }

    pub(crate) fn mode(&self) -> ColorMode {
        self.mode
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_mode(ColorMode::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.active,
            success: palette.success,
            warning: palette.warning,
            danger: palette.danger,
        };

        Theme::custom(format!("navrail-{}", value.mode.label()), palette)
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Owns the current color mode and the theme derived from it.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new(mode: ColorMode) -> Self {
        Self {
            current: AppTheme::from_mode(mode),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn mode(&self) -> ColorMode {
        self.current.mode()
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Flip between dark and light, returning the new mode.
    pub(crate) fn toggle_color_mode(&mut self) -> ColorMode {
        let mode = self.current.mode().toggled();
        self.current = AppTheme::from_mode(mode);
        mode
    }
}
