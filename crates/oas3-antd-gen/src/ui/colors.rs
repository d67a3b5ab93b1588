use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{Ansi256Color, AnsiColor, Color as ClapColor, RgbColor, Style, Styles},
};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// Terminal palette; every accessor returns [`Color::Reset`] when colors are disabled.
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
  Color::Rgb { r, g, b }
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, dark: Color, light: Color) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => dark,
      Theme::Light => light,
    }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(rgb(110, 150, 170), rgb(80, 70, 60))
  }

  pub const fn primary(&self) -> Color {
    self.pick(rgb(22, 119, 255), rgb(9, 88, 217))
  }

  pub const fn accent(&self) -> Color {
    self.pick(rgb(250, 140, 22), rgb(212, 107, 8))
  }

  pub const fn info(&self) -> Color {
    self.pick(rgb(19, 194, 194), rgb(8, 151, 156))
  }

  pub const fn success(&self) -> Color {
    self.pick(rgb(82, 196, 26), rgb(56, 158, 13))
  }

  pub const fn label(&self) -> Color {
    self.pick(rgb(145, 202, 255), rgb(0, 58, 140))
  }

  pub const fn value(&self) -> Color {
    self.pick(rgb(255, 214, 102), rgb(173, 104, 0))
  }

  pub const fn clap_styles() -> Styles {
    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(to_clap(colors.label())))
      .usage(Style::new().bold().fg_color(to_clap(colors.label())))
      .literal(Style::new().fg_color(to_clap(colors.primary())))
      .placeholder(Style::new().fg_color(to_clap(colors.info())))
      .error(Style::new().bold().fg_color(to_clap(colors.accent())))
      .valid(Style::new().fg_color(to_clap(colors.success())))
      .invalid(Style::new().bold().fg_color(to_clap(colors.accent())))
  }
}

const fn to_clap(color: Color) -> Option<ClapColor> {
  match color {
    Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
    Color::AnsiValue(value) => Some(ClapColor::Ansi256(Ansi256Color(value))),
    Color::Black => Some(ClapColor::Ansi(AnsiColor::Black)),
    Color::White | Color::Grey => Some(ClapColor::Ansi(AnsiColor::White)),
    Color::Reset => None,
    _ => Some(ClapColor::Ansi(AnsiColor::BrightBlack)),
  }
}

/// Converts a crossterm color for use in `comfy_table` cells.
pub fn to_comfy(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
    Color::Black => ComfyColor::Black,
    Color::White => ComfyColor::White,
    Color::Grey => ComfyColor::Grey,
    Color::DarkGrey => ComfyColor::DarkGrey,
    _ => ComfyColor::Reset,
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => theme_from_env(std::env::var("COLORFGBG").ok().as_deref()),
  }
}

/// `COLORFGBG` is `fg;bg`; background codes 8 and up are light.
fn theme_from_env(colorfgbg: Option<&str>) -> Theme {
  if let Some(value) = colorfgbg
    && let Some(bg) = value.split(';').next_back()
    && let Ok(bg) = bg.parse::<u8>()
    && bg >= 8
  {
    return Theme::Light;
  }
  Theme::Dark
}
