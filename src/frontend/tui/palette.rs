//! Resolved ratatui colors for the game screens

use crate::config::ColorConfig;
use ratatui::style::Color;

/// Convert hex string to ratatui Color
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

/// Color entries that are not `#rrggbb`, as `(field, value)`
pub fn invalid_colors(colors: &ColorConfig) -> Vec<(&'static str, &str)> {
    colors
        .entries()
        .into_iter()
        .filter(|(_, value)| hex_to_color(value).is_none())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub win: Color,
    pub lose: Color,
}

impl Palette {
    /// Build from config, falling back to the default for any unparsable entry
    pub fn from_config(colors: &ColorConfig) -> Self {
        let defaults = ColorConfig::default();
        let resolve = |name: &str, value: &str, fallback: &str| {
            hex_to_color(value).unwrap_or_else(|| {
                tracing::warn!("Invalid color '{}' for colors.{}, using {}", value, name, fallback);
                hex_to_color(fallback).unwrap_or(Color::Reset)
            })
        };

        Self {
            background: resolve("background", &colors.background, &defaults.background),
            text: resolve("text", &colors.text, &defaults.text),
            highlight: resolve("highlight", &colors.highlight, &defaults.highlight),
            win: resolve("win", &colors.win, &defaults.win),
            lose: resolve("lose", &colors.lose, &defaults.lose),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&ColorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#8442f5"), Some(Color::Rgb(0x84, 0x42, 0xf5)));
        assert_eq!(hex_to_color("5beb34"), Some(Color::Rgb(0x5b, 0xeb, 0x34)));
        assert_eq!(hex_to_color("#fff"), None);
        assert_eq!(hex_to_color("#zzzzzz"), None);
    }

    #[test]
    fn test_invalid_colors_checks_every_entry() {
        assert!(invalid_colors(&ColorConfig::default()).is_empty());

        let mut colors = ColorConfig::default();
        colors.text = "white".to_string();
        colors.lose = "#c7181".to_string();
        assert_eq!(
            invalid_colors(&colors),
            vec![("text", "white"), ("lose", "#c7181")]
        );
    }

    #[test]
    fn test_invalid_entry_falls_back() {
        let mut colors = ColorConfig::default();
        colors.win = "green".to_string();
        let palette = Palette::from_config(&colors);
        assert_eq!(palette.win, Color::Rgb(0x5b, 0xeb, 0x34));
        assert_eq!(palette.background, Color::Rgb(0x84, 0x42, 0xf5));
    }
}
