//! Ordered color palette.
//!
//! Index order is semantic: the smooth pattern reads the palette as a row-major
//! square grid, and the export text lists colors in this order.

use crate::error::ConfigError;
use crate::paint::Color;

/// Minimum number of colors an editable palette keeps.
pub const MIN_COLORS: usize = 2;

/// Colors a fresh palette starts with.
pub const DEFAULT_HEX: [&str; 4] = ["#4338ca", "#6366f1", "#ec4899", "#8b5cf6"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_hex(DEFAULT_HEX)
    }
}

impl Palette {
    #[inline]
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Builds a palette from `#rrggbb` strings. Malformed entries become black.
    pub fn from_hex<I, S>(hex: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = hex
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                Color::parse_hex(s).unwrap_or_else(|| {
                    log::warn!("malformed palette color {s:?}, using black");
                    Color::BLACK
                })
            })
            .collect();
        Self { colors }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color at `index`, or black when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or(Color::BLACK)
    }

    #[inline]
    pub fn first(&self) -> Color {
        self.get(0)
    }

    #[inline]
    pub fn last(&self) -> Color {
        self.colors.last().copied().unwrap_or(Color::BLACK)
    }

    /// Appends a color at the end.
    #[inline]
    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Appends black, the color a newly added slot starts with.
    #[inline]
    pub fn push_default(&mut self) {
        self.push(Color::BLACK);
    }

    /// Replaces the color at `index`.
    pub fn set(&mut self, index: usize, color: Color) -> Result<(), ConfigError> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(ConfigError::ColorIndex { index, len })?;
        *slot = color;
        Ok(())
    }

    /// Removes the color at `index`. Refuses to shrink below [`MIN_COLORS`].
    pub fn remove(&mut self, index: usize) -> Result<Color, ConfigError> {
        let len = self.colors.len();
        if index >= len {
            return Err(ConfigError::ColorIndex { index, len });
        }
        if len <= MIN_COLORS {
            return Err(ConfigError::PaletteTooShort(len - 1));
        }
        Ok(self.colors.remove(index))
    }

    /// Colors as `#rrggbb` joined by `", "`.
    pub fn joined_hex(&self) -> String {
        self.colors
            .iter()
            .map(|c| c.to_hex())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_four_colors() {
        let p = Palette::default();
        assert_eq!(p.len(), 4);
        assert_eq!(p.first(), Color::rgb(67, 56, 202));
    }

    #[test]
    fn from_hex_degrades_malformed_entries() {
        let p = Palette::from_hex(["#ffffff", "nope", ""]);
        assert_eq!(p.colors(), &[Color::WHITE, Color::BLACK, Color::BLACK]);
    }

    #[test]
    fn get_out_of_range_is_black() {
        let p = Palette::from_hex(["#ffffff", "#ffffff"]);
        assert_eq!(p.get(2), Color::BLACK);
        assert_eq!(Palette::new(vec![]).last(), Color::BLACK);
    }

    #[test]
    fn remove_keeps_minimum() {
        let mut p = Palette::from_hex(["#000000", "#ffffff", "#ff0000"]);
        assert_eq!(p.remove(1), Ok(Color::WHITE));
        assert_eq!(p.remove(0), Err(ConfigError::PaletteTooShort(1)));
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn remove_out_of_range() {
        let mut p = Palette::default();
        assert_eq!(p.remove(9), Err(ConfigError::ColorIndex { index: 9, len: 4 }));
    }

    #[test]
    fn push_default_appends_black() {
        let mut p = Palette::default();
        p.push_default();
        assert_eq!(p.len(), 5);
        assert_eq!(p.last(), Color::BLACK);
    }

    #[test]
    fn set_replaces_slot() {
        let mut p = Palette::default();
        p.set(2, Color::WHITE).unwrap();
        assert_eq!(p.get(2), Color::WHITE);
        assert!(p.set(4, Color::WHITE).is_err());
    }

    #[test]
    fn joined_hex_keeps_order() {
        let p = Palette::from_hex(["#000000", "#FFFFFF"]);
        assert_eq!(p.joined_hex(), "#000000, #ffffff");
    }
}
