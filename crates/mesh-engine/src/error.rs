use std::fmt;

/// A rejected configuration or palette edit.
///
/// Rendering itself never fails; these errors come from validating input before
/// it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Vertex count outside [`VERTEX_COUNT_RANGE`](crate::config::VERTEX_COUNT_RANGE).
    VertexCount(u32),
    /// Palette shorter than [`MIN_COLORS`](crate::palette::MIN_COLORS).
    PaletteTooShort(usize),
    /// Width or height is zero.
    EmptyCanvas { width: u32, height: u32 },
    /// Palette edit addressed a slot that does not exist.
    ColorIndex { index: usize, len: usize },
    /// Pattern name not recognised.
    UnknownPattern(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::VertexCount(n) => {
                let r = crate::config::VERTEX_COUNT_RANGE;
                write!(f, "vertex count {n} is outside {}..={}", r.start(), r.end())
            }
            ConfigError::PaletteTooShort(len) => write!(
                f,
                "palette needs at least {} colors, got {len}",
                crate::palette::MIN_COLORS
            ),
            ConfigError::EmptyCanvas { width, height } => {
                write!(f, "canvas {width}x{height} has no pixels")
            }
            ConfigError::ColorIndex { index, len } => {
                write!(f, "color index {index} out of range for palette of {len}")
            }
            ConfigError::UnknownPattern(name) => write!(
                f,
                "unknown pattern {name:?} (expected smooth, triangle, square or hexagon)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
