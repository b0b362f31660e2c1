//! Mesh gradient engine crate.
//!
//! Turns a [`RenderConfig`] (palette, vertex count, pattern) into pixels or draw
//! calls on a [`Surface`], and packages the result for export.
//!
//! ```rust
//! use mesh_engine::{Pattern, RenderConfig, Renderer};
//!
//! let config = RenderConfig::default()
//!     .with_pattern(Pattern::Smooth)
//!     .with_size(64, 48);
//! let canvas = Renderer::new().render_canvas(&config);
//! assert_eq!(canvas.pixels().get(0, 0).map(|p| p.a), Some(255));
//! ```

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod scene;

pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod palette;
pub mod pattern;
pub mod render;
pub mod sampling;
pub mod surface;

pub use config::RenderConfig;
pub use error::ConfigError;
pub use paint::Color;
pub use palette::Palette;
pub use pattern::{Pattern, PatternRenderer};
pub use raster::Canvas;
pub use render::{Renderer, render};
pub use surface::Surface;
