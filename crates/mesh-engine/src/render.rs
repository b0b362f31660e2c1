//! Render entry point.
//!
//! One pass: clear the surface, then hand the config to the renderer selected by
//! `config.pattern`. Passes are synchronous and independent; nothing carries over
//! between them except the sampler's RNG state.

use crate::config::RenderConfig;
use crate::raster::Canvas;
use crate::sampling::{ColorSampler, RandomSampler};
use crate::surface::Surface;

/// Owns the color sampler used by the mesh patterns.
#[derive(Debug, Clone, Default)]
pub struct Renderer<S = RandomSampler> {
    sampler: S,
}

impl Renderer {
    /// Renderer with uniform random color sampling.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: ColorSampler> Renderer<S> {
    pub fn with_sampler(sampler: S) -> Self {
        Self { sampler }
    }

    /// Runs one render pass. A missing surface makes this a no-op.
    pub fn render(&mut self, config: &RenderConfig, surface: Option<&mut dyn Surface>) {
        let Some(surface) = surface else {
            log::debug!("render skipped: no surface");
            return;
        };

        log::debug!(
            "render {} {}x{} vertices={} colors={}",
            config.pattern,
            config.width,
            config.height,
            config.vertex_count,
            config.palette.len()
        );

        surface.clear();
        config
            .pattern
            .renderer()
            .render(config, &mut self.sampler, surface);
    }

    /// Renders into a fresh canvas sized from the config.
    pub fn render_canvas(&mut self, config: &RenderConfig) -> Canvas {
        let mut canvas = Canvas::new(config.width, config.height);
        self.render(config, Some(&mut canvas));
        canvas
    }
}

/// One-shot render with random sampling.
pub fn render(config: &RenderConfig, surface: &mut dyn Surface) {
    Renderer::new().render(config, Some(surface));
}
