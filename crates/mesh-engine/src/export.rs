//! Export bundle: the rendered PNG plus CSS/Tailwind approximation notes, zipped.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use anyhow::{Context, Result};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::config::RenderConfig;
use crate::palette::Palette;
use crate::pattern::Pattern;
use crate::raster::Canvas;

pub const ARCHIVE_NAME: &str = "mesh-gradient.zip";
pub const IMAGE_NAME: &str = "mesh-gradient.png";
pub const INSTRUCTIONS_NAME: &str = "instructions.txt";

/// Plain-text notes describing a CSS (and, for mesh patterns, Tailwind)
/// approximation of the gradient.
pub fn instructions(pattern: Pattern, palette: &Palette) -> String {
    let colors = palette.joined_hex();
    match pattern {
        Pattern::Smooth => format!(
            "CSS Instructions:\n\
             background: radial-gradient(at 0% 0%, {colors});\n\
             \n\
             Note: This is a simplified representation. The actual mesh gradient is more \
             complex and may not be perfectly replicated with CSS."
        ),
        Pattern::Triangle | Pattern::Square | Pattern::Hexagon => format!(
            "CSS Instructions:\n\
             background: linear-gradient({colors});\n\
             \n\
             Tailwind Instructions:\n\
             bg-gradient-to-r from-[{first}] to-[{last}]\n\
             \n\
             Note: This is a simplified representation. The actual mesh gradient is more \
             complex and may not be perfectly replicated with CSS or Tailwind.",
            first = palette.first().to_hex(),
            last = palette.last().to_hex(),
        ),
    }
}

/// Writes the zip bundle (`mesh-gradient.png` + `instructions.txt`) into `writer`
/// and hands it back once the archive is finalized.
pub fn write_archive<W: Write + Seek>(
    writer: W,
    config: &RenderConfig,
    canvas: &Canvas,
) -> Result<W> {
    let png = canvas.encode_png()?;
    let notes = instructions(config.pattern, &config.palette);

    let mut zip = ZipWriter::new(writer);

    // PNG data is already deflated.
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    zip.start_file(IMAGE_NAME, stored)
        .with_context(|| format!("failed to start {IMAGE_NAME}"))?;
    zip.write_all(&png)
        .with_context(|| format!("failed to write {IMAGE_NAME}"))?;

    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(INSTRUCTIONS_NAME, deflated)
        .with_context(|| format!("failed to start {INSTRUCTIONS_NAME}"))?;
    zip.write_all(notes.as_bytes())
        .with_context(|| format!("failed to write {INSTRUCTIONS_NAME}"))?;

    let writer = zip.finish().context("failed to finalize zip archive")?;
    log::info!(
        "exported {} ({} byte PNG, {} colors)",
        config.pattern,
        png.len(),
        config.palette.len()
    );
    Ok(writer)
}

/// Writes the zip bundle to `path`, replacing any existing file.
pub fn save_archive(path: &Path, config: &RenderConfig, canvas: &Canvas) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = write_archive(BufWriter::new(file), config, canvas)?;
    out.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
