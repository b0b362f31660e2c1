use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use mesh_engine::config::{DEFAULT_HEIGHT, DEFAULT_VERTEX_COUNT, DEFAULT_WIDTH};
use mesh_engine::export::{ARCHIVE_NAME, save_archive};
use mesh_engine::logging::{LoggingConfig, init_logging};
use mesh_engine::sampling::RandomSampler;
use mesh_engine::{Palette, Pattern, RenderConfig, Renderer};

/// Render a mesh gradient and export it as a zip bundle
/// (`mesh-gradient.png` + `instructions.txt`).
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// smooth, triangle, square or hexagon.
    #[arg(long, short, default_value_t = Pattern::Smooth)]
    pattern: Pattern,

    /// Lattice size for the mesh patterns.
    #[arg(
        long = "vertices",
        short = 'n',
        default_value_t = DEFAULT_VERTEX_COUNT,
        value_parser = clap::value_parser!(u32).range(3..=20)
    )]
    vertex_count: u32,

    /// Palette entry as #rrggbb; repeat for each color, in order.
    /// Defaults to the built-in four-color palette.
    #[arg(long = "color", short = 'c', value_name = "HEX")]
    colors: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Seed for mesh color sampling; omit for a different result every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Output archive.
    #[arg(long, short, default_value = ARCHIVE_NAME)]
    out: PathBuf,

    /// Log filter in env_logger syntax; overrides RUST_LOG and -v.
    #[arg(long)]
    log: Option<String>,

    /// More output (-v debug, -vv trace).
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        let palette = if self.colors.is_empty() {
            Palette::default()
        } else {
            Palette::from_hex(&self.colors)
        };

        RenderConfig::default()
            .with_pattern(self.pattern)
            .with_vertex_count(self.vertex_count)
            .with_palette(palette)
            .with_size(self.width, self.height)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default().with_verbosity(args.verbose);
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    let config = args.render_config();
    config.validate().context("invalid render configuration")?;

    if args.seed.is_some() && !config.pattern.is_sampled() {
        log::warn!("--seed has no effect on the {} pattern", config.pattern);
    }

    let sampler = match args.seed {
        Some(seed) => RandomSampler::seeded(seed),
        None => RandomSampler::new(),
    };
    let canvas = Renderer::with_sampler(sampler).render_canvas(&config);

    save_archive(&args.out, &config, &canvas)?;
    log::info!("wrote {}", args.out.display());
    Ok(())
}
