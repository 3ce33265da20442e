//! Example: log-spiral twist of a checkerboard.
//!
//! Builds a square checkerboard, warps it with `LogSpiral` around the image
//! center, normalizes to 0/255 and writes an 8-bit grayscale PNG.
//! Generation and warp timing are logged at info level.
//!
//! Run from the workspace root:
//!   RUST_LOG=info cargo run -p vision-warp --example spiral -- --help
//!   RUST_LOG=info cargo run -p vision-warp --example spiral -- --twist-rate 1.5

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use image::GrayImage;
use vision_warp::{BoundaryPolicy, LogSpiral, Shape, checkerboard, imwarp, normalize};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Twist a checkerboard with a logarithmic spiral")]
struct Args {
    /// Side length of the square output image in pixels
    #[arg(long, default_value_t = 1024)]
    size: usize,

    /// Number of checkerboard cells along each side
    #[arg(long, default_value_t = 16)]
    cells: usize,

    /// Twist per unit of ln(1 + r), in radians
    #[arg(long, default_value_t = 0.5)]
    twist_rate: f64,

    /// Constant rotation added to every pixel, in radians
    #[arg(long, default_value_t = 0.0)]
    twist_offset: f64,

    /// How source coordinates outside the image are resolved
    #[arg(long, value_enum, default_value_t = Policy::Clip)]
    policy: Policy,

    /// Output PNG path
    #[arg(long, default_value = "spiral.png")]
    out: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Clip,
    Cycle,
}

impl From<Policy> for BoundaryPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Clip => BoundaryPolicy::Clip,
            Policy::Cycle => BoundaryPolicy::Cycle,
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let shape = Shape::square(args.size).context("output size")?;
    if args.cells == 0 || args.cells > args.size {
        bail!("cells must be in 1..={}, got {}.", args.size, args.cells);
    }
    let cell = args.size / args.cells;

    let t0 = Instant::now();
    let src = checkerboard(shape, cell, false).context("building checkerboard")?;
    log::info!(
        "checkerboard {0}x{0} cell={cell} in {1:.2} ms",
        args.size,
        t0.elapsed().as_secs_f64() * 1e3
    );

    let spiral = LogSpiral::centered(shape, args.twist_rate, args.twist_offset);
    let t1 = Instant::now();
    let warped =
        imwarp(&src.as_view(), &spiral, args.policy.into()).context("warping checkerboard")?;
    log::info!("imwarp in {:.2} ms", t1.elapsed().as_secs_f64() * 1e3);

    let out = normalize(&warped.as_view());
    let gray = GrayImage::from_raw(out.width() as u32, out.height() as u32, out.into_raw())
        .context("constructing GrayImage from raw bytes")?;
    gray.save(&args.out)
        .with_context(|| format!("saving {}", args.out))?;

    println!("wrote {}", args.out);
    Ok(())
}
