use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use image::GrayImage;
use serde::{Deserialize, Serialize};
use vw_core::{BoundaryPolicy, Image, Shape, normalize, normalize_field};
use vw_grid::{DistanceMetric, hyperbolic_grid, polar_grid};
use vw_pattern::{checkerboard, nested_rings};
use vw_warp::{LogSpiral, RadialFold, RippleFold, WarpFn, imwarp};

const DEFAULT_OUT: &str = "docs/fig/raw";
const DEFAULT_SIZE: usize = 2048;
const DEFAULT_GRID_SIZE: usize = 512;
const DEFAULT_CELLS: usize = 16;
const DEFAULT_RINGS: usize = 8;

#[derive(Parser, Debug)]
#[command(name = "vw_gallery")]
#[command(about = "Render vision-warp patterns, coordinate grids and warp presets")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(name = "pattern")]
    Pattern {
        #[command(flatten)]
        out: OutArgs,
        #[command(flatten)]
        job: PatternJob,
    },
    #[command(name = "warp")]
    Warp {
        #[command(flatten)]
        out: OutArgs,
        #[command(flatten)]
        job: WarpJob,
    },
    #[command(name = "grid")]
    Grid {
        #[command(flatten)]
        out: OutArgs,
        #[command(flatten)]
        job: GridJob,
    },
    /// Run every job listed in a JSON file
    #[command(name = "run")]
    Run {
        #[arg(long, required = true)]
        config: PathBuf,
        /// Overrides the output directory named in the file
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
struct OutArgs {
    #[arg(long, default_value = DEFAULT_OUT)]
    out: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PatternKind {
    Checkerboard,
    Rings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Preset {
    Spiral,
    Fold,
    Ripple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PolicyArg {
    Clip,
    Cycle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
enum GridSystem {
    Polar,
    Hyperbolic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
enum MetricArg {
    L1,
    L2,
    Linf,
}

#[derive(Args, Debug, Clone, Deserialize)]
#[serde(default)]
struct PatternJob {
    #[arg(long, value_enum, default_value_t = PatternKind::Checkerboard)]
    kind: PatternKind,
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Checkerboard cells per side; the square size is `size / cells`
    #[arg(long, default_value_t = DEFAULT_CELLS)]
    cells: usize,
    #[arg(long, default_value_t = DEFAULT_RINGS)]
    rings: usize,
    #[arg(long)]
    invert: bool,
}

impl Default for PatternJob {
    fn default() -> Self {
        Self {
            kind: PatternKind::Checkerboard,
            size: DEFAULT_SIZE,
            cells: DEFAULT_CELLS,
            rings: DEFAULT_RINGS,
            invert: false,
        }
    }
}

#[derive(Args, Debug, Clone, Deserialize)]
#[serde(default)]
struct WarpJob {
    #[arg(long, value_enum, default_value_t = Preset::Fold)]
    preset: Preset,
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    #[arg(long, default_value_t = DEFAULT_CELLS)]
    cells: usize,
    /// Defaults to `cycle` for the folds and `clip` for the spiral
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    #[arg(long, default_value_t = 2)]
    factor: u32,
    #[arg(long, default_value_t = 0.4)]
    amplitude: f64,
    #[arg(long, default_value_t = 0.006)]
    frequency: f64,
    #[arg(long, default_value_t = 6)]
    numerator: u32,
    #[arg(long, default_value_t = 4)]
    denominator: u32,
    #[arg(long, default_value_t = 0.5)]
    twist_rate: f64,
    #[arg(long, default_value_t = 0.0)]
    twist_offset: f64,
}

impl Default for WarpJob {
    fn default() -> Self {
        Self {
            preset: Preset::Fold,
            size: DEFAULT_SIZE,
            cells: DEFAULT_CELLS,
            policy: None,
            factor: 2,
            amplitude: 0.4,
            frequency: 0.006,
            numerator: 6,
            denominator: 4,
            twist_rate: 0.5,
            twist_offset: 0.0,
        }
    }
}

#[derive(Args, Debug, Clone, Deserialize)]
#[serde(default)]
struct GridJob {
    #[arg(long, value_enum, default_value_t = GridSystem::Polar)]
    system: GridSystem,
    #[arg(long, value_enum, default_value_t = MetricArg::L2)]
    metric: MetricArg,
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,
}

impl Default for GridJob {
    fn default() -> Self {
        Self {
            system: GridSystem::Polar,
            metric: MetricArg::L2,
            size: DEFAULT_GRID_SIZE,
        }
    }
}

#[derive(Debug, Deserialize)]
struct JobFile {
    #[serde(default)]
    out: Option<PathBuf>,
    jobs: Vec<NamedJob>,
}

#[derive(Debug, Deserialize)]
struct NamedJob {
    #[serde(default)]
    name: Option<String>,
    #[serde(flatten)]
    job: Job,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "job", rename_all = "lowercase")]
enum Job {
    Pattern(PatternJob),
    Warp(WarpJob),
    Grid(GridJob),
}

#[derive(Debug, Clone, Serialize)]
struct MetaPattern {
    kind: &'static str,
    size: usize,
    square: usize,
    rings: Option<usize>,
    invert: bool,
    pixel_rule: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
enum WarpParamsDto {
    LogSpiral {
        center: [f64; 2],
        twist_rate: f64,
        twist_offset: f64,
    },
    RadialFold {
        center: [f64; 2],
        factor: u32,
    },
    RippleFold {
        center: [f64; 2],
        amplitude: f64,
        frequency: f64,
        multiplier: [u32; 2],
    },
}

#[derive(Debug, Clone, Serialize)]
struct MetaWarp {
    preset: &'static str,
    size: usize,
    square: usize,
    policy: &'static str,
    sampling: &'static str,
    params: WarpParamsDto,
}

#[derive(Debug, Clone, Serialize)]
struct MetaGrid {
    system: &'static str,
    metric: Option<&'static str>,
    size: usize,
    components: [&'static str; 2],
    non_finite: [usize; 2],
    angle_convention: Option<&'static str>,
}

/// Rendered images plus the metadata describing how they were made.
struct Case {
    name: String,
    images: Vec<(String, Image<u8>)>,
    meta: serde_json::Value,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Pattern { out, job } => write_case(&out.out, &render_pattern(&job, None)?),
        Command::Warp { out, job } => write_case(&out.out, &render_warp(&job, None)?),
        Command::Grid { out, job } => write_case(&out.out, &render_grid(&job, None)?),
        Command::Run { config, out } => run_jobs(&config, out),
    }
}

fn run_jobs(config: &Path, out_override: Option<PathBuf>) -> Result<()> {
    let file: JobFile = read_json(config)
        .with_context(|| format!("reading job file at {}", config.display()))?;
    if file.jobs.is_empty() {
        bail!("job file {} lists no jobs.", config.display());
    }

    let out = out_override
        .or(file.out)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));

    for (i, named) in file.jobs.iter().enumerate() {
        let name = named.name.clone();
        let case = match &named.job {
            Job::Pattern(job) => render_pattern(job, name),
            Job::Warp(job) => render_warp(job, name),
            Job::Grid(job) => render_grid(job, name),
        }
        .with_context(|| format!("rendering job #{i} from {}", config.display()))?;
        write_case(&out, &case)?;
    }

    log::info!("ran {} jobs from {}", file.jobs.len(), config.display());
    Ok(())
}

fn render_pattern(job: &PatternJob, name: Option<String>) -> Result<Case> {
    let shape = Shape::square(job.size).context("pattern size")?;

    let (kind, img, square, rings) = match job.kind {
        PatternKind::Checkerboard => {
            let square = square_size(job.size, job.cells)?;
            let img = checkerboard(shape, square, job.invert).context("building checkerboard")?;
            ("checkerboard", img, square, None)
        }
        PatternKind::Rings => {
            let img = nested_rings(shape, job.rings).context("building nested rings")?;
            ("rings", img, 0, Some(job.rings))
        }
    };

    let meta = MetaPattern {
        kind,
        size: job.size,
        square,
        rings,
        invert: job.invert,
        pixel_rule: "binary mask stretched to 0/255",
    };

    Ok(Case {
        name: name.unwrap_or_else(|| kind.to_string()),
        images: vec![("pattern.png".to_string(), normalize(&img.as_view()))],
        meta: serde_json::to_value(meta).context("serializing pattern meta")?,
    })
}

fn render_warp(job: &WarpJob, name: Option<String>) -> Result<Case> {
    let shape = Shape::square(job.size).context("warp size")?;
    let square = square_size(job.size, job.cells)?;
    let src = checkerboard(shape, square, false).context("building checkerboard")?;
    let center = shape.center();

    let (preset, default_policy, warp, params) = match job.preset {
        Preset::Spiral => (
            "spiral",
            PolicyArg::Clip,
            Box::new(LogSpiral::new(center, job.twist_rate, job.twist_offset)) as Box<dyn WarpFn>,
            WarpParamsDto::LogSpiral {
                center: [center.row, center.col],
                twist_rate: job.twist_rate,
                twist_offset: job.twist_offset,
            },
        ),
        Preset::Fold => (
            "fold",
            PolicyArg::Cycle,
            Box::new(RadialFold::new(center, job.factor)) as Box<dyn WarpFn>,
            WarpParamsDto::RadialFold {
                center: [center.row, center.col],
                factor: job.factor,
            },
        ),
        Preset::Ripple => {
            let ripple = RippleFold::new(
                center,
                job.amplitude,
                job.frequency,
                job.numerator,
                job.denominator,
            )
            .context("ripple parameters")?;
            (
                "ripple",
                PolicyArg::Cycle,
                Box::new(ripple) as Box<dyn WarpFn>,
                WarpParamsDto::RippleFold {
                    center: [center.row, center.col],
                    amplitude: ripple.amplitude(),
                    frequency: ripple.frequency(),
                    multiplier: [ripple.multiplier().0, ripple.multiplier().1],
                },
            )
        }
    };

    let policy = boundary_policy(job.policy.unwrap_or(default_policy));
    let warped = imwarp(&src.as_view(), &*warp, policy)
        .with_context(|| format!("warping checkerboard with preset '{preset}'"))?;

    let meta = MetaWarp {
        preset,
        size: job.size,
        square,
        policy: policy.name(),
        sampling: "nearest, floor per axis",
        params,
    };

    Ok(Case {
        name: name.unwrap_or_else(|| preset.to_string()),
        images: vec![
            ("source.png".to_string(), normalize(&src.as_view())),
            ("warped.png".to_string(), normalize(&warped.as_view())),
        ],
        meta: serde_json::to_value(meta).context("serializing warp meta")?,
    })
}

fn render_grid(job: &GridJob, name: Option<String>) -> Result<Case> {
    let shape = Shape::square(job.size).context("grid size")?;

    let (a, b, meta) = match job.system {
        GridSystem::Polar => {
            let metric = distance_metric(job.metric);
            let grid = polar_grid(shape, None, metric).context("building polar grid")?;
            let meta = MetaGrid {
                system: "polar",
                metric: Some(metric.name()),
                size: job.size,
                components: ["radius", "angle"],
                non_finite: [count_non_finite(&grid.radius), count_non_finite(&grid.angle)],
                angle_convention: Some("atan2(row - center.row, col - center.col)"),
            };
            (grid.radius, grid.angle, meta)
        }
        GridSystem::Hyperbolic => {
            let grid = hyperbolic_grid(shape).context("building hyperbolic grid")?;
            let meta = MetaGrid {
                system: "hyperbolic",
                metric: None,
                size: job.size,
                components: ["u", "v"],
                non_finite: [count_non_finite(&grid.u), count_non_finite(&grid.v)],
                angle_convention: None,
            };
            (grid.u, grid.v, meta)
        }
    };

    if meta.non_finite.iter().any(|&n| n > 0) {
        log::warn!(
            "{} grid has non-finite samples {:?}; exported as 0",
            meta.system,
            meta.non_finite
        );
    }

    let default_name = match meta.metric {
        Some(metric) => format!("{}_{metric}", meta.system),
        None => meta.system.to_string(),
    };
    let images = vec![
        (format!("{}.png", meta.components[0]), normalize_field(&a.as_view())),
        (format!("{}.png", meta.components[1]), normalize_field(&b.as_view())),
    ];

    Ok(Case {
        name: name.unwrap_or(default_name),
        images,
        meta: serde_json::to_value(meta).context("serializing grid meta")?,
    })
}

fn write_case(out: &Path, case: &Case) -> Result<()> {
    let case_dir = out.join(&case.name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;

    for (file, img) in &case.images {
        save_u8_image(case_dir.join(file), img)?;
    }
    write_json(case_dir.join("meta.json"), &case.meta)?;

    log::info!("wrote case '{}' to {}", case.name, case_dir.display());
    Ok(())
}

fn square_size(size: usize, cells: usize) -> Result<usize> {
    if cells == 0 || cells > size {
        bail!("cells must be in 1..={size}, got {cells}.");
    }
    Ok(size / cells)
}

fn boundary_policy(arg: PolicyArg) -> BoundaryPolicy {
    match arg {
        PolicyArg::Clip => BoundaryPolicy::Clip,
        PolicyArg::Cycle => BoundaryPolicy::Cycle,
    }
}

fn distance_metric(arg: MetricArg) -> DistanceMetric {
    match arg {
        MetricArg::L1 => DistanceMetric::L1,
        MetricArg::L2 => DistanceMetric::L2,
        MetricArg::Linf => DistanceMetric::LInf,
    }
}

fn count_non_finite(img: &Image<f64>) -> usize {
    img.data().iter().filter(|v| !v.is_finite()).count()
}

fn save_u8_image(path: PathBuf, img: &Image<u8>) -> Result<()> {
    let gray = GrayImage::from_raw(img.width() as u32, img.height() as u32, img.data().to_vec())
        .context("constructing GrayImage from raw bytes")?;
    gray.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}
