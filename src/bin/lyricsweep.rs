use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use lyricsweep::{
    Ease, Fps, PngSequenceSink, Rgba8, SweepSession, SweepSessionOpts, SweepStyle, SweepWidget,
    TextLayoutEngine,
};

#[derive(Parser, Debug)]
#[command(name = "lyricsweep", version)]
struct Cli {
    /// Log verbosity when `RUST_LOG` is unset (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the block at one progress value as a PNG.
    Frame(FrameArgs),
    /// Render a full 0-to-1 sweep as a numbered PNG sequence.
    Sweep(SweepArgs),
    /// Print line metrics and the clip region at a progress value as JSON.
    Metrics(MetricsArgs),
}

#[derive(Args, Debug)]
struct TextArgs {
    /// Text to render.
    #[arg(long, conflicts_with = "text_file", required_unless_present = "text_file")]
    text: Option<String>,

    /// Read the text from a UTF-8 file.
    #[arg(long)]
    text_file: Option<PathBuf>,

    /// Font file (TTF/OTF).
    #[arg(long)]
    font: PathBuf,

    /// Wrap width in pixels. Unwrapped when omitted.
    #[arg(long)]
    width: Option<f32>,

    /// Style JSON (colors, font size, line spacing).
    #[arg(long)]
    style: Option<PathBuf>,

    /// Override the before color (`#RRGGBB` or `#AARRGGBB`).
    #[arg(long)]
    before: Option<Rgba8>,

    /// Override the after color (`#RRGGBB` or `#AARRGGBB`).
    #[arg(long)]
    after: Option<Rgba8>,

    /// Override the font size in pixels.
    #[arg(long)]
    font_size: Option<f32>,
}

#[derive(Args, Debug)]
struct CanvasArgs {
    /// Margin around the text block in pixels.
    #[arg(long, default_value_t = 8.0)]
    padding: f32,

    /// Background color.
    #[arg(long, default_value = "#00000000")]
    background: Rgba8,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    text: TextArgs,

    #[command(flatten)]
    canvas: CanvasArgs,

    /// Sweep progress in `[0, 1]`.
    #[arg(long, default_value_t = 0.5)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    text: TextArgs,

    #[command(flatten)]
    canvas: CanvasArgs,

    /// Sweep duration in milliseconds.
    #[arg(long, default_value_t = 2000)]
    duration_ms: u64,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Easing curve.
    #[arg(long, value_enum, default_value_t = Ease::Linear)]
    ease: Ease,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct MetricsArgs {
    #[command(flatten)]
    text: TextArgs,

    /// Sweep progress in `[0, 1]`.
    #[arg(long, default_value_t = 0.5)]
    progress: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Metrics(args) => cmd_metrics(args),
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "lyricsweep=debug",
        _ => "lyricsweep=trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_text(args: &TextArgs) -> anyhow::Result<String> {
    match (&args.text, &args.text_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("read text file '{}'", path.display())),
        (None, None) => anyhow::bail!("one of --text or --text-file is required"),
    }
}

fn build_style(args: &TextArgs) -> anyhow::Result<SweepStyle> {
    let mut style = match &args.style {
        Some(path) => SweepStyle::from_json_file(path)?,
        None => SweepStyle::default(),
    };
    if let Some(c) = args.before {
        style.before_color = c;
    }
    if let Some(c) = args.after {
        style.after_color = c;
    }
    if let Some(size) = args.font_size {
        style.font_size = size;
    }
    Ok(style)
}

fn build_widget(args: &TextArgs) -> anyhow::Result<SweepWidget<TextLayoutEngine>> {
    let text = read_text(args)?;
    let style = build_style(args)?;
    let engine = TextLayoutEngine::from_font_file(&args.font)
        .with_context(|| format!("load font '{}'", args.font.display()))?;
    tracing::debug!(family = engine.family_name(), "font loaded");
    Ok(SweepWidget::new(engine, text, args.width).with_style(style)?)
}

fn build_session(text: &TextArgs, canvas: &CanvasArgs) -> anyhow::Result<SweepSession> {
    let widget = build_widget(text)?;
    let opts = SweepSessionOpts {
        padding: canvas.padding,
        background: canvas.background,
    };
    Ok(SweepSession::new(widget, opts)?)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut session = build_session(&args.text, &args.canvas)?;
    let frame = session.render_frame(args.progress)?;

    ensure_parent(&args.out)?;
    lyricsweep::encode::sink::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let mut session = build_session(&args.text, &args.canvas)?;
    let fps = Fps::new(args.fps, 1)?;
    let duration = Duration::from_millis(args.duration_ms);

    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = session.render_sweep(duration, fps, args.ease, &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_total,
        args.out_dir.display()
    );
    Ok(())
}

#[derive(serde::Serialize)]
struct MetricsReport {
    progress: f64,
    metrics: lyricsweep::LineMetrics,
    region: lyricsweep::ClipRegion,
}

fn cmd_metrics(args: MetricsArgs) -> anyhow::Result<()> {
    let mut widget = build_widget(&args.text)?;
    lyricsweep::ProgressView::on_progress_changed(&mut widget, args.progress);
    let report = MetricsReport {
        progress: widget.progress(),
        metrics: widget.metrics()?,
        region: widget.clip_region()?,
    };
    let json = serde_json::to_string_pretty(&report).context("serialize metrics report")?;
    println!("{json}");
    Ok(())
}
