use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use spritely::{
    MAX_ATLAS_FRAMES, OptimizeOutcome, ReduceStrategy, atlas_info_for, build_atlas, compare,
    decode_gif, optimize_palette_with_timeout, reduce_frames, reduction_suggestions, remove_every,
    save_png, save_preview_jpeg, validate_fps, validate_frame_count,
};

#[derive(Parser, Debug)]
#[command(name = "spritely", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an animated GIF into a sprite sheet PNG.
    Convert(ConvertArgs),
    /// Inspect a GIF and print sequence, layout, and reduction info as JSON.
    Info(InfoArgs),
    /// Print the atlas layout chosen for a frame count as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input GIF path.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path (default: `<stem>_<N>frames_<fps>fps.png` next to the input).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Number of frames to keep (1-64; default: all, capped at 64).
    #[arg(long)]
    frames: Option<usize>,

    /// Playback rate label for the default output name (1-60).
    #[arg(long, default_value_t = 10)]
    fps: u32,

    /// Frame reduction strategy (uniform, keep_ends, smart, every_nth).
    #[arg(long, default_value = "keep_ends")]
    strategy: String,

    /// Thin the sequence first: keep N frames then drop one, repeating (0 = off).
    #[arg(long, default_value_t = 0)]
    remove_every: usize,

    /// Maximum colors in the optimized palette.
    #[arg(long, default_value_t = 256)]
    max_colors: usize,

    /// Skip palette optimization entirely.
    #[arg(long, default_value_t = false)]
    no_optimize: bool,

    /// Wall-clock budget for palette optimization, in seconds.
    #[arg(long, default_value_t = 30)]
    optimize_timeout_secs: u64,

    /// Also write a lossy JPEG preview next to the output.
    #[arg(long, default_value_t = false)]
    preview: bool,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input GIF path.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Frame count to look up.
    #[arg(long)]
    frames: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Info(args) => cmd_info(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let strategy = ReduceStrategy::from_str(&args.strategy)?;
    anyhow::ensure!(validate_fps(args.fps), "fps must be between 1 and 60");
    if let Some(frames) = args.frames {
        anyhow::ensure!(
            validate_frame_count(frames),
            "frame count must be between 1 and 64"
        );
    }

    let seq = decode_gif(&args.in_path)
        .with_context(|| format!("decode '{}'", args.in_path.display()))?;
    eprintln!(
        "loaded {} frames ({}x{})",
        seq.len(),
        seq.width,
        seq.height
    );

    let target = args.frames.unwrap_or(seq.len()).min(MAX_ATLAS_FRAMES);
    let thinned = remove_every(&seq.frames, args.remove_every);
    let reduced = reduce_frames(&thinned, target, strategy, None);
    let frame_count = reduced.len();

    let sheet = build_atlas(&reduced, frame_count).context("build atlas")?;

    let sheet = if args.no_optimize {
        sheet
    } else {
        let budget = Duration::from_secs(args.optimize_timeout_secs);
        match optimize_palette_with_timeout(&sheet, args.max_colors, budget) {
            OptimizeOutcome::Optimized(optimized) => {
                let stats = compare(&sheet, &optimized);
                eprintln!(
                    "optimized colors: {} -> {}",
                    stats.original_colors, stats.optimized_colors
                );
                optimized
            }
            OptimizeOutcome::TimedOut => {
                eprintln!("color optimization timed out, keeping original colors");
                sheet
            }
        }
    };

    let out = args
        .out
        .unwrap_or_else(|| default_out_path(&args.in_path, frame_count, args.fps));
    save_png(&sheet, &out).with_context(|| format!("encode '{}'", out.display()))?;

    if args.preview {
        let preview_path = out.with_extension("jpg");
        save_preview_jpeg(&sheet, &preview_path, 85)
            .with_context(|| format!("encode '{}'", preview_path.display()))?;
        eprintln!("wrote {}", preview_path.display());
    }

    let info = atlas_info_for(frame_count);
    eprintln!(
        "layout {} ({}px cells, {}/{} used)",
        info.layout_name, info.cell_size, info.used_cells, info.total_cells
    );
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn default_out_path(in_path: &Path, frames: usize, fps: u32) -> PathBuf {
    let stem = in_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sheet");
    in_path.with_file_name(format!("{stem}_{frames}frames_{fps}fps.png"))
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let seq = decode_gif(&args.in_path)
        .with_context(|| format!("decode '{}'", args.in_path.display()))?;
    let payload = serde_json::json!({
        "sequence": seq.info(),
        "atlas": atlas_info_for(seq.len().min(MAX_ATLAS_FRAMES)),
        "suggestions": reduction_suggestions(seq.len()),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&atlas_info_for(args.frames))?);
    Ok(())
}
