use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use inkframe::{
    Canvas, FontStyle, FrameId, FsFontLoader, Mounting, OutputFormat, PoemSource, RenderRequest,
    ServiceConfig, StyleParameters,
};

#[derive(Parser, Debug)]
#[command(name = "inkframe", version)]
struct Cli {
    /// JSON config file; environment variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a poem to PNG or SVG.
    Render(RenderArgs),
    /// Print the style parameters derived from a seed as JSON.
    Params(ParamsArgs),
    /// Write a generated asset as a standalone SVG document.
    Texture(TextureArgs),
    /// List the curated frame ids.
    Frames,
    /// Run the HTTP service.
    Serve,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Verse line; repeat 2, 4 or 6 times.
    #[arg(long = "line")]
    lines: Vec<String>,

    /// Poem generator output (`{"poem": [...], "explanation": ...}`) instead of `--line`.
    #[arg(long, conflicts_with = "lines")]
    poem_json: Option<PathBuf>,

    /// Subject name for the seal.
    #[arg(long)]
    name: Option<String>,

    /// Script style keyword.
    #[arg(long, default_value = "kaishu")]
    style: String,

    /// Frame id, `generated`, or `seed:<text>`.
    #[arg(long, default_value = "none")]
    frame: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,

    /// Font root; overrides the config.
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Seal year; overrides the config.
    #[arg(long)]
    year: Option<i32>,

    /// Canvas width; overrides the config.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height; overrides the config.
    #[arg(long)]
    height: Option<u32>,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ParamsArgs {
    /// Seed string (sanitized like a mounting identifier).
    seed: String,
}

#[derive(Parser, Debug)]
struct TextureArgs {
    /// Seed string (sanitized like a mounting identifier).
    seed: String,

    /// Which generated asset to write.
    #[arg(long, value_enum, default_value_t = AssetChoice::Texture)]
    asset: AssetChoice,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Svg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AssetChoice {
    Texture,
    Ornament,
    Grain,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,inkframe=debug".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(cli.config.as_deref(), args),
        Command::Params(args) => cmd_params(args),
        Command::Texture(args) => cmd_texture(args),
        Command::Frames => cmd_frames(),
        Command::Serve => cmd_serve(cli.config.as_deref()),
    }
}

fn cmd_render(config: Option<&Path>, args: RenderArgs) -> anyhow::Result<()> {
    let cfg = ServiceConfig::load(config)?;
    let lines = match &args.poem_json {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read poem '{}'", path.display()))?;
            PoemSource::from_json(&text)?.poem
        }
        None => args.lines,
    };
    let canvas = Canvas::new(
        args.width.unwrap_or(cfg.canvas.width),
        args.height.unwrap_or(cfg.canvas.height),
    )?;
    let format = match args.format {
        FormatChoice::Png => OutputFormat::Png,
        FormatChoice::Svg => OutputFormat::Svg,
    };
    let name = args.name.as_deref();

    let request = RenderRequest::new(&lines, name, args.year.unwrap_or(cfg.year))?
        .with_mounting(Mounting::parse(&args.frame, name))
        .with_style(FontStyle::parse_or_default(&args.style))
        .with_canvas(canvas)
        .with_format(format);

    let loader = FsFontLoader::new(args.font_dir.unwrap_or(cfg.font_dir));
    let out = inkframe::render(&request, &loader)?;
    if out.substituted {
        eprintln!("note: '{}' unavailable, set in {}", request.style, out.family);
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, out.bytes())
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_params(args: ParamsArgs) -> anyhow::Result<()> {
    let seed = inkframe::sanitize_identifier(&args.seed);
    println!("{}", StyleParameters::from_seed(&seed).to_json()?);
    Ok(())
}

fn cmd_texture(args: TextureArgs) -> anyhow::Result<()> {
    let seed = inkframe::sanitize_identifier(&args.seed);
    let params = StyleParameters::from_seed(&seed);
    let asset = match args.asset {
        AssetChoice::Texture => params.texture_asset,
        AssetChoice::Grain => params.grain,
        AssetChoice::Ornament => match params.ornament {
            Some(o) => o.asset,
            None => anyhow::bail!("seed '{seed}' draws no corner ornament"),
        },
    };
    std::fs::write(&args.out, asset.to_svg_document())
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {} ({})", args.out.display(), asset.id);
    Ok(())
}

fn cmd_frames() -> anyhow::Result<()> {
    for id in FrameId::ALL {
        println!("{}\t{}", id.id(), id.label());
    }
    println!("generated\t按姓名生成");
    Ok(())
}

fn cmd_serve(config: Option<&Path>) -> anyhow::Result<()> {
    let cfg = ServiceConfig::load(config)?;
    let rt = tokio::runtime::Runtime::new().context("start tokio runtime")?;
    rt.block_on(inkframe::server::serve(cfg))
}
