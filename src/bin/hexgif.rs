use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "hexgif", version, about = "Render files as animated GIFs of hex glyphs")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a GIF from one or more input files.
    Cf(CfArgs),
}

#[derive(Parser, Debug)]
struct CfArgs {
    /// Output GIF path.
    output: PathBuf,

    /// Input files, encoded in the order given. Unreadable files are skipped.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Color scheme.
    #[arg(long, value_enum, default_value_t = ModeChoice::Gradient)]
    mode: ModeChoice,

    /// Delay between frames, in centiseconds.
    #[arg(long, default_value_t = hexgif::DEFAULT_DELAY_CS)]
    delay: u16,

    /// Loop the animation forever instead of playing it once.
    #[arg(long = "loop")]
    repeat: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Gradient,
    Mono,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; usage errors exit 1.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    match cli.cmd {
        Command::Cf(args) => cmd_cf(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_cf(args: CfArgs) -> anyhow::Result<()> {
    let mode = match args.mode {
        ModeChoice::Gradient => hexgif::ColorMode::Gradient,
        ModeChoice::Mono => hexgif::ColorMode::Mono,
    };

    let mut cfg = hexgif::default_gif_config(args.output).with_mode(mode);
    cfg.delay_cs = args.delay;
    cfg.repeat = args.repeat;

    let summary = hexgif::encode_files(&cfg, &args.inputs)
        .with_context(|| format!("encode '{}'", cfg.out_path.display()))?;

    tracing::info!(
        frames = summary.frames,
        skipped = summary.inputs_skipped,
        "wrote {}",
        cfg.out_path.display()
    );
    Ok(())
}
