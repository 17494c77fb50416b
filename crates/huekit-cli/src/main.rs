// crates/huekit-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "huekit")]
#[command(about = "CSS color strings, color spaces and palettes", long_about = None)]
pub struct Cli {
    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the format of a color string (hex/rgb/rgba/hsl/hsla)
    Detect(cmd::detect::DetectArgs),

    /// Re-render a color string in another format
    Convert(cmd::convert::ConvertArgs),

    /// Print format, rgb, hsl, hsv and alpha of a color string
    Inspect(cmd::inspect::InspectArgs),

    /// Convert a raw channel triple between RGB, HSL and HSV
    Space(cmd::space::SpaceArgs),

    /// Palette tools (built-in, file or hue-range palettes)
    Palette(cmd::palette::PaletteArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Detect(args) => cmd::detect::run(args),
        Commands::Convert(args) => cmd::convert::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Space(args) => cmd::space::run(args),
        Commands::Palette(args) => cmd::palette::run(args),
    }
}
