// crates/huekit-cli/src/cmd/palette.rs

use anyhow::{anyhow, bail};
use clap::{ArgGroup, Args, Subcommand};
use huekit_core::palette::builtin;
use huekit_core::palette::id::palette_id_hex;
use huekit_core::{ColorFormat, ColorPalette};

use crate::cmd::convert::convert_one;
use crate::io::palette_file;

#[derive(Args)]
pub struct PaletteArgs {
    #[command(subcommand)]
    pub cmd: PaletteCmd,
}

#[derive(Subcommand)]
pub enum PaletteCmd {
    /// List the built-in palette names
    List,
    /// Print every color of a palette, one per line
    Show(ShowArgs),
    /// Pick one color by index or by a scaled value
    Pick(PickArgs),
    /// Write a palette to a text file (one color per line)
    Save(SaveArgs),
}

/// Exactly one of --name, --file or --hue-range.
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .multiple(false)
        .args(["name", "file", "hue_range"])
))]
pub struct SourceArgs {
    /// Built-in palette name (see `palette list`)
    #[arg(long)]
    pub name: Option<String>,

    /// Palette text file
    #[arg(long)]
    pub file: Option<String>,

    /// Generate hsla() colors for hues START..FINISH (FINISH excluded)
    #[arg(long, num_args = 2, value_names = ["START", "FINISH"], allow_negative_numbers = true)]
    pub hue_range: Option<Vec<i32>>,

    /// Saturation (0..=100) for --hue-range
    #[arg(long = "saturation", default_value_t = 100, requires = "hue_range")]
    pub s: i32,

    /// Lightness (0..=100) for --hue-range
    #[arg(long = "lightness", default_value_t = 50, requires = "hue_range")]
    pub l: i32,

    /// Alpha (0..=1) for --hue-range
    #[arg(long = "alpha", default_value_t = 1.0, requires = "hue_range")]
    pub a: f32,

    /// Reverse the palette after loading
    #[arg(long, default_value_t = false)]
    pub reverse: bool,
}

impl SourceArgs {
    fn resolve(&self) -> anyhow::Result<ColorPalette> {
        let p = match (&self.name, &self.file, &self.hue_range) {
            (Some(name), None, None) => builtin::by_name(name)
                .cloned()
                .ok_or_else(|| anyhow!("unknown palette {name:?} (try `palette list`)"))?,
            (None, Some(path), None) => palette_file::load_palette(path)?,
            (None, None, Some(range)) => {
                ColorPalette::from_hue_range(range[0], range[1], self.s, self.l, self.a)?
            }
            _ => bail!("give exactly one of --name, --file or --hue-range"),
        };
        Ok(if self.reverse { p.reverse() } else { p })
    }
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Convert every color to this format before printing
    #[arg(long)]
    pub to: Option<String>,

    /// Zero-pad hex output (only with --to hex)
    #[arg(long, default_value_t = false)]
    pub pad_hex: bool,
}

#[derive(Args, Debug)]
pub struct PickArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Integer index; wraps around in both directions
    #[arg(long, allow_negative_numbers = true, conflicts_with = "value")]
    pub index: Option<i64>,

    /// Real position, rounded to the nearest index (or mapped through --domain)
    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<f64>,

    /// Map --value from [MIN, MAX] onto the palette's indices
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true, requires = "value")]
    pub domain: Option<Vec<f64>>,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output path
    #[arg(long)]
    pub out: String,
}

pub fn run(args: PaletteArgs) -> anyhow::Result<()> {
    match args.cmd {
        PaletteCmd::List => {
            for name in builtin::NAMES {
                println!("{name}");
            }
            Ok(())
        }
        PaletteCmd::Show(a) => cmd_show(a),
        PaletteCmd::Pick(a) => cmd_pick(a),
        PaletteCmd::Save(a) => cmd_save(a),
    }
}

fn cmd_show(a: ShowArgs) -> anyhow::Result<()> {
    let p = a.source.resolve()?;
    let target = a.to.as_deref().map(ColorFormat::parse_name).transpose()?;

    eprintln!("palette_id = {}", palette_id_hex(&p));
    eprintln!("size       = {}", p.size());

    for c in p.colors() {
        match target {
            Some(t) => println!("{}", convert_one(t, c, a.pad_hex)?),
            None => println!("{c}"),
        }
    }
    Ok(())
}

fn cmd_pick(a: PickArgs) -> anyhow::Result<()> {
    let p = a.source.resolve()?;

    let color = match (a.index, a.value) {
        (Some(i), None) => p.color_at(i),
        (None, Some(x)) => match &a.domain {
            Some(d) => {
                let scale = p.scale_for(d[0], d[1]);
                log::debug!("pick via {scale}");
                p.color_at_scaled(x, Some(&scale))?
            }
            None => p.color_at_scaled(x, None)?,
        },
        _ => bail!("give one of --index or --value"),
    };

    println!("{color}");
    Ok(())
}

fn cmd_save(a: SaveArgs) -> anyhow::Result<()> {
    let p = a.source.resolve()?;
    palette_file::save_palette(&a.out, &p)?;
    eprintln!("palette save ok: out={} size={} id={}", a.out, p.size(), palette_id_hex(&p));
    Ok(())
}
