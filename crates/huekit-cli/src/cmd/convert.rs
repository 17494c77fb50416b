// crates/huekit-cli/src/cmd/convert.rs

use clap::Args;
use huekit_core::color::css::create_hex_padded;
use huekit_core::ColorFormat;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Target format: hex | rgb | rgba | hsl | hsla
    #[arg(long)]
    pub to: String,

    /// Zero-pad hex output to #rrggbb (the default hex output is unpadded)
    #[arg(long, default_value_t = false)]
    pub pad_hex: bool,

    /// Color string in any supported format
    pub color: String,
}

/// Shared with `palette show --to`.
pub fn convert_one(target: ColorFormat, color: &str, pad_hex: bool) -> anyhow::Result<String> {
    if target == ColorFormat::Hex && pad_hex {
        return Ok(create_hex_padded(ColorFormat::to_rgb(color)?));
    }
    if !target.has_alpha() && ColorFormat::detect(color)?.has_alpha() {
        log::debug!("dropping alpha converting {color:?} to {target}");
    }
    Ok(target.convert(color)?)
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let target = ColorFormat::parse_name(&args.to)?;
    let out = convert_one(target, &args.color, args.pad_hex)?;
    println!("{out}");
    Ok(())
}
