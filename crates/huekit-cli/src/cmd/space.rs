// crates/huekit-cli/src/cmd/space.rs

use clap::{Args, ValueEnum};
use huekit_core::color::space::{
    channels_from_slice, hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv,
    Channels,
};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Conversion {
    RgbToHsl,
    HslToRgb,
    RgbToHsv,
    HsvToRgb,
    HsvToHsl,
    HslToHsv,
}

impl Conversion {
    fn apply(self, c: Channels) -> Channels {
        match self {
            Conversion::RgbToHsl => rgb_to_hsl(c),
            Conversion::HslToRgb => hsl_to_rgb(c),
            Conversion::RgbToHsv => rgb_to_hsv(c),
            Conversion::HsvToRgb => hsv_to_rgb(c),
            Conversion::HsvToHsl => hsv_to_hsl(c),
            Conversion::HslToHsv => hsl_to_hsv(c),
        }
    }
}

#[derive(Args, Debug)]
pub struct SpaceArgs {
    #[arg(value_enum)]
    pub conversion: Conversion,

    /// Three integer channels (extra values are ignored)
    #[arg(allow_negative_numbers = true, num_args = 1..)]
    pub channels: Vec<i32>,
}

pub fn run(args: SpaceArgs) -> anyhow::Result<()> {
    let input = channels_from_slice(&args.channels)?;
    if args.channels.len() > 3 {
        log::warn!("ignoring {} extra channel value(s)", args.channels.len() - 3);
    }
    let [a, b, c] = args.conversion.apply(input);
    println!("{a},{b},{c}");
    Ok(())
}
