// crates/huekit-cli/src/cmd/inspect.rs

use clap::Args;
use huekit_core::ColorFormat;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Color string in any supported format
    pub color: String,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let c = &args.color;
    let f = ColorFormat::detect(c)?;
    let [r, g, b] = ColorFormat::to_rgb(c)?;
    let [h, s, l] = ColorFormat::to_hsl(c)?;
    let [hv, sv, v] = ColorFormat::to_hsv(c)?;
    let a = ColorFormat::to_alpha(c)?;

    println!("format = {f}");
    println!("rgb    = {r},{g},{b}");
    println!("hsl    = {h},{s},{l}");
    println!("hsv    = {hv},{sv},{v}");
    println!("alpha  = {a:?}");
    Ok(())
}
