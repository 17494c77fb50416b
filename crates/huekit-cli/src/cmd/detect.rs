// crates/huekit-cli/src/cmd/detect.rs

use clap::Args;
use huekit_core::ColorFormat;

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Color string, e.g. "rgba(255,0,0,0.5)"
    pub color: String,
}

pub fn run(args: DetectArgs) -> anyhow::Result<()> {
    let f = ColorFormat::detect(&args.color)?;
    println!("{f}");
    Ok(())
}
