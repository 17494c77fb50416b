// crates/huekit-core/src/palette/mod.rs

pub mod builtin;
pub mod id;
pub mod palette;
