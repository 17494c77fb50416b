// crates/huekit-core/src/color/mod.rs

pub mod css;
pub mod format;
pub mod parse;
pub mod space;
