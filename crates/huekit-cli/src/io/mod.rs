// crates/huekit-cli/src/io/mod.rs

pub mod palette_file;
