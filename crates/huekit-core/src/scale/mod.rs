// crates/huekit-core/src/scale/mod.rs

pub mod linear;
