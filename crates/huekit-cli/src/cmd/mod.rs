// crates/huekit-cli/src/cmd/mod.rs

pub mod convert;
pub mod detect;
pub mod inspect;
pub mod palette;
pub mod space;
