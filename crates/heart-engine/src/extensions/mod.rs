// extensions/mod.rs
//
// Pure helper math shared by the particle systems.

pub mod easing;

pub use easing::{ease_out_cubic, fade_out};
