pub mod heart;
pub mod particles;
pub mod sprite;
