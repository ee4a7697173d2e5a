pub mod animation;
pub mod debug;
pub mod placement;
pub mod render;
pub mod roam;
