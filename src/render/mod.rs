pub mod animation;
pub mod worldmap;
