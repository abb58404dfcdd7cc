pub mod hue_map;
pub mod variant;
