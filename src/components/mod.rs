pub mod swatch;

pub use swatch::color_swatch;
