pub mod formatting;

pub use formatting::{css_rgb, file_label, palette_summary, swatch_label};
