pub mod controls;
pub mod image_viewer;
pub mod palette_panel;
pub mod projection;

pub use controls::controls_panel;
pub use image_viewer::images_panel;
pub use palette_panel::palette_panel;
pub use projection::{Swatch, WorkflowView};
