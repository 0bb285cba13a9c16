pub mod analysis;
pub mod selection;
pub mod workflow;

pub use analysis::{AnalysisResult, ImageDataUri, RgbTriple};
pub use selection::{Generation, SelectedFile};
pub use workflow::{Submission, Workflow, WorkflowState};
