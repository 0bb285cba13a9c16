use iced::Color;

use crate::image_pipeline::ResultPreview;
use crate::model::{Workflow, WorkflowState};
use crate::utils::{css_rgb, file_label, palette_summary, swatch_label};

pub const SUBMIT_LABEL: &str = "Submit";
pub const PROCESSING_LABEL: &str = "Processing...";
pub const FAILURE_NOTICE: &str = "Analysis failed. Submit again or pick another image.";

#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub fill: Color,
    pub css: String,
    pub label: String,
}

/// What the window shows for the current workflow state, without any widgets.
/// `images` is only present for a succeeded workflow.
#[derive(Debug, Clone)]
pub struct WorkflowView<'a> {
    pub selected_file: Option<String>,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub show_progress: bool,
    pub failure_notice: Option<&'static str>,
    pub images: Option<&'a ResultPreview>,
    pub swatches: Vec<Swatch>,
    pub palette_summary: Option<String>,
}

impl<'a> WorkflowView<'a> {
    pub fn project(workflow: &'a Workflow, preview: Option<&'a ResultPreview>) -> Self {
        let loading = workflow.is_loading();
        let mut view = Self {
            selected_file: workflow.selection().map(file_label),
            submit_enabled: workflow.can_submit(),
            submit_label: if loading { PROCESSING_LABEL } else { SUBMIT_LABEL },
            show_progress: loading,
            failure_notice: None,
            images: None,
            swatches: Vec::new(),
            palette_summary: None,
        };

        match workflow.state() {
            WorkflowState::Idle | WorkflowState::Ready(_) | WorkflowState::Loading => {}
            WorkflowState::Failed => view.failure_notice = Some(FAILURE_NOTICE),
            WorkflowState::Succeeded(result) => {
                view.images = preview;
                view.swatches = result
                    .dominant_colors
                    .iter()
                    .map(|color| {
                        let [r, g, b] = color.to_rgb8();
                        Swatch {
                            fill: Color::from_rgb8(r, g, b),
                            css: css_rgb(color),
                            label: swatch_label(color),
                        }
                    })
                    .collect();
                view.palette_summary = Some(palette_summary(&result.dominant_colors));
            }
        }

        view
    }
}
