use super::analysis::AnalysisResult;
use super::selection::{Generation, SelectedFile, Selection};
use crate::service::UploadError;

#[derive(Debug, Clone, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Ready(SelectedFile),
    Loading,
    Succeeded(AnalysisResult),
    Failed,
}

/// A request the caller must now perform.
#[derive(Debug, Clone)]
pub struct Submission {
    pub generation: Generation,
    pub file: SelectedFile,
}

/// The select, submit, result cycle. Only `select_file`, `submit` and
/// `complete` move the state.
#[derive(Debug, Default)]
pub struct Workflow {
    selection: Selection,
    state: WorkflowState,
}

impl Workflow {
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selection.file()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, WorkflowState::Loading)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.selection.file().is_some()
    }

    /// Replaces the selection. Outside of `Loading` this drops any previous
    /// result immediately. While a request is in flight the state stays
    /// `Loading` and that request's answer will be discarded as stale.
    pub fn select_file(&mut self, file: SelectedFile) {
        log::info!("Selected {} ({}, {} bytes)", file.name, file.mime, file.byte_len());
        self.selection.replace(file.clone());

        if !self.is_loading() {
            self.state = WorkflowState::Ready(file);
        }
    }

    pub fn submit(&mut self) -> Option<Submission> {
        if self.is_loading() {
            log::debug!("Ignoring submit while a request is in flight");
            return None;
        }

        let Some(file) = self.selection.file().cloned() else {
            log::debug!("Ignoring submit without a selected file");
            return None;
        };

        log::info!("Submitting {} for analysis", file.name);
        self.state = WorkflowState::Loading;

        Some(Submission {
            generation: self.selection.generation(),
            file,
        })
    }

    pub fn complete(
        &mut self,
        generation: Generation,
        outcome: Result<AnalysisResult, UploadError>,
    ) {
        if !self.is_loading() {
            log::debug!("Ignoring completion with no request in flight");
            return;
        }

        if generation != self.selection.generation() {
            log::debug!("Discarding response issued for a previous selection");
            self.state = match self.selection.file() {
                Some(file) => WorkflowState::Ready(file.clone()),
                None => WorkflowState::Idle,
            };
            return;
        }

        self.state = match outcome {
            Ok(result) => {
                log::info!(
                    "Analysis finished with {} dominant color(s)",
                    result.dominant_colors.len()
                );
                WorkflowState::Succeeded(result)
            }
            Err(err) => {
                log::error!("Analysis failed: {err}");
                WorkflowState::Failed
            }
        };
    }
}
