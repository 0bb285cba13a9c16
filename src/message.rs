use crate::model::{AnalysisResult, Generation, SelectedFile};
use crate::service::UploadError;

#[derive(Debug, Clone)]
pub enum Message {
    PickFile,
    FilePicked(Option<SelectedFile>),
    Submit,
    AnalysisFinished(Generation, Result<AnalysisResult, UploadError>),
}
