use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use iced::widget::image::Handle;

use crate::model::{AnalysisResult, ImageDataUri};

pub struct DataUriImagePipeline;

impl DataUriImagePipeline {
    pub fn to_handle(uri: &ImageDataUri) -> Result<Handle, String> {
        let bytes = Self::decode_payload(uri)?;
        Ok(Handle::from_bytes(bytes))
    }

    pub fn decode_payload(uri: &ImageDataUri) -> Result<Vec<u8>, String> {
        let bytes = STANDARD
            .decode(uri.payload())
            .map_err(|err| format!("Failed to decode image payload: {err}"))?;

        if bytes.is_empty() {
            return Err(String::from("Image payload is empty"));
        }
        Ok(bytes)
    }
}

/// Handles for the two returned images, built once per successful result.
#[derive(Debug, Clone)]
pub struct ResultPreview {
    pub original: Option<Handle>,
    pub segmented: Option<Handle>,
}

impl ResultPreview {
    pub fn build(result: &AnalysisResult) -> Self {
        Self {
            original: preview_handle("original", &result.original_image),
            segmented: preview_handle("segmented", &result.segmented_image),
        }
    }
}

fn preview_handle(label: &str, uri: &ImageDataUri) -> Option<Handle> {
    match DataUriImagePipeline::to_handle(uri) {
        Ok(handle) => Some(handle),
        Err(err) => {
            log::warn!("Unable to build {label} image preview: {err}");
            None
        }
    }
}
