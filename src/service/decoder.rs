use serde::Deserialize;

use super::UploadError;
use crate::model::{AnalysisResult, ImageDataUri, RgbTriple};

#[derive(Debug, Deserialize)]
struct RawAnalysis {
    original_image_base64: String,
    segmented_image_base64: String,
    dominant_colors: Vec<[i64; 3]>,
}

/// Turns the service's JSON body into renderable artifacts. Base64 payloads
/// are wrapped, not verified; colors keep their order and values.
pub fn decode(body: &[u8]) -> Result<AnalysisResult, UploadError> {
    let raw: RawAnalysis = serde_json::from_slice(body)?;

    Ok(AnalysisResult {
        original_image: ImageDataUri::from_base64(&raw.original_image_base64),
        segmented_image: ImageDataUri::from_base64(&raw.segmented_image_base64),
        dominant_colors: raw.dominant_colors.into_iter().map(RgbTriple).collect(),
    })
}
