pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// An inline PNG reference: the fixed media-type prefix followed by the
/// service's base64 payload, unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDataUri(String);

impl ImageDataUri {
    pub fn from_base64(payload: &str) -> Self {
        Self(format!("{PNG_DATA_URI_PREFIX}{payload}"))
    }

    pub fn payload(&self) -> &str {
        &self.0[PNG_DATA_URI_PREFIX.len()..]
    }
}

/// Red, green, blue as reported by the service. Values are not range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbTriple(pub [i64; 3]);

impl RgbTriple {
    pub fn channels(&self) -> [i64; 3] {
        self.0
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        self.0.map(|channel| channel.clamp(0, 255) as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub original_image: ImageDataUri,
    pub segmented_image: ImageDataUri,
    pub dominant_colors: Vec<RgbTriple>,
}
