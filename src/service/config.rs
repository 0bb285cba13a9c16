pub const SERVICE_ENDPOINT: &str = "https://pc.adrianadhari.my.id/api/upload";

/// Multipart field the service reads the image from.
pub const UPLOAD_FIELD: &str = "image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub field_name: &'static str,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: SERVICE_ENDPOINT.to_string(),
            field_name: UPLOAD_FIELD,
        }
    }
}
