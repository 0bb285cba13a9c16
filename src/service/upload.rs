use reqwest::multipart::{Form, Part};
use reqwest::Client;

use super::{decode, ServiceConfig, UploadError};
use crate::model::{AnalysisResult, SelectedFile};

/// Sends one image to the analysis service and decodes its answer.
#[derive(Debug, Clone)]
pub struct UploadController {
    http: Client,
    config: ServiceConfig,
}

impl UploadController {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub async fn analyze(&self, file: SelectedFile) -> Result<AnalysisResult, UploadError> {
        let form = Form::new().part(self.config.field_name, file_part(&file));

        let body = self
            .http
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        decode(&body)
    }
}

impl Default for UploadController {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

fn file_part(file: &SelectedFile) -> Part {
    let part = || Part::bytes(file.bytes.to_vec()).file_name(file.name.clone());
    part().mime_str(&file.mime).unwrap_or_else(|err| {
        log::warn!("Sending {} without a content type: {err}", file.name);
        part()
    })
}
