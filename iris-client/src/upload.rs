//! Image upload to the public file host

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::{debug, info};

use crate::ReplicateClient;
use crate::error::{ClientError, Result};

impl ReplicateClient {
    /// Upload a local image and return its public URL
    ///
    /// The file is sent as a single multipart `file` field. Only an HTTP 200
    /// counts as success; its body, trimmed, is the hosted URL.
    ///
    /// # Arguments
    /// * `path` - Path of the image to upload
    pub async fn upload_image(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image.jpg")
            .to_string();

        debug!("Uploading {} ({} bytes)", path.display(), bytes.len());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let response = self
            .client
            .post(&self.config.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::UploadFailed {
                status: status.as_u16(),
            });
        }

        let url = response.text().await?.trim().to_string();
        info!("Uploaded {} to {}", path.display(), url);

        Ok(url)
    }
}
