//! Upload command handler

use anyhow::{Context, Result};
use colored::*;
use iris_client::ReplicateClient;
use iris_client::poller::error_value;
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::output::print_json;

/// Upload a local image and print its URL
pub async fn upload(config: &Config, path: &str) -> Result<()> {
    let client = config.upload_client();
    let result = client.upload_image(path).await;

    if config.json {
        let value = match result {
            Ok(url) => json!({ "url": url }),
            Err(e) => error_value(&e),
        };
        return print_json(&value);
    }

    let url = result.with_context(|| format!("Failed to upload {}", path))?;
    println!("{} {}", "✓".green(), url.bold());
    Ok(())
}

/// Returns a URL usable as model input for `image`
///
/// Existing local files are uploaded first; anything else is passed through.
pub async fn resolve_image(client: &ReplicateClient, image: &str) -> iris_client::Result<String> {
    if Path::new(image).is_file() {
        info!("Uploading local image {}", image);
        client.upload_image(image).await
    } else {
        Ok(image.to_string())
    }
}
