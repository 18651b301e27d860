//! Vision command handlers
//!
//! In `--json` mode every failure, remote or local, is printed as
//! `{"error": ...}` and the command succeeds. Otherwise failures abort.

use anyhow::{Context, Result};
use colored::*;
use iris_client::PredictionOutcome;
use iris_client::poller::{error_value, outcome_or_error_value};
use iris_client::vision::Classification;
use serde_json::json;

use super::upload::resolve_image;
use crate::config::Config;
use crate::output::{print_json, print_outcome};

/// Ask a question about an image
pub async fn ask(config: &Config, image: &str, question: &str) -> Result<()> {
    let model = config.vision()?;
    let result = async {
        let image = resolve_image(&config.upload_client(), image).await?;
        model.ask(&image, question).await
    }
    .await;
    report(config, result)
}

/// Describe the main object of an image
pub async fn caption(config: &Config, image: &str) -> Result<()> {
    let model = config.vision()?;
    let result = async {
        let image = resolve_image(&config.upload_client(), image).await?;
        model.describe_object(&image).await
    }
    .await;
    report(config, result)
}

/// Describe the scenery of an image
pub async fn scenery(config: &Config, image: &str) -> Result<()> {
    let model = config.vision()?;
    let result = async {
        let image = resolve_image(&config.upload_client(), image).await?;
        model.describe_scenery(&image).await
    }
    .await;
    report(config, result)
}

/// Classify an image, then describe it accordingly
pub async fn analyze(config: &Config, image: &str) -> Result<()> {
    let model = config.vision()?;
    let result = async {
        let image = resolve_image(&config.upload_client(), image).await?;
        model.analyze(&image).await
    }
    .await;
    report(config, result)
}

/// Tell what an image mostly shows
pub async fn classify(config: &Config, image: &str) -> Result<()> {
    let model = config.vision()?;
    let result = async {
        let image = resolve_image(&config.upload_client(), image).await?;
        model.classify_subject(&image).await
    }
    .await;

    if config.json {
        let value = match result {
            Ok(Classification { kind, answer }) => {
                json!({ "subject": kind, "answer": answer.into_value() })
            }
            Err(e) => error_value(&e),
        };
        return print_json(&value);
    }

    let classification = result.context("Classification failed")?;
    print_outcome(&classification.answer)?;
    println!(
        "{} {}",
        "Subject:".bold(),
        classification.kind.to_string().cyan()
    );
    Ok(())
}

/// Prints a prediction result in the configured mode
fn report(config: &Config, result: iris_client::Result<PredictionOutcome>) -> Result<()> {
    if config.json {
        return print_json(&outcome_or_error_value(result));
    }

    let outcome = result.context("Prediction request failed")?;
    print_outcome(&outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_client::config::DEFAULT_UPLOAD_URL;

    fn config(json: bool) -> Config {
        Config {
            token: Some("r8_abc".to_string()),
            model_version: Some("v1".to_string()),
            // Nothing listens here
            api_url: "http://127.0.0.1:9/v1".to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            poll_interval: 2,
            max_attempts: None,
            timeout: None,
            json,
        }
    }

    #[tokio::test]
    async fn test_json_mode_converts_submission_errors() {
        let image = "https://host/cat.jpg";
        assert!(caption(&config(true), image).await.is_ok());
        assert!(classify(&config(true), image).await.is_ok());
    }

    #[tokio::test]
    async fn test_submission_errors_propagate_by_default() {
        let image = "https://host/cat.jpg";
        let err = ask(&config(false), image, "What is this?").await.unwrap_err();
        assert!(err.to_string().contains("Prediction request failed"));
        assert!(classify(&config(false), image).await.is_err());
    }
}
