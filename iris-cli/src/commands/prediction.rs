//! Prediction command handlers
//!
//! Inspect or cancel a prediction by URL.

use anyhow::{Context, Result};
use colored::*;
use iris_client::poller::error_value;
use iris_client::{Prediction, PredictionApi};

use crate::config::Config;
use crate::output::{print_json, print_prediction};

/// Show the current state of a prediction
pub async fn get(config: &Config, url: &str) -> Result<()> {
    let client = config.client()?;
    let result = client.get_prediction(url).await;

    if config.json {
        return print_json_result(result);
    }

    let prediction = result.context("Failed to fetch prediction")?;
    print_prediction(&prediction);
    Ok(())
}

/// Cancel a running prediction
pub async fn cancel(config: &Config, url: &str) -> Result<()> {
    let client = config.client()?;
    let result = client.cancel_prediction(url).await;

    if config.json {
        return print_json_result(result);
    }

    let prediction = result.context("Failed to cancel prediction")?;
    println!("{} Cancel requested", "✓".green());
    print_prediction(&prediction);
    Ok(())
}

fn print_json_result(result: iris_client::Result<Prediction>) -> Result<()> {
    let value = match result {
        Ok(prediction) => serde_json::to_value(&prediction)?,
        Err(e) => error_value(&e),
    };
    print_json(&value)
}
