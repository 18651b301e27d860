//! Terminal output helpers

use anyhow::{Result, bail};
use colored::*;
use iris_core::domain::prediction::{Prediction, PredictionOutcome, PredictionStatus};
use serde_json::Value;

/// Print a JSON value on stdout
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a prediction outcome
///
/// A failed outcome is printed and then reported as an error so the process
/// exits non-zero.
pub fn print_outcome(outcome: &PredictionOutcome) -> Result<()> {
    match outcome {
        PredictionOutcome::Succeeded { .. } => {
            if let Some(text) = outcome.output_text() {
                println!("{}", text);
            }
            Ok(())
        }
        PredictionOutcome::Failed { status, error } => {
            let message = match error {
                Value::String(message) => message.clone(),
                other => other.to_string(),
            };
            eprintln!("{} {}", colorize_status(status), message.red());
            bail!("Prediction {}: {}", status, message)
        }
    }
}

/// Print detailed prediction information
pub fn print_prediction(prediction: &Prediction) {
    println!("{}", "Prediction Details:".bold());
    if let Some(id) = &prediction.id {
        println!("  ID:        {}", id.cyan());
    }
    if let Some(version) = &prediction.version {
        println!("  Version:   {}", version.dimmed());
    }
    println!("  Status:    {}", colorize_status(&prediction.status));

    if let Some(created) = prediction.created_at {
        println!("  Created:   {}", created.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(completed) = prediction.completed_at {
        println!("  Completed: {}", completed.format("%Y-%m-%d %H:%M:%S"));

        if let Some(started) = prediction.started_at {
            let seconds = completed.signed_duration_since(started).num_seconds();
            println!("  Duration:  {}s", seconds);
        }
    }

    if let Some(output) = prediction.output.as_ref().filter(|o| !o.is_null()) {
        println!("\n{}", "Output:".bold());
        match serde_json::to_string_pretty(output) {
            Ok(pretty) => println!("{}", pretty),
            Err(_) => println!("{:?}", output),
        }
    }

    if let Some(error) = prediction.error.as_ref().filter(|e| !e.is_null()) {
        println!("\n{}", "Error:".bold());
        println!("{}", error.to_string().red());
    }
}

/// Colorize prediction status for display
pub fn colorize_status(status: &PredictionStatus) -> ColoredString {
    let label = status.as_str().to_string();
    match status {
        PredictionStatus::Starting | PredictionStatus::Other(_) => label.yellow(),
        PredictionStatus::Processing => label.cyan(),
        PredictionStatus::Succeeded => label.green(),
        PredictionStatus::Failed => label.red(),
        PredictionStatus::Canceled => label.dimmed(),
    }
}
