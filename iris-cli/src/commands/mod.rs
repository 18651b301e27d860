//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod prediction;
mod upload;
mod vision;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Ask a question about an image
    Ask {
        /// Image URL, or a local file to upload first
        image: String,
        question: String,
    },
    /// Describe the main object of an image
    Caption {
        /// Image URL, or a local file to upload first
        image: String,
    },
    /// Describe the scenery of an image
    Scenery {
        /// Image URL, or a local file to upload first
        image: String,
    },
    /// Tell whether an image mostly shows text, an object or scenery
    Classify {
        /// Image URL, or a local file to upload first
        image: String,
    },
    /// Classify an image, then describe it accordingly
    Analyze {
        /// Image URL, or a local file to upload first
        image: String,
    },
    /// Upload a local image and print its public URL
    Upload { path: String },
    /// Show the current state of a prediction
    Get {
        /// Status URL of the prediction (urls.get)
        url: String,
    },
    /// Cancel a running prediction
    Cancel {
        /// Cancel URL of the prediction (urls.cancel)
        url: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Ask { image, question } => vision::ask(config, &image, &question).await,
        Commands::Caption { image } => vision::caption(config, &image).await,
        Commands::Scenery { image } => vision::scenery(config, &image).await,
        Commands::Classify { image } => vision::classify(config, &image).await,
        Commands::Analyze { image } => vision::analyze(config, &image).await,
        Commands::Upload { path } => upload::upload(config, &path).await,
        Commands::Get { url } => prediction::get(config, &url).await,
        Commands::Cancel { url } => prediction::cancel(config, &url).await,
    }
}
