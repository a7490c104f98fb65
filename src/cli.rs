use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sentient-vision")]
#[command(about = "Facial emotion analysis for photographs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a photograph and print the per-face emotion breakdown
    Analyze {
        /// Path to the image file (JPEG, PNG, WEBP)
        #[arg(required = true)]
        image: PathBuf,

        /// Write the raw analysis JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print raw analysis JSON instead of the report
        #[arg(long)]
        json: bool,
    },

    /// Show or edit configuration
    Config {
        /// Set the Gemini API key
        #[arg(long)]
        set_api_key: Option<String>,

        /// Show current settings
        #[arg(long)]
        show: bool,
    },
}
