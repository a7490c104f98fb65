use clap::Parser;
use indicatif::ProgressBar;
use sentient_vision::{analyzer, cli, config, intake, report};

use cli::{Cli, Commands};
use config::Config;
use sentient_vision::error::Result;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            image,
            output,
            json,
        } => {
            println!("🧠 sentient-vision - emotion analysis\n");

            // 1. Intake
            println!("[1/2] Loading image...");
            let loaded = intake::load_image(&image, config.max_upload_bytes)?;
            println!(
                "✔ {} ({}x{}, {})\n",
                loaded.uploaded.file_name, loaded.width, loaded.height, loaded.uploaded.mime_type
            );

            // 2. Analysis
            println!("[2/2] Analyzing emotions...");
            if cli.verbose {
                println!("  model: {}", config.model);
                println!("  payload: {} chars", loaded.uploaded.data_url.len());
            }

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("waiting for the vision model...");
            spinner.enable_steady_tick(Duration::from_millis(120));

            let result = analyzer::analyze(&loaded.uploaded, &config).await;
            spinner.finish_and_clear();
            let response = result?;
            println!("✔ {} face(s) detected\n", response.faces.len());

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                report::print_report(&loaded, &response);
            }

            if let Some(output) = output {
                std::fs::write(&output, serde_json::to_string_pretty(&response)?)?;
                println!("\n✔ Saved analysis: {}", output.display());
            }
        }

        Commands::Config { set_api_key, show } => {
            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if show {
                let mut display = config.clone();
                display.api_key = display.api_key.map(|_| "********".to_string());
                println!("{}", serde_json::to_string_pretty(&display)?);
                println!("config file: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
