mod gemini;

use crate::config::Config;
use crate::error::Result;
use sentient_vision_common::{AnalysisResponse, UploadedImage};

/// Run one emotion analysis call against the configured model.
pub async fn analyze(image: &UploadedImage, config: &Config) -> Result<AnalysisResponse> {
    let api_key = config.get_api_key()?;
    gemini::analyze_image(&api_key, image, config).await
}
