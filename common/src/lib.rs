//! SentientVision Common Library
//!
//! Types and logic shared between the CLI and the web (WASM) frontend.

pub mod data_url;
pub mod error;
pub mod parser;
pub mod prompts;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use parser::{extract_json, parse_analysis_response};
pub use prompts::build_emotion_prompt;
pub use store::{Intent, Phase, Store};
pub use types::{AnalysisResponse, Emotion, FaceDetection, UploadedImage};
