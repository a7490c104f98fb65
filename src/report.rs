//! Terminal rendering of analysis results.

use crate::intake::LoadedImage;
use sentient_vision_common::AnalysisResponse;

const BAR_WIDTH: usize = 24;
const TOP_EMOTIONS: usize = 3;

/// Print the per-face emotion breakdown and overall atmosphere.
pub fn print_report(image: &LoadedImage, response: &AnalysisResponse) {
    if response.faces.is_empty() {
        println!("No faces detected in {}.", image.uploaded.file_name);
    }

    for (i, face) in response.faces.iter().enumerate() {
        let (x, y, w, h) = face.pixel_rect(image.width as f64, image.height as f64);
        println!("Face {} ─ {}", i + 1, face.summary);
        println!(
            "  region: {:.0}x{:.0} at ({:.0}, {:.0})",
            w, h, x, y
        );

        let mut traits = Vec::new();
        if let Some(age) = &face.apparent_age {
            traits.push(format!("age {}", age));
        }
        if let Some(gender) = &face.gender_estimate {
            traits.push(gender.clone());
        }
        if !traits.is_empty() {
            println!("  traits: {}", traits.join(", "));
        }

        for emotion in face.top_emotions(TOP_EMOTIONS) {
            println!(
                "  {:<12} {} {:>3.0}%",
                emotion.label,
                confidence_bar(emotion.confidence),
                emotion.confidence * 100.0
            );
        }
        println!();
    }

    println!("Overall atmosphere: {}", response.overall_atmosphere);
}

fn confidence_bar(confidence: f64) -> String {
    let filled = (confidence.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(BAR_WIDTH - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_bar_full() {
        let bar = confidence_bar(1.0);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), BAR_WIDTH);
    }

    #[test]
    fn test_confidence_bar_empty() {
        let bar = confidence_bar(0.0);
        assert_eq!(bar.chars().filter(|c| *c == '░').count(), BAR_WIDTH);
    }

    #[test]
    fn test_confidence_bar_clamps_out_of_range() {
        assert_eq!(confidence_bar(2.0), confidence_bar(1.0));
        assert_eq!(confidence_bar(-1.0), confidence_bar(0.0));
    }

    #[test]
    fn test_confidence_bar_constant_width() {
        for confidence in [0.0, 0.25, 0.5, 0.92, 1.0] {
            assert_eq!(confidence_bar(confidence).chars().count(), BAR_WIDTH);
        }
    }
}
