//! Integration tests for the complete style analysis pipeline
//!
//! These tests validate the end-to-end workflow including:
//! - Image upload validation and decoding
//! - Grid sampling around the image center
//! - Color naming, style selection and recommendations
//! - Fallback behavior when no color can be sampled
//!
//! Images are generated in memory or written to temporary directories, so no
//! test assets are required.

use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use style_scan::color::{
    complementary_colors, complementary_hex, hsl_to_rgb, nearest_color_name, rgb_to_hsl,
    PixelSource,
};
use style_scan::style::{ItemKind, StyleTable};
use style_scan::{
    analyze_image, AnalysisConfig, AnalysisError, RgbColor, StyleAnalysis, StyleAnalyzer,
    StyleCategory,
};

fn analyzer(seed: u64) -> StyleAnalyzer<StdRng> {
    StyleAnalyzer::new(AnalysisConfig::default(), StdRng::seed_from_u64(seed)).unwrap()
}

/// Source with no readable pixels, like a canvas that failed to render
struct BlankCanvas;

impl PixelSource for BlankCanvas {
    fn dimensions(&self) -> (u32, u32) {
        (0, 0)
    }

    fn read_pixel(&self, _x: i64, _y: i64) -> Option<RgbColor> {
        None
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_analyze_image_file_not_found() {
    let err = analyze_image(Path::new("nonexistent_file.jpg")).unwrap_err();
    assert!(
        matches!(err, AnalysisError::ImageLoadError { .. }),
        "Expected ImageLoadError, got: {err:?}"
    );
}

#[test]
fn test_analyze_image_rejects_non_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"not an image").unwrap();

    let err = analyze_image(&path).unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(err.user_message(), "Please upload an image file (JPEG, PNG, etc.)");
}

#[test]
fn test_analyze_image_rejects_oversized_upload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("outfit.png");
    RgbImage::from_pixel(64, 64, Rgb([0, 0, 255])).save(&path).unwrap();

    let config = AnalysisConfig {
        max_upload_bytes: 16,
        ..AnalysisConfig::default()
    };
    let mut analyzer = StyleAnalyzer::new(config, StdRng::seed_from_u64(1)).unwrap();

    let err = analyzer.analyze_image(&path).unwrap_err();
    assert_eq!(err.user_message(), "Please upload an image smaller than 5MB");
}

#[test]
fn test_analyze_empty_source_fails() {
    let err = analyzer(0).analyze_pixels(&BlankCanvas).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput { .. }));
}

// ============================================================================
// Pipeline Tests
// ============================================================================

#[test]
fn test_analyze_image_uniform_red() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("red_shirt.png");
    RgbImage::from_pixel(120, 80, Rgb([250, 5, 5])).save(&path).unwrap();

    let result = analyze_image(&path).unwrap();

    assert_eq!(result.detected_color, "#fa0505");
    assert_eq!(result.display_color_name(), "Red");
    assert!(matches!(result.style, StyleCategory::Sporty | StyleCategory::Elegant));
    assert!(result.confidence >= 0.85 && result.confidence < 1.0);
}

#[test]
fn test_analyze_pixels_samples_center_only() {
    // Blue border with a gray center patch larger than the sample grid
    let image = RgbImage::from_fn(200, 200, |x, y| {
        if (70..130).contains(&x) && (70..130).contains(&y) {
            Rgb([128, 128, 128])
        } else {
            Rgb([0, 0, 255])
        }
    });

    let result = analyzer(3).analyze_pixels(&image).unwrap();
    assert_eq!(result.detected_color, "#808080");
    assert_eq!(result.color_name.as_deref(), Some("Gray"));
    assert!(matches!(result.style, StyleCategory::Formal | StyleCategory::Casual));
}

#[test]
fn test_analyze_tiny_image_uses_readable_points() {
    // Only the center pixel of the 5x5 grid lands inside a 1x1 image
    let image = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 0, 10]));

    let result = analyzer(4).analyze_pixels(&image).unwrap();
    assert_eq!(result.detected_color, "#ffff00");
    assert_eq!(result.color_name.as_deref(), Some("Yellow"));
}

#[test]
fn test_recommendations_follow_style() {
    let image = RgbImage::from_pixel(50, 50, Rgb([0, 0, 0]));
    let result = analyzer(8).analyze_pixels(&image).unwrap();

    let kinds: Vec<ItemKind> = result.recommendations.iter().map(|rec| rec.kind).collect();
    assert_eq!(kinds, vec![ItemKind::Top, ItemKind::Bottom, ItemKind::Accessory]);
    assert!(result.recommendations.iter().all(|rec| rec.style == result.style));
    assert_eq!(
        result.recommendations[0].name,
        format!("Black {} Top", result.style.name())
    );
    assert_eq!(result.matching_items, result.style.profile().matching_items.to_vec());
}

#[test]
fn test_same_seed_same_analysis() {
    let image = RgbImage::from_pixel(40, 40, Rgb([128, 0, 128]));

    let first = analyzer(99).analyze_pixels(&image).unwrap();
    let second = analyzer(99).analyze_pixels(&image).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_style_choice_covers_candidates() {
    let mut analyzer = analyzer(12);
    let candidates = StyleTable::default().candidates("Black").unwrap().to_vec();

    let mut seen = Vec::new();
    for _ in 0..200 {
        let style = analyzer.analyze_color(RgbColor::new(0, 0, 0)).style;
        assert!(candidates.contains(&style));
        if !seen.contains(&style) {
            seen.push(style);
        }
    }
    assert_eq!(seen.len(), candidates.len());
}

// ============================================================================
// Fallback Tests
// ============================================================================

#[test]
fn test_fallback_when_sampling_fails() {
    let result = analyzer(5).analyze_pixels_or_default(&BlankCanvas);

    assert_eq!(result.detected_color, "#cccccc");
    assert_eq!(result.color_name, None);
    assert_eq!(result.display_color_name(), "Neutral");
    assert_eq!(result.style, StyleCategory::Casual);
    assert_eq!(result.recommendations[0].name, "Casual Top");
    assert_eq!(result.harmony.inverse, RgbColor::new(51, 51, 51));
}

#[test]
fn test_configured_fallback_color() {
    let config = AnalysisConfig {
        fallback_color: "#202020".to_string(),
        ..AnalysisConfig::default()
    };
    let mut analyzer = StyleAnalyzer::new(config, StdRng::seed_from_u64(6)).unwrap();

    let result = analyzer.analyze_pixels_or_default(&BlankCanvas);
    assert_eq!(result.detected_color, "#202020");
}

#[test]
fn test_complementary_hex_fallback() {
    assert_eq!(complementary_hex(None), ["#f0f0f0", "#e0e0e0", "#d0d0d0"]);
    assert_eq!(complementary_hex(Some("#zzzzzz")), ["#f0f0f0", "#e0e0e0", "#d0d0d0"]);
    assert_eq!(complementary_hex(Some("#ff0000"))[2], "#00ffff");
}

// ============================================================================
// Color Property Tests
// ============================================================================

#[test]
fn test_palette_colors_name_themselves() {
    for (hex, name) in [
        ("#ff0000", "Red"),
        ("#00ff00", "Green"),
        ("#0000ff", "Blue"),
        ("#000000", "Black"),
        ("#ffffff", "White"),
        ("#808080", "Gray"),
        ("#a52a2a", "Brown"),
    ] {
        assert_eq!(nearest_color_name(RgbColor::from_hex(hex).unwrap()), name);
    }
}

#[test]
fn test_hsl_round_trip_on_sampled_colors() {
    for color in [
        RgbColor::new(250, 5, 5),
        RgbColor::new(12, 200, 99),
        RgbColor::new(128, 128, 128),
        RgbColor::new(255, 192, 203),
    ] {
        let back = hsl_to_rgb(rgb_to_hsl(color));
        assert!(back.r.abs_diff(color.r) <= 1);
        assert!(back.g.abs_diff(color.g) <= 1);
        assert!(back.b.abs_diff(color.b) <= 1);
    }
}

#[test]
fn test_complement_is_channel_inverse() {
    let harmony = complementary_colors(RgbColor::new(10, 20, 30));
    assert_eq!(harmony.inverse, RgbColor::new(245, 235, 225));
    assert_eq!(harmony.to_array()[2], harmony.inverse);
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_style_analysis_json_serialization() {
    let image = RgbImage::from_pixel(30, 30, Rgb([0, 0, 255]));
    let result = analyzer(10).analyze_pixels(&image).unwrap();

    let json = result.to_json().unwrap();
    assert!(json.contains("\"detected_color\""));
    assert!(json.contains("\"color_name\":\"Blue\""));
    assert!(json.contains("\"recommendations\""));
    assert!(json.contains("\"type\":\"accessory\""));

    let restored = StyleAnalysis::from_json(&json).unwrap();
    assert_eq!(restored, result);
}
