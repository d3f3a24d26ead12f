//! Outfit recommendations and match confidence

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::StyleCategory;
use crate::{AnalysisError, Result};

/// Garment slot a recommendation fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Top,
    Bottom,
    Accessory,
}

/// A single recommended item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub name: String,
    pub style: StyleCategory,
    pub description: String,
}

/// Top, bottom and accessory suggestions for a style and detected color
///
/// The accessory is drawn from the style's matching items.
pub fn generate_recommendations<R>(
    style: StyleCategory,
    color_name: Option<&str>,
    rng: &mut R,
) -> Vec<Recommendation>
where
    R: Rng + ?Sized,
{
    let profile = style.profile();
    let style_lower = profile.name.to_lowercase();
    let color = color_name.map(str::trim).filter(|name| !name.is_empty());

    let (top_name, top_description) = match color {
        Some(color) => (
            format!("{color} {} Top", profile.name),
            format!(
                "A {} top that perfectly matches {style_lower} style occasions",
                color.to_lowercase()
            ),
        ),
        None => (
            format!("{} Top", profile.name),
            format!("A top that perfectly matches {style_lower} style occasions"),
        ),
    };

    let accessory = profile
        .matching_items
        .choose(rng)
        .copied()
        .unwrap_or(profile.matching_items[0]);

    vec![
        Recommendation {
            kind: ItemKind::Top,
            name: top_name,
            style,
            description: top_description,
        },
        Recommendation {
            kind: ItemKind::Bottom,
            name: format!("Complementary {} Bottom", profile.name),
            style,
            description: format!(
                "Pair with {} for a complete outfit",
                profile.matching_items[0].to_lowercase()
            ),
        },
        Recommendation {
            kind: ItemKind::Accessory,
            name: accessory.to_string(),
            style,
            description: format!("The perfect accessory for your {style_lower} look"),
        },
    ]
}

/// Inclusive-exclusive bounds for the reported confidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ConfidenceRange {
    fn default() -> Self {
        Self {
            min: crate::constants::analysis::MIN_CONFIDENCE,
            max: crate::constants::analysis::MAX_CONFIDENCE,
        }
    }
}

impl ConfidenceRange {
    /// Check `0 <= min <= max <= 1`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the bounds are out of order or out of [0, 1].
    pub fn validate(&self) -> Result<()> {
        let ordered = 0.0 <= self.min && self.min <= self.max && self.max <= 1.0;
        if !ordered {
            return Err(AnalysisError::invalid_input(
                "confidence",
                format!("[{}, {})", self.min, self.max),
            ));
        }
        Ok(())
    }
}

/// Draw a match confidence uniformly from `range`
pub fn draw_confidence<R>(range: ConfidenceRange, rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    range.min + rng.gen::<f64>() * (range.max - range.min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_recommendation_text() {
        let mut rng = StdRng::seed_from_u64(5);
        let recs = generate_recommendations(StyleCategory::Elegant, Some("Purple"), &mut rng);

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].kind, ItemKind::Top);
        assert_eq!(recs[0].name, "Purple Elegant Top");
        assert_eq!(
            recs[0].description,
            "A purple top that perfectly matches elegant style occasions"
        );
        assert_eq!(recs[1].name, "Complementary Elegant Bottom");
        assert_eq!(recs[1].description, "Pair with statement earrings for a complete outfit");
        assert_eq!(recs[2].kind, ItemKind::Accessory);
        assert_eq!(recs[2].description, "The perfect accessory for your elegant look");
        assert!(recs.iter().all(|rec| rec.style == StyleCategory::Elegant));
    }

    #[test]
    fn test_accessory_is_a_matching_item() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let recs = generate_recommendations(StyleCategory::Sporty, Some("Red"), &mut rng);
            assert!(StyleCategory::Sporty
                .profile()
                .matching_items
                .contains(&recs[2].name.as_str()));
        }
    }

    #[test]
    fn test_without_color_name() {
        let mut rng = StdRng::seed_from_u64(0);
        let recs = generate_recommendations(StyleCategory::Casual, None, &mut rng);
        assert_eq!(recs[0].name, "Casual Top");
        assert_eq!(recs[0].description, "A top that perfectly matches casual style occasions");
    }

    #[test]
    fn test_serialized_kind_field() {
        let mut rng = StdRng::seed_from_u64(0);
        let recs = generate_recommendations(StyleCategory::Formal, Some("Black"), &mut rng);
        let json = serde_json::to_value(&recs[1]).unwrap();
        assert_eq!(json["type"], "bottom");
        assert_eq!(json["style"], "formal");
    }

    #[test]
    fn test_confidence_in_range() {
        let mut rng = StdRng::seed_from_u64(21);
        let range = ConfidenceRange::default();
        for _ in 0..1000 {
            let confidence = draw_confidence(range, &mut rng);
            assert!((0.85..1.0).contains(&confidence));
        }
    }

    #[test]
    fn test_confidence_range_validation() {
        assert!(ConfidenceRange::default().validate().is_ok());
        assert!(ConfidenceRange { min: 0.9, max: 0.8 }.validate().is_err());
        assert!(ConfidenceRange { min: -0.1, max: 0.5 }.validate().is_err());
        assert!(ConfidenceRange { min: 0.5, max: 1.5 }.validate().is_err());
    }
}
