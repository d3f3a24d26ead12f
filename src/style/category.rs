//! Fashion style categories and their reference data

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::RgbColor;
use crate::{AnalysisError, Result};

/// Fixed set of fashion archetypes used to label an analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleCategory {
    #[default]
    Casual,
    Formal,
    Sporty,
    Elegant,
    Streetwear,
}

/// Static description of a style category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub palette: [RgbColor; 4],
    pub occasions: [&'static str; 4],
    pub matching_items: [&'static str; 4],
}

const CASUAL: StyleProfile = StyleProfile {
    name: "Casual",
    description: "Relaxed, comfortable clothing suitable for everyday wear",
    palette: [
        RgbColor::from_hex_const("#9CAF88"),
        RgbColor::from_hex_const("#E0C094"),
        RgbColor::from_hex_const("#B8A390"),
        RgbColor::from_hex_const("#D6D1CD"),
    ],
    occasions: ["Weekend outings", "Coffee dates", "Shopping trips", "Casual gatherings"],
    matching_items: ["Denim jacket", "Canvas sneakers", "Crossbody bag", "Simple accessories"],
};

const FORMAL: StyleProfile = StyleProfile {
    name: "Formal",
    description: "Elegant, sophisticated attire for professional or special occasions",
    palette: [
        RgbColor::from_hex_const("#36454F"),
        RgbColor::from_hex_const("#000000"),
        RgbColor::from_hex_const("#0F0F0F"),
        RgbColor::from_hex_const("#1F1F1F"),
    ],
    occasions: ["Business meetings", "Formal dinners", "Job interviews", "Professional events"],
    matching_items: ["Structured blazer", "Leather shoes", "Minimal jewelry", "Leather briefcase"],
};

const SPORTY: StyleProfile = StyleProfile {
    name: "Sporty",
    description: "Athletic-inspired clothing that combines function and fashion",
    palette: [
        RgbColor::from_hex_const("#DE5D83"),
        RgbColor::from_hex_const("#FF4646"),
        RgbColor::from_hex_const("#FF8C42"),
        RgbColor::from_hex_const("#FFCE66"),
    ],
    occasions: ["Gym sessions", "Outdoor activities", "Casual sports events", "Active weekends"],
    matching_items: ["Athletic shoes", "Performance socks", "Sports watch", "Gym bag"],
};

const ELEGANT: StyleProfile = StyleProfile {
    name: "Elegant",
    description: "Sophisticated and refined style for upscale occasions",
    palette: [
        RgbColor::from_hex_const("#8B5CF6"),
        RgbColor::from_hex_const("#7B61FF"),
        RgbColor::from_hex_const("#6247AA"),
        RgbColor::from_hex_const("#4B3C8F"),
    ],
    occasions: ["Evening galas", "Upscale restaurants", "Theater performances", "Special celebrations"],
    matching_items: ["Statement earrings", "Clutch purse", "Heeled shoes", "Fine jewelry"],
};

const STREETWEAR: StyleProfile = StyleProfile {
    name: "Streetwear",
    description: "Urban fashion with bold contemporary edge",
    palette: [
        RgbColor::from_hex_const("#F97316"),
        RgbColor::from_hex_const("#22D3EE"),
        RgbColor::from_hex_const("#FB923C"),
        RgbColor::from_hex_const("#F472B6"),
    ],
    occasions: ["Music festivals", "Urban exploration", "Art exhibitions", "Street culture events"],
    matching_items: ["Statement sneakers", "Graphic tees", "Beanies/caps", "Crossbody bags"],
};

impl StyleCategory {
    /// Every category, in declaration order
    pub const ALL: [StyleCategory; 5] = [
        StyleCategory::Casual,
        StyleCategory::Formal,
        StyleCategory::Sporty,
        StyleCategory::Elegant,
        StyleCategory::Streetwear,
    ];

    /// Lowercase identifier (`"casual"`, `"formal"`, ...)
    pub const fn id(self) -> &'static str {
        match self {
            StyleCategory::Casual => "casual",
            StyleCategory::Formal => "formal",
            StyleCategory::Sporty => "sporty",
            StyleCategory::Elegant => "elegant",
            StyleCategory::Streetwear => "streetwear",
        }
    }

    /// Reference data for this category
    pub const fn profile(self) -> &'static StyleProfile {
        match self {
            StyleCategory::Casual => &CASUAL,
            StyleCategory::Formal => &FORMAL,
            StyleCategory::Sporty => &SPORTY,
            StyleCategory::Elegant => &ELEGANT,
            StyleCategory::Streetwear => &STREETWEAR,
        }
    }

    /// Display name (`"Casual"`, ...)
    pub const fn name(self) -> &'static str {
        self.profile().name
    }

    /// Accessory advice keyword for styling tips
    pub const fn accessory_tone(self) -> &'static str {
        match self {
            StyleCategory::Formal => "minimal",
            StyleCategory::Elegant => "statement",
            StyleCategory::Casual => "relaxed",
            StyleCategory::Sporty | StyleCategory::Streetwear => "bold",
        }
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleCategory {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        StyleCategory::ALL
            .into_iter()
            .find(|style| style.id().eq_ignore_ascii_case(key))
            .ok_or_else(|| AnalysisError::unknown_key("style", key))
    }
}
