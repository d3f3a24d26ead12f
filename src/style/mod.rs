//! Style detection module
//!
//! Static style categories, the randomized color-to-style lookup and the
//! recommendation text generated for a detected style.

pub mod category;
pub mod detector;
pub mod recommend;

pub use category::{StyleCategory, StyleProfile};
pub use detector::{determine_style_from_color, StyleEntry, StyleTable};
pub use recommend::{draw_confidence, generate_recommendations, ConfidenceRange, ItemKind, Recommendation};
