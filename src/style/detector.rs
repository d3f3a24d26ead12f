//! Color-to-style lookup
//!
//! Each color name maps to an ordered list of candidate styles; detection
//! picks one candidate uniformly at random from a caller-supplied RNG.
//! Unknown or missing names resolve to `Casual`.

use std::borrow::Cow;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::StyleCategory;
use super::StyleCategory::{Casual, Elegant, Formal, Sporty, Streetwear};
use crate::{AnalysisError, Result};

const COLOR_STYLES: [(&str, &[StyleCategory]); 11] = [
    ("Black", &[Formal, Elegant, Streetwear]),
    ("White", &[Casual, Formal, Elegant]),
    ("Gray", &[Formal, Casual]),
    ("Blue", &[Casual, Elegant]),
    ("Red", &[Sporty, Elegant]),
    ("Green", &[Casual, Sporty]),
    ("Yellow", &[Sporty, Streetwear]),
    ("Orange", &[Sporty, Streetwear]),
    ("Purple", &[Elegant, Streetwear]),
    ("Pink", &[Casual, Elegant]),
    ("Brown", &[Casual, Formal]),
];

/// Candidate styles for one color name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    pub color_name: Cow<'static, str>,
    pub candidates: Cow<'static, [StyleCategory]>,
}

/// Color name → candidate styles table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    entries: Vec<StyleEntry>,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            entries: COLOR_STYLES
                .iter()
                .map(|&(name, candidates)| StyleEntry {
                    color_name: Cow::Borrowed(name),
                    candidates: Cow::Borrowed(candidates),
                })
                .collect(),
        }
    }
}

impl StyleTable {
    /// Build a custom table
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a color name is blank or has no candidates.
    pub fn from_entries<N>(entries: impl IntoIterator<Item = (N, Vec<StyleCategory>)>) -> Result<Self>
    where
        N: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, candidates)| {
                let name: String = name.into();
                if name.trim().is_empty() {
                    return Err(AnalysisError::invalid_input("color_name", "blank"));
                }
                if candidates.is_empty() {
                    return Err(AnalysisError::invalid_input("candidates", name));
                }
                Ok(StyleEntry {
                    color_name: Cow::Owned(name),
                    candidates: Cow::Owned(candidates),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Table entries in definition order
    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    /// Candidate styles for an exact color name
    pub fn candidates(&self, color_name: &str) -> Option<&[StyleCategory]> {
        self.entries
            .iter()
            .find(|entry| entry.color_name == color_name)
            .map(|entry| entry.candidates.as_ref())
    }
}

/// Pick a style for a color name
///
/// `None`, an empty name and names missing from `table` give `Casual`.
/// Otherwise the result is drawn uniformly from the name's candidates.
pub fn determine_style_from_color<R>(
    color_name: Option<&str>,
    table: &StyleTable,
    rng: &mut R,
) -> StyleCategory
where
    R: Rng + ?Sized,
{
    let Some(candidates) = color_name
        .filter(|name| !name.is_empty())
        .and_then(|name| table.candidates(name))
    else {
        debug!(?color_name, "no style hint for color, defaulting to casual");
        return StyleCategory::Casual;
    };

    let style = candidates.choose(rng).copied().unwrap_or_default();
    debug!(?color_name, %style, "picked style from {} candidates", candidates.len());
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_black_stays_within_candidates() {
        let table = StyleTable::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let style = determine_style_from_color(Some("Black"), &table, &mut rng);
            assert!(matches!(style, Formal | Elegant | Streetwear), "unexpected {style:?}");
        }
    }

    #[test]
    fn test_missing_name_is_casual() {
        let table = StyleTable::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(determine_style_from_color(None, &table, &mut rng), Casual);
            assert_eq!(determine_style_from_color(Some(""), &table, &mut rng), Casual);
            assert_eq!(determine_style_from_color(Some("Navy"), &table, &mut rng), Casual);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = StyleTable::default();
        assert!(table.candidates("Red").is_some());
        assert!(table.candidates("red").is_none());
    }

    #[test]
    fn test_every_candidate_is_reachable() {
        let table = StyleTable::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let style = determine_style_from_color(Some("White"), &table, &mut rng);
            if !seen.contains(&style) {
                seen.push(style);
            }
        }
        seen.sort_by_key(|style| style.id());
        assert_eq!(seen, vec![Casual, Elegant, Formal]);
    }

    #[test]
    fn test_single_candidate_is_deterministic() {
        let table = StyleTable::from_entries([("Navy", vec![Formal])]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(determine_style_from_color(Some("Navy"), &table, &mut rng), Formal);
        }
    }

    #[test]
    fn test_same_seed_same_pick() {
        let table = StyleTable::default();
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| determine_style_from_color(Some("Purple"), &table, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(99), picks(99));
    }

    #[test]
    fn test_custom_table_validation() {
        assert!(StyleTable::from_entries([("Teal", Vec::new())]).is_err());
        assert!(StyleTable::from_entries([(" ", vec![Casual])]).is_err());
    }

    #[test]
    fn test_default_table_covers_palette() {
        let table = StyleTable::default();
        for (_, name) in crate::constants::palette::NAMED_COLORS {
            assert!(table.candidates(name).is_some(), "{name} has no styles");
        }
    }
}
