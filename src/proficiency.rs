use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper ratio bounds (inclusive) for the three lower tiers, as percentages.
const CRITICAL_MAX_PCT: u64 = 30;
const LOW_MAX_PCT: u64 = 50;
const MODERATE_MAX_PCT: u64 = 70;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    #[error("maximum proficiency must be greater than zero")]
    ZeroMax,
    #[error("proficiency {current} exceeds maximum {max}")]
    ExceedsMax { current: u32, max: u32 },
}

/// A skill rating such as `93/100 HP`.
///
/// Only constructible through [`ProficiencyRating::new`] or
/// [`ProficiencyRating::clamped`], so `max > 0` and `current <= max` always hold
/// and [`ratio`](Self::ratio) is always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRating", into = "RawRating")]
pub struct ProficiencyRating {
    current: u32,
    max: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawRating {
    current: u32,
    max: u32,
}

impl TryFrom<RawRating> for ProficiencyRating {
    type Error = RatingError;

    fn try_from(raw: RawRating) -> Result<Self, Self::Error> {
        Self::new(raw.current, raw.max)
    }
}

impl From<ProficiencyRating> for RawRating {
    fn from(rating: ProficiencyRating) -> Self {
        Self {
            current: rating.current,
            max: rating.max,
        }
    }
}

impl ProficiencyRating {
    pub fn new(current: u32, max: u32) -> Result<Self, RatingError> {
        if max == 0 {
            return Err(RatingError::ZeroMax);
        }
        if current > max {
            return Err(RatingError::ExceedsMax { current, max });
        }
        Ok(Self { current, max })
    }

    /// Like [`new`](Self::new) but pulls an out-of-range `current` down to `max`.
    pub fn clamped(current: u32, max: u32) -> Result<Self, RatingError> {
        Self::new(current.min(max), max)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.current) / f64::from(self.max)
    }

    pub fn percent(&self) -> f64 {
        f64::from(self.current) * 100.0 / f64::from(self.max)
    }

    /// Tier computed with integer cross-multiplication so that the
    /// boundaries (e.g. exactly 30%) never depend on float rounding.
    pub fn tier(&self) -> Tier {
        let scaled = u64::from(self.current) * 100;
        let max = u64::from(self.max);
        if scaled <= max * CRITICAL_MAX_PCT {
            Tier::Critical
        } else if scaled <= max * LOW_MAX_PCT {
            Tier::Low
        } else if scaled <= max * MODERATE_MAX_PCT {
            Tier::Moderate
        } else {
            Tier::Mastered
        }
    }

    /// CSS width the bar's fill animates towards, e.g. `"93%"`.
    pub fn fill_width(&self) -> String {
        let pct = self.percent();
        if pct.fract() == 0.0 {
            format!("{pct:.0}%")
        } else {
            format!("{pct:.2}%")
        }
    }

    pub fn hp_label(&self) -> String {
        format!("{}/{} HP", self.current, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Critical,
    Low,
    Moderate,
    Mastered,
}

impl Tier {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= CRITICAL_MAX_PCT as f64 / 100.0 {
            Self::Critical
        } else if ratio <= LOW_MAX_PCT as f64 / 100.0 {
            Self::Low
        } else if ratio <= MODERATE_MAX_PCT as f64 / 100.0 {
            Self::Moderate
        } else {
            Self::Mastered
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Critical => "#EF4444",
            Self::Low => "#F97316",
            Self::Moderate => "#FACC15",
            Self::Mastered => "#22C55E",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::Mastered => "MASTERED",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Critical | Self::Low => "⚠️",
            Self::Moderate => "⚡",
            Self::Mastered => "✓",
        }
    }

    /// Status line under the bar. `mastered_label` replaces the caption for
    /// the top tier only (e.g. `PROFICIENT`).
    pub fn status(&self, mastered_label: Option<&str>) -> String {
        let caption = match (self, mastered_label) {
            (Self::Mastered, Some(label)) => label,
            _ => self.caption(),
        };
        format!("{} {}", self.glyph(), caption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier_of(current: u32, max: u32) -> Tier {
        ProficiencyRating::new(current, max)
            .expect("rating should be valid")
            .tier()
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_of(0, 100), Tier::Critical);
        assert_eq!(tier_of(30, 100), Tier::Critical);
        assert_eq!(tier_of(31, 100), Tier::Low);
        assert_eq!(tier_of(50, 100), Tier::Low);
        assert_eq!(tier_of(51, 100), Tier::Moderate);
        assert_eq!(tier_of(70, 100), Tier::Moderate);
        assert_eq!(tier_of(71, 100), Tier::Mastered);
        assert_eq!(tier_of(100, 100), Tier::Mastered);

        // 3/10 is exactly on the boundary, 301/1000 just above it
        assert_eq!(tier_of(3, 10), Tier::Critical);
        assert_eq!(tier_of(301, 1000), Tier::Low);
    }

    #[test]
    fn test_tier_from_ratio_matches_rating() {
        assert_eq!(Tier::from_ratio(0.30), Tier::Critical);
        assert_eq!(Tier::from_ratio(0.301), Tier::Low);
        assert_eq!(Tier::from_ratio(0.5), Tier::Low);
        assert_eq!(Tier::from_ratio(0.7), Tier::Moderate);
        assert_eq!(Tier::from_ratio(0.700001), Tier::Mastered);

        for max in [1, 7, 10, 64, 100, 333] {
            for current in 0..=max {
                let rating = ProficiencyRating::new(current, max).unwrap();
                assert_eq!(
                    rating.tier(),
                    Tier::from_ratio(rating.ratio()),
                    "{current}/{max}"
                );
                assert!((0.0..=1.0).contains(&rating.ratio()));
            }
        }
    }

    #[test]
    fn test_rating_validation() {
        assert_eq!(ProficiencyRating::new(1, 0), Err(RatingError::ZeroMax));
        assert_eq!(
            ProficiencyRating::new(101, 100),
            Err(RatingError::ExceedsMax {
                current: 101,
                max: 100
            })
        );
        assert_eq!(ProficiencyRating::clamped(0, 0), Err(RatingError::ZeroMax));

        let clamped = ProficiencyRating::clamped(150, 100).unwrap();
        assert_eq!(clamped.current(), 100);
        assert_eq!(clamped.tier(), Tier::Mastered);
    }

    #[test]
    fn test_generative_ai_rating() {
        let rating = ProficiencyRating::new(93, 100).unwrap();
        let tier = rating.tier();
        assert_eq!(tier, Tier::Mastered);
        assert_eq!(tier.color(), "#22C55E");
        assert_eq!(tier.caption(), "MASTERED");
        assert_eq!(tier.status(None), "✓ MASTERED");
        assert_eq!(tier.status(Some("PROFICIENT")), "✓ PROFICIENT");
        assert_eq!(rating.fill_width(), "93%");
        assert_eq!(rating.hp_label(), "93/100 HP");
    }

    #[test]
    fn test_mastered_label_only_overrides_top_tier() {
        assert_eq!(Tier::Critical.status(Some("PROFICIENT")), "⚠️ CRITICAL");
        assert_eq!(Tier::Moderate.status(Some("PROFICIENT")), "⚡ MODERATE");
    }

    #[test]
    fn test_fill_width_fractional() {
        let rating = ProficiencyRating::new(1, 3).unwrap();
        assert_eq!(rating.fill_width(), "33.33%");
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let ok: ProficiencyRating = serde_json::from_str(r#"{"current":82,"max":100}"#).unwrap();
        assert_eq!(ok.tier(), Tier::Mastered);
        assert!(serde_json::from_str::<ProficiencyRating>(r#"{"current":5,"max":0}"#).is_err());
        assert!(serde_json::from_str::<ProficiencyRating>(r#"{"current":9,"max":8}"#).is_err());
    }
}
