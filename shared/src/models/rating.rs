//! Hut rating models and total score calculation

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::DeviceId;

/// Flat bonus added to the total score when eggnog is available
pub const EGGNOG_BONUS: i64 = 5;

/// Service style of a hut restaurant
///
/// Stored in the backend as one of the fixed scores `{-20, -10, 0}`; inside
/// the app only these three variants exist, so an out-of-range score cannot
/// be constructed past the storage boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "i32", try_from = "i32")]
pub enum ServiceLevel {
    /// Self-service only, -20 points
    SelfServiceOnly,
    /// Partial table service, -10 points
    PartialService,
    /// Full table service, 0 points
    FullService,
}

impl ServiceLevel {
    /// Contribution of the service level to the total score
    pub fn score(&self) -> Decimal {
        Decimal::from(i32::from(*self))
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceLevel::SelfServiceOnly => "Self-service only",
            ServiceLevel::PartialService => "Partial service",
            ServiceLevel::FullService => "Full table service",
        }
    }
}

impl std::fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<ServiceLevel> for i32 {
    fn from(level: ServiceLevel) -> i32 {
        match level {
            ServiceLevel::SelfServiceOnly => -20,
            ServiceLevel::PartialService => -10,
            ServiceLevel::FullService => 0,
        }
    }
}

/// Error for service level scores outside `{-20, -10, 0}`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service level score: {0} (expected -20, -10 or 0)")]
pub struct InvalidServiceLevel(pub i32);

impl TryFrom<i32> for ServiceLevel {
    type Error = InvalidServiceLevel;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -20 => Ok(ServiceLevel::SelfServiceOnly),
            -10 => Ok(ServiceLevel::PartialService),
            0 => Ok(ServiceLevel::FullService),
            other => Err(InvalidServiceLevel(other)),
        }
    }
}

/// An in-progress rating, as entered on the rating form
///
/// Every field may still be unset while the user fills the form. The six
/// slider categories accept 0-5 in steps of 0.5; missing fields count as
/// zero (or false) in the total, and only in [`RatingDraft::total_score`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RatingDraft {
    pub service_level: Option<ServiceLevel>,
    pub service: Option<Decimal>,
    pub ski_haserl: Option<Decimal>,
    pub food: Option<Decimal>,
    pub sun_terrace: Option<Decimal>,
    pub interior: Option<Decimal>,
    pub apres_ski: Option<Decimal>,
    pub eggnog: Option<bool>,
}

impl RatingDraft {
    /// Calculate the total score for this rating
    ///
    /// A plain sum, never an average: service level plus the six sliders
    /// plus the eggnog bonus. The theoretical range is [-20, 35]. Values are
    /// summed as entered; validity is checked separately, before this is
    /// trusted (see [`crate::validation`]).
    pub fn total_score(&self) -> Decimal {
        let slider = |value: Option<Decimal>| value.unwrap_or(Decimal::ZERO);
        let service_level = self
            .service_level
            .map(|level| level.score())
            .unwrap_or(Decimal::ZERO);
        let eggnog = if self.eggnog.unwrap_or(false) {
            Decimal::from(EGGNOG_BONUS)
        } else {
            Decimal::ZERO
        };

        service_level
            + slider(self.service)
            + slider(self.ski_haserl)
            + slider(self.food)
            + slider(self.sun_terrace)
            + slider(self.interior)
            + slider(self.apres_ski)
            + eggnog
    }
}

/// A persisted rating of one restaurant by one device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HutRating {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub device_id: DeviceId,
    pub service_level: ServiceLevel,
    pub service: Option<Decimal>,
    pub ski_haserl: Option<Decimal>,
    pub food: Option<Decimal>,
    pub sun_terrace: Option<Decimal>,
    pub interior: Option<Decimal>,
    pub apres_ski: Option<Decimal>,
    pub eggnog: bool,
    /// Total score as computed on submission; kept in lockstep with
    /// [`RatingDraft::total_score`]
    pub total_score: Decimal,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HutRating {
    /// View the stored fields as a draft, e.g. to recompute the score
    pub fn as_draft(&self) -> RatingDraft {
        RatingDraft {
            service_level: Some(self.service_level),
            service: self.service,
            ski_haserl: self.ski_haserl,
            food: self.food,
            sun_terrace: self.sun_terrace,
            interior: self.interior,
            apres_ski: self.apres_ski,
            eggnog: Some(self.eggnog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn full_draft(service_level: ServiceLevel, slider: &str, eggnog: bool) -> RatingDraft {
        RatingDraft {
            service_level: Some(service_level),
            service: Some(dec(slider)),
            ski_haserl: Some(dec(slider)),
            food: Some(dec(slider)),
            sun_terrace: Some(dec(slider)),
            interior: Some(dec(slider)),
            apres_ski: Some(dec(slider)),
            eggnog: Some(eggnog),
        }
    }

    #[test]
    fn test_minimum_total_score() {
        let draft = full_draft(ServiceLevel::SelfServiceOnly, "0", false);
        assert_eq!(draft.total_score(), Decimal::from(-20));
    }

    #[test]
    fn test_maximum_total_score() {
        let draft = full_draft(ServiceLevel::FullService, "5", true);
        assert_eq!(draft.total_score(), Decimal::from(35));
    }

    #[test]
    fn test_empty_draft_scores_zero() {
        assert_eq!(RatingDraft::default().total_score(), Decimal::ZERO);
    }

    #[test]
    fn test_missing_fields_count_as_zero() {
        let draft = RatingDraft {
            service_level: Some(ServiceLevel::PartialService),
            food: Some(dec("4.5")),
            ..RatingDraft::default()
        };
        assert_eq!(draft.total_score(), dec("-5.5"));
    }

    #[test]
    fn test_eggnog_adds_exactly_five() {
        let without = full_draft(ServiceLevel::PartialService, "3.5", false);
        let with = RatingDraft {
            eggnog: Some(true),
            ..without.clone()
        };
        assert_eq!(
            with.total_score() - without.total_score(),
            Decimal::from(EGGNOG_BONUS)
        );
    }

    #[test]
    fn test_total_keeps_half_steps() {
        let draft = RatingDraft {
            service_level: Some(ServiceLevel::FullService),
            service: Some(dec("3.5")),
            food: Some(dec("4")),
            ..RatingDraft::default()
        };
        assert_eq!(draft.total_score(), dec("7.5"));
    }

    #[test]
    fn test_service_level_scores() {
        assert_eq!(ServiceLevel::SelfServiceOnly.score(), Decimal::from(-20));
        assert_eq!(ServiceLevel::PartialService.score(), Decimal::from(-10));
        assert_eq!(ServiceLevel::FullService.score(), Decimal::ZERO);
    }

    #[test]
    fn test_service_level_labels_distinct() {
        let labels = [
            ServiceLevel::SelfServiceOnly.label(),
            ServiceLevel::PartialService.label(),
            ServiceLevel::FullService.label(),
        ];
        assert_eq!(labels[0], "Self-service only");
        assert_ne!(labels[0], labels[1]);
        assert_ne!(labels[1], labels[2]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn test_service_level_from_score() {
        assert_eq!(
            ServiceLevel::try_from(-20),
            Ok(ServiceLevel::SelfServiceOnly)
        );
        assert_eq!(ServiceLevel::try_from(-10), Ok(ServiceLevel::PartialService));
        assert_eq!(ServiceLevel::try_from(0), Ok(ServiceLevel::FullService));
        for invalid in [-30, -15, -5, 5, 10] {
            assert_eq!(
                ServiceLevel::try_from(invalid),
                Err(InvalidServiceLevel(invalid))
            );
        }
    }

    #[test]
    fn test_service_level_serializes_as_legacy_score() {
        assert_eq!(
            serde_json::to_string(&ServiceLevel::SelfServiceOnly).unwrap(),
            "-20"
        );
        assert_eq!(
            serde_json::from_str::<ServiceLevel>("-10").unwrap(),
            ServiceLevel::PartialService
        );
        assert!(serde_json::from_str::<ServiceLevel>("-15").is_err());
    }

    #[test]
    fn test_stored_rating_round_trips_through_draft() {
        let rating = HutRating {
            id: Uuid::new_v4(),
            restaurant_id: Uuid::new_v4(),
            device_id: DeviceId::generate(),
            service_level: ServiceLevel::FullService,
            service: Some(dec("4.5")),
            ski_haserl: None,
            food: Some(dec("5")),
            sun_terrace: Some(dec("3")),
            interior: None,
            apres_ski: Some(dec("4")),
            eggnog: true,
            total_score: dec("21.5"),
            comment: Some("Great Kaiserschmarrn".to_string()),
            created_at: Utc::now(),
        };
        assert_eq!(rating.as_draft().total_score(), rating.total_score);
    }
}
