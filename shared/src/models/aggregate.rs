//! Aggregated rating statistics for a restaurant

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{select_badges, RatingCategory, RatingDraft, ScoreBand};

/// Aggregated statistics for one restaurant
///
/// Computed by the backend's materialized view over all ratings of the
/// restaurant; the engine consumes it read-only and does not re-validate
/// the averages. `Default` is the empty aggregate of an unrated restaurant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RestaurantAggregate {
    pub rating_count: u32,
    pub avg_service: Decimal,
    pub avg_ski_haserl: Decimal,
    pub avg_food: Decimal,
    pub avg_sun_terrace: Decimal,
    pub avg_interior: Decimal,
    pub avg_apres_ski: Decimal,
    /// Share of ratings reporting eggnog, in [0, 1]
    pub eggnog_percentage: Decimal,
    pub total_score_average: Decimal,
}

impl RestaurantAggregate {
    /// The aggregate a single rating would produce
    ///
    /// Used for score previews before the first backend round trip, and to
    /// pin the app-side total score formula to the backend's aggregation.
    pub fn from_single_rating(draft: &RatingDraft) -> Self {
        let slider = |value: Option<Decimal>| value.unwrap_or(Decimal::ZERO);
        Self {
            rating_count: 1,
            avg_service: slider(draft.service),
            avg_ski_haserl: slider(draft.ski_haserl),
            avg_food: slider(draft.food),
            avg_sun_terrace: slider(draft.sun_terrace),
            avg_interior: slider(draft.interior),
            avg_apres_ski: slider(draft.apres_ski),
            eggnog_percentage: if draft.eggnog.unwrap_or(false) {
                Decimal::ONE
            } else {
                Decimal::ZERO
            },
            total_score_average: draft.total_score(),
        }
    }

    /// Average for one badge category
    pub fn average_for(&self, category: RatingCategory) -> Decimal {
        match category {
            RatingCategory::Service => self.avg_service,
            RatingCategory::SkiHaserl => self.avg_ski_haserl,
            RatingCategory::Food => self.avg_food,
            RatingCategory::SunTerrace => self.avg_sun_terrace,
            RatingCategory::Interior => self.avg_interior,
            RatingCategory::ApresSki => self.avg_apres_ski,
        }
    }

    /// Display band for the average total score
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::classify(self.total_score_average, Some(self.rating_count))
    }

    /// Badges to display for this restaurant
    pub fn badges(&self) -> Vec<&'static str> {
        select_badges(self)
    }
}
