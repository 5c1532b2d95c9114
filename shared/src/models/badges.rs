//! Emoji badge selection from aggregated category averages

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::RestaurantAggregate;

/// Maximum number of regular (threshold) badges shown per restaurant
pub const MAX_REGULAR_BADGES: usize = 3;

/// Bonus badge appended when at least half of the raters found eggnog
pub const EGGNOG_BADGE: &str = "🥃";

/// The six slider categories a badge can be awarded for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RatingCategory {
    Service,
    SkiHaserl,
    Food,
    SunTerrace,
    Interior,
    ApresSki,
}

/// One entry of the badge configuration table
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeConfig {
    pub category: RatingCategory,
    pub symbol: &'static str,
    /// Category average must be strictly greater than this to qualify
    pub threshold: Decimal,
    /// 1 = highest; decides which badges survive the cap
    pub priority: u8,
}

/// The badge configuration table, in priority order
///
/// Returns a fresh copy on every call; the master order is fixed and must
/// never be reordered, since [`select_badges`] walks it front to back.
pub fn badge_configs() -> [BadgeConfig; 6] {
    let threshold = Decimal::new(45, 1);
    [
        BadgeConfig {
            category: RatingCategory::ApresSki,
            symbol: "🎉",
            threshold,
            priority: 1,
        },
        BadgeConfig {
            category: RatingCategory::Food,
            symbol: "🍲",
            threshold,
            priority: 2,
        },
        BadgeConfig {
            category: RatingCategory::Service,
            symbol: "🤵",
            threshold,
            priority: 3,
        },
        BadgeConfig {
            category: RatingCategory::SunTerrace,
            symbol: "☀️",
            threshold,
            priority: 4,
        },
        BadgeConfig {
            category: RatingCategory::SkiHaserl,
            symbol: "🐇",
            threshold,
            priority: 5,
        },
        BadgeConfig {
            category: RatingCategory::Interior,
            symbol: "🛋️",
            threshold,
            priority: 6,
        },
    ]
}

/// Minimum share of raters reporting eggnog for the bonus badge
pub fn eggnog_badge_threshold() -> Decimal {
    Decimal::new(5, 1)
}

/// Select the badges to display for a restaurant
///
/// Walks the configuration table in priority order, keeps categories whose
/// average is strictly above their threshold, and caps the result at
/// [`MAX_REGULAR_BADGES`]. The eggnog bonus badge is appended last and does
/// not count against the cap.
pub fn select_badges(stats: &RestaurantAggregate) -> Vec<&'static str> {
    let mut badges: Vec<&'static str> = badge_configs()
        .iter()
        .filter(|config| stats.average_for(config.category) > config.threshold)
        .map(|config| config.symbol)
        .take(MAX_REGULAR_BADGES)
        .collect();

    if stats.eggnog_percentage >= eggnog_badge_threshold() {
        badges.push(EGGNOG_BADGE);
    }

    badges
}

/// Look up the configured badge symbol for a single category
pub fn badge_for_category(category: RatingCategory) -> Option<&'static str> {
    badge_configs()
        .iter()
        .find(|config| config.category == category)
        .map(|config| config.symbol)
}
