//! WebAssembly module for the Ski Hut Rating app
//!
//! Provides client-side computation for:
//! - Total score calculation on the rating form (live preview)
//! - Score band classification and display colors
//! - Badge selection from aggregated statistics
//! - Offline input validation

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Lossy conversion for scores coming from JavaScript numbers
fn score_to_decimal(score: f64) -> Decimal {
    if score.is_nan() {
        return Decimal::ZERO;
    }
    if score == f64::INFINITY {
        return Decimal::MAX;
    }
    if score == f64::NEG_INFINITY {
        return Decimal::MIN;
    }
    Decimal::try_from(score).unwrap_or(Decimal::ZERO)
}

/// Calculate the total score of a (possibly partial) rating
#[wasm_bindgen]
pub fn compute_total_score(rating_json: &str) -> Result<f64, JsValue> {
    let draft: RatingDraft = serde_json::from_str(rating_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid rating JSON: {}", e)))?;

    let total = draft.total_score();
    Ok(total.to_string().parse().unwrap_or(0.0))
}

/// Classify a score into its display band name
#[wasm_bindgen]
pub fn classify_score(score: f64, rating_count: u32) -> String {
    let band = ScoreBand::classify(score_to_decimal(score), Some(rating_count));
    format!("{}", band)
}

/// Fill color for a score
#[wasm_bindgen]
pub fn score_fill_color(score: f64, rating_count: u32) -> String {
    ScoreBand::classify(score_to_decimal(score), Some(rating_count))
        .fill_color()
        .to_string()
}

/// Background color for a score
#[wasm_bindgen]
pub fn score_background_color(score: f64, rating_count: u32) -> String {
    ScoreBand::classify(score_to_decimal(score), Some(rating_count))
        .background_color()
        .to_string()
}

/// Text color for a score
#[wasm_bindgen]
pub fn score_text_color(score: f64, rating_count: u32) -> String {
    ScoreBand::classify(score_to_decimal(score), Some(rating_count))
        .text_color()
        .to_string()
}

/// Border color for a score
#[wasm_bindgen]
pub fn score_border_color(score: f64, rating_count: u32) -> String {
    ScoreBand::classify(score_to_decimal(score), Some(rating_count))
        .border_color()
        .to_string()
}

/// Select the badges for a restaurant's aggregated statistics
#[wasm_bindgen]
pub fn select_restaurant_badges(stats_json: &str) -> Result<Vec<String>, JsValue> {
    let stats: RestaurantAggregate = serde_json::from_str(stats_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid aggregate JSON: {}", e)))?;

    Ok(select_badges(&stats)
        .into_iter()
        .map(str::to_string)
        .collect())
}

/// Badge symbol for a single category name, or empty string if unknown
#[wasm_bindgen]
pub fn category_badge(category_json: &str) -> String {
    let Ok(category) = serde_json::from_str::<RatingCategory>(category_json) else {
        return String::new();
    };
    badge_for_category(category).unwrap_or("").to_string()
}

/// Validate a slider value (0-5, steps of 0.5)
#[wasm_bindgen]
pub fn validate_slider_value(value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    is_valid_slider_value(score_to_decimal(value))
}

/// Validate a numeric service level score
#[wasm_bindgen]
pub fn validate_self_service(value: i32) -> bool {
    is_valid_self_service(value)
}

/// Human-readable label for a numeric service level score
#[wasm_bindgen]
pub fn service_level_label(value: i32) -> Result<String, JsValue> {
    let level = ServiceLevel::try_from(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(level.label().to_string())
}
