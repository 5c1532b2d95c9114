//! Validation utilities for the Ski Hut Rating app
//!
//! The score calculation in [`crate::models::RatingDraft::total_score`]
//! trusts its input and sums whatever it is given; the rating form must
//! validate values here before submitting them.

use rust_decimal::Decimal;

use crate::models::{RatingDraft, ServiceLevel};

/// Check that a slider value is in [0, 5] and a multiple of 0.5
///
/// Slider categories step by half points; values like 0.1 or 1.2 are
/// rejected. Decimal arithmetic keeps the half-step check exact.
pub fn is_valid_slider_value(value: Decimal) -> bool {
    if value < Decimal::ZERO || value > Decimal::from(5) {
        return false;
    }
    (value * Decimal::TWO).fract().is_zero()
}

/// Check that a numeric service level score is one of {-20, -10, 0}
pub fn is_valid_self_service(value: i32) -> bool {
    ServiceLevel::try_from(value).is_ok()
}

/// Validate every slider value present on a draft
///
/// Absent fields are fine (the form may still be in progress); present
/// fields must be valid slider values. The service level needs no check
/// here since [`ServiceLevel`] cannot hold an invalid score.
pub fn validate_rating_draft(draft: &RatingDraft) -> Result<(), &'static str> {
    let sliders = [
        draft.service,
        draft.ski_haserl,
        draft.food,
        draft.sun_terrace,
        draft.interior,
        draft.apres_ski,
    ];
    for value in sliders.into_iter().flatten() {
        if !is_valid_slider_value(value) {
            return Err("Slider values must be between 0 and 5 in steps of 0.5");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_valid_slider_values() {
        for valid in [
            "0", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "4.5", "5",
        ] {
            assert!(is_valid_slider_value(dec(valid)), "{valid}");
        }
    }

    #[test]
    fn test_invalid_slider_values() {
        for invalid in [
            "-1", "-0.5", "5.5", "6", "0.1", "0.3", "0.7", "1.2", "2.3", "3.7", "4.9",
        ] {
            assert!(!is_valid_slider_value(dec(invalid)), "{invalid}");
        }
    }

    #[test]
    fn test_valid_self_service_scores() {
        for valid in [-20, -10, 0] {
            assert!(is_valid_self_service(valid));
        }
        for invalid in [-30, -15, -5, 5, 10] {
            assert!(!is_valid_self_service(invalid));
        }
    }

    #[test]
    fn test_validate_draft_accepts_partial_input() {
        let draft = RatingDraft {
            food: Some(dec("4.5")),
            ..RatingDraft::default()
        };
        assert!(validate_rating_draft(&draft).is_ok());
        assert!(validate_rating_draft(&RatingDraft::default()).is_ok());
    }

    #[test]
    fn test_validate_draft_rejects_off_step_slider() {
        let draft = RatingDraft {
            service: Some(dec("4")),
            apres_ski: Some(dec("1.2")),
            ..RatingDraft::default()
        };
        assert!(validate_rating_draft(&draft).is_err());
    }

    #[test]
    fn test_validate_draft_rejects_out_of_range_slider() {
        let draft = RatingDraft {
            sun_terrace: Some(dec("5.5")),
            ..RatingDraft::default()
        };
        assert!(validate_rating_draft(&draft).is_err());
    }
}
