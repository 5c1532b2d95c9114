//! Ski area and restaurant models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::RestaurantAggregate;
use crate::types::GpsCoordinates;

/// A ski area containing hut restaurants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkiArea {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub region: Option<String>,
    /// Number of devices that favorited this area
    pub favorite_count: u32,
    pub created_at: DateTime<Utc>,
}

/// A hut restaurant within a ski area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub ski_area_id: Uuid,
    pub name: String,
    pub altitude_meters: Option<i32>,
    pub coordinates: Option<GpsCoordinates>,
    pub aggregate: RestaurantAggregate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A rating comment as shown in the restaurant detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingComment {
    pub rating_id: Uuid,
    pub text: String,
    /// Helpful votes, aggregated by the backend
    pub helpful_count: u32,
    pub created_at: DateTime<Utc>,
}

/// A photo attached to a rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingPhoto {
    pub id: Uuid,
    pub rating_id: Uuid,
    pub url: String,
    /// Likes, aggregated by the backend
    pub like_count: u32,
}
