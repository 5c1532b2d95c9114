//! Domain models for the Ski Hut Rating app

mod aggregate;
mod badges;
mod rating;
mod restaurant;
mod score_band;

pub use aggregate::*;
pub use badges::*;
pub use rating::*;
pub use restaurant::*;
pub use score_band::*;
