//! Scoreboard team settings

pub mod visibilities;
pub mod visibility;

pub use visibility::Visibility;
