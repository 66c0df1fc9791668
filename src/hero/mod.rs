//! Hero domain types, height normalization, and tallest-hero search.

mod height;
mod search;
mod types;

pub use self::height::{height_to_cm, HeightError};
pub use self::search::{is_employed, tallest};
pub use self::types::{Appearance, Hero, HeroQuery, Work};
