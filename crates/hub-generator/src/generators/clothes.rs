//! Clothing item generator.

use super::pick;
use hub_core::ClothItem;
use rand::Rng;

pub const CLOTH_TYPES: &[&str] = &["T-Shirt", "Sweater", "Jeans", "Dress", "Jacket", "Pants"];

pub const CLOTH_MATERIALS: &[&str] = &["Cotton", "Wool", "Denim", "Polyester", "Linen"];

pub const CLOTH_SEASONS: &[&str] = &["Summer", "Winter", "Spring", "Autumn"];

pub const CLOTH_GENDERS: &[&str] = &["Male", "Female", "Unisex"];

pub const CLOTH_AGE_RANGES: &[&str] = &["Infant", "Child", "Teen", "Adult", "Senior"];

pub const CLOTH_QUANTITY_MIN: u32 = 1;
pub const CLOTH_QUANTITY_MAX: u32 = 50;

/// Generate a random clothing request.
pub fn generate_cloth_item<R: Rng + ?Sized>(rng: &mut R) -> ClothItem {
    ClothItem {
        cloth_type: pick(rng, CLOTH_TYPES).to_string(),
        material: pick(rng, CLOTH_MATERIALS).to_string(),
        season: pick(rng, CLOTH_SEASONS).to_string(),
        gender: pick(rng, CLOTH_GENDERS).to_string(),
        age_range: pick(rng, CLOTH_AGE_RANGES).to_string(),
        quantity: rng.random_range(CLOTH_QUANTITY_MIN..=CLOTH_QUANTITY_MAX),
    }
}
