//! Toy item generator.

use super::pick;
use hub_core::ToyItem;
use rand::Rng;

pub const TOY_CATEGORIES: &[&str] = &[
    "Board Games",
    "Stuffed Toys",
    "Dolls",
    "Sports",
    "Cars",
    "Outdoor",
];

pub const TOY_AGE_RANGES: &[&str] = &["0-2", "3-5", "6-9", "10-12", "13+"];

pub const TOY_GENDERS: &[&str] = &["Boys", "Girls", "Unisex"];

pub const TOY_TYPES: &[&str] = &[
    "Teddy Bear",
    "Doll",
    "Toy Car",
    "Building Blocks",
    "Puzzle",
    "Ball",
];

pub const TOY_QUANTITY_MIN: u32 = 1;
pub const TOY_QUANTITY_MAX: u32 = 50;

/// Generate a random toy request.
pub fn generate_toy_item<R: Rng + ?Sized>(rng: &mut R) -> ToyItem {
    ToyItem {
        category: pick(rng, TOY_CATEGORIES).to_string(),
        age_range: pick(rng, TOY_AGE_RANGES).to_string(),
        toy_gender: pick(rng, TOY_GENDERS).to_string(),
        quantity: rng.random_range(TOY_QUANTITY_MIN..=TOY_QUANTITY_MAX),
        toy_type: pick(rng, TOY_TYPES).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_toy_attributes_in_declared_sets() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let item = generate_toy_item(&mut rng);
            assert!(TOY_CATEGORIES.contains(&item.category.as_str()));
            assert!(TOY_AGE_RANGES.contains(&item.age_range.as_str()));
            assert!(TOY_GENDERS.contains(&item.toy_gender.as_str()));
            assert!(TOY_TYPES.contains(&item.toy_type.as_str()));
            assert!((TOY_QUANTITY_MIN..=TOY_QUANTITY_MAX).contains(&item.quantity));
        }
    }
}
