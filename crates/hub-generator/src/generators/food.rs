//! Food item generator.

use hub_core::{FoodAmount, FoodItem};
use rand::seq::IndexedRandom;
use rand::Rng;

/// How a food category is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodMeasure {
    Weight,
    Quantity,
}

pub const FOOD_CATEGORIES: &[(&str, FoodMeasure)] = &[
    ("Rice", FoodMeasure::Weight),
    ("Pasta", FoodMeasure::Weight),
    ("Flour", FoodMeasure::Weight),
    ("Sugar", FoodMeasure::Weight),
    ("Vegetables", FoodMeasure::Weight),
    ("Fruits", FoodMeasure::Weight),
    ("Canned Beans", FoodMeasure::Quantity),
    ("Cereal", FoodMeasure::Quantity),
    ("Cooking Oil", FoodMeasure::Quantity),
    ("Baked Goods", FoodMeasure::Quantity),
];

pub const FOOD_WEIGHT_MIN_KG: u32 = 1;
pub const FOOD_WEIGHT_MAX_KG: u32 = 50;
pub const FOOD_QUANTITY_MIN: u32 = 1;
pub const FOOD_QUANTITY_MAX: u32 = 100;

/// Generate a random food request, measured by weight or by unit count
/// depending on the category.
pub fn generate_food_item<R: Rng + ?Sized>(rng: &mut R) -> FoodItem {
    let (category, measure) = *FOOD_CATEGORIES.choose(rng).expect("non-empty food table");
    let amount = match measure {
        FoodMeasure::Weight => {
            FoodAmount::Weight(rng.random_range(FOOD_WEIGHT_MIN_KG..=FOOD_WEIGHT_MAX_KG))
        }
        FoodMeasure::Quantity => {
            FoodAmount::Quantity(rng.random_range(FOOD_QUANTITY_MIN..=FOOD_QUANTITY_MAX))
        }
    };

    FoodItem {
        category: category.to_string(),
        amount,
    }
}
