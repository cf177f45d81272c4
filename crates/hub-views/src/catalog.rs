//! Requested-item catalog used by the donor search screen.

use crate::error::ViewError;

const FOOD: &[&str] = &["Rice", "Canned Beans", "Cereal", "Pasta"];
const TOYS: &[&str] = &["Teddy Bear", "Doll", "Toy Car", "Building Blocks"];
const CLOTHES: &[&str] = &["T-Shirt", "Sweater", "Jeans", "Dress"];
const MEDICAL_SUPPLIES: &[&str] = &["Bandages", "Gauze", "Antiseptic"];
const SCHOOL_SUPPLIES: &[&str] = &[
    "Pencils",
    "Notebooks",
    "Glue",
    "Scissors",
    "Backpacks",
    "Pens",
];
const BLOOD_DONATIONS: &[&str] = &["Blood Bag", "Plasma", "Platelets"];

/// Search keys accepted by [`requested_items`], in dropdown order.
pub const SEARCH_CATEGORIES: &[&str] = &[
    "all categories",
    "food",
    "toys",
    "clothes",
    "medical supplies",
    "school supplies",
    "blood donations",
];

/// Items requested under a search category (case-insensitive).
///
/// `all categories` returns every list concatenated in dropdown order.
pub fn requested_items(search: &str) -> Result<Vec<&'static str>, ViewError> {
    let key = search.trim().to_lowercase();
    let items = match key.as_str() {
        "all categories" => [
            FOOD,
            TOYS,
            CLOTHES,
            MEDICAL_SUPPLIES,
            SCHOOL_SUPPLIES,
            BLOOD_DONATIONS,
        ]
        .concat(),
        "food" => FOOD.to_vec(),
        "toys" => TOYS.to_vec(),
        "clothes" => CLOTHES.to_vec(),
        "medical supplies" => MEDICAL_SUPPLIES.to_vec(),
        "school supplies" => SCHOOL_SUPPLIES.to_vec(),
        "blood donations" => BLOOD_DONATIONS.to_vec(),
        _ => return Err(ViewError::UnknownSearchCategory(search.to_string())),
    };
    Ok(items)
}
