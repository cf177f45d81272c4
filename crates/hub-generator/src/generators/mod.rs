//! Item generators for each post category.
//!
//! Every generator samples each attribute independently and uniformly from
//! a fixed table. The tables are public so callers can check that a value
//! came from the declared set.

pub mod blood;
pub mod clothes;
pub mod food;
pub mod medical;
pub mod organizations;
pub mod person;
pub mod toys;

use hub_core::{Category, Organization, PostItem};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick one entry of a fixed, non-empty table.
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, values: &[&'static str]) -> &'static str {
    values
        .choose(rng)
        .copied()
        .expect("value tables are non-empty")
}

/// Generate the item payload for a post of the given category.
///
/// Blood donation items record the admitting hospital, so the post's
/// organization is passed through.
pub fn generate_item<R: Rng + ?Sized>(
    category: Category,
    organization: &Organization,
    rng: &mut R,
) -> PostItem {
    match category {
        Category::Toys => PostItem::Toys(toys::generate_toy_item(rng)),
        Category::Clothes => PostItem::Clothes(clothes::generate_cloth_item(rng)),
        Category::MedicalSupplies => {
            PostItem::MedicalSupplies(medical::generate_medical_supplies_item(rng))
        }
        Category::BloodDonations => {
            PostItem::BloodDonation(blood::generate_blood_donation_item(organization, rng))
        }
        Category::Food => PostItem::Food(food::generate_food_item(rng)),
    }
}
