//! Category-specific item payloads carried by posts.
//!
//! [`PostItem`] holds exactly one payload and its variant determines the
//! post's [`Category`], so a post can never carry a payload of another
//! category.

use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Toys requested by an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToyItem {
    pub category: String,
    pub age_range: String,
    pub toy_gender: String,
    pub quantity: u32,
    pub toy_type: String,
}

/// Clothing requested by an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothItem {
    #[serde(rename = "type")]
    pub cloth_type: String,
    pub material: String,
    pub season: String,
    pub gender: String,
    pub age_range: String,
    pub quantity: u32,
}

/// The kind of medical supply, each with its own type attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum MedicalSupply {
    #[serde(rename = "Medical Devices")]
    Device { device_type: String },
    #[serde(rename = "Medical Equipment")]
    Equipment { equipment_type: String },
    #[serde(rename = "Medication")]
    Medication { medication_type: String },
}

impl MedicalSupply {
    /// Display name of the supply kind.
    pub fn category_name(&self) -> &'static str {
        match self {
            MedicalSupply::Device { .. } => "Medical Devices",
            MedicalSupply::Equipment { .. } => "Medical Equipment",
            MedicalSupply::Medication { .. } => "Medication",
        }
    }
}

impl fmt::Display for MedicalSupply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MedicalSupply::Device { device_type } => write!(f, "Device Type: {device_type}"),
            MedicalSupply::Equipment { equipment_type } => {
                write!(f, "Equipment Type: {equipment_type}")
            }
            MedicalSupply::Medication { medication_type } => {
                write!(f, "Medication Type: {medication_type}")
            }
        }
    }
}

/// Medical supplies requested by a hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalSuppliesItem {
    #[serde(flatten)]
    pub supply: MedicalSupply,
    #[serde(rename = "use")]
    pub usage: String,
}

/// A blood donation request for an admitted patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodDonationItem {
    pub patient_name: String,
    #[serde(rename = "type")]
    pub blood_type: String,
    pub hospital: String,
    pub area: String,
    pub governorate: String,
}

/// How a food request is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodAmount {
    /// Weight in kilograms.
    Weight(u32),
    /// Number of units.
    Quantity(u32),
}

impl fmt::Display for FoodAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodAmount::Weight(kg) => write!(f, "Weight: {kg} Kg"),
            FoodAmount::Quantity(n) => write!(f, "Quantity: {n}"),
        }
    }
}

/// Food requested by an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub category: String,
    #[serde(flatten)]
    pub amount: FoodAmount,
}

/// The item payload of a post, one variant per [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "item")]
pub enum PostItem {
    #[serde(rename = "Toys")]
    Toys(ToyItem),
    #[serde(rename = "Clothes")]
    Clothes(ClothItem),
    #[serde(rename = "Medical Supplies")]
    MedicalSupplies(MedicalSuppliesItem),
    #[serde(rename = "Blood Donations")]
    BloodDonation(BloodDonationItem),
    #[serde(rename = "Food")]
    Food(FoodItem),
}

impl PostItem {
    /// The category this payload belongs to.
    pub fn category(&self) -> Category {
        match self {
            PostItem::Toys(_) => Category::Toys,
            PostItem::Clothes(_) => Category::Clothes,
            PostItem::MedicalSupplies(_) => Category::MedicalSupplies,
            PostItem::BloodDonation(_) => Category::BloodDonations,
            PostItem::Food(_) => Category::Food,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medical_supply_description() {
        let device = MedicalSupply::Device {
            device_type: "Thermometer".to_string(),
        };
        assert_eq!(device.to_string(), "Device Type: Thermometer");
        assert_eq!(device.category_name(), "Medical Devices");

        let medication = MedicalSupply::Medication {
            medication_type: "Antibiotics".to_string(),
        };
        assert_eq!(medication.to_string(), "Medication Type: Antibiotics");
    }

    #[test]
    fn test_food_amount_description() {
        assert_eq!(FoodAmount::Weight(12).to_string(), "Weight: 12 Kg");
        assert_eq!(FoodAmount::Quantity(3).to_string(), "Quantity: 3");
    }

    #[test]
    fn test_post_item_serializes_with_category_tag() {
        let item = PostItem::Food(FoodItem {
            category: "Rice".to_string(),
            amount: FoodAmount::Weight(10),
        });
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["category"], "Food");
        assert_eq!(json["item"]["category"], "Rice");
        assert_eq!(json["item"]["weight"], 10);
        assert_eq!(item.category(), Category::Food);
    }

    #[test]
    fn test_medical_item_serialization() {
        let item = MedicalSuppliesItem {
            supply: MedicalSupply::Equipment {
                equipment_type: "Wheelchair".to_string(),
            },
            usage: "Use: Patient mobility".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["category"], "Medical Equipment");
        assert_eq!(json["equipment_type"], "Wheelchair");
        assert_eq!(json["use"], "Use: Patient mobility");
    }
}
