//! The closed set of post categories.
//!
//! The same list drives generation sampling and the category dropdowns of
//! the presentation layer, so it must stay in lockstep with the
//! [`PostItem`](crate::PostItem) variants.

use crate::organization::OrganizationPool;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A post category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Toys")]
    Toys,
    #[serde(rename = "Clothes")]
    Clothes,
    #[serde(rename = "Medical Supplies")]
    MedicalSupplies,
    #[serde(rename = "Blood Donations")]
    BloodDonations,
    #[serde(rename = "Food")]
    Food,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Toys,
        Category::Clothes,
        Category::MedicalSupplies,
        Category::BloodDonations,
        Category::Food,
    ];

    /// Display name, as shown in dropdowns and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Toys => "Toys",
            Category::Clothes => "Clothes",
            Category::MedicalSupplies => "Medical Supplies",
            Category::BloodDonations => "Blood Donations",
            Category::Food => "Food",
        }
    }

    /// The organization pool posts of this category are drawn from.
    ///
    /// Blood donation and medical supply requests always come from hospitals.
    pub fn organization_pool(&self) -> OrganizationPool {
        match self {
            Category::MedicalSupplies | Category::BloodDonations => OrganizationPool::Hospitals,
            Category::Toys | Category::Clothes | Category::Food => OrganizationPool::General,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
