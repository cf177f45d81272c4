//! Core types for the donation-hub framework.
//!
//! This crate provides the foundational domain types shared by the
//! generator, the derived views and the exporters:
//!
//! - [`Organization`] and [`OrganizationDirectory`] - the two organization pools
//! - [`Category`] - closed list of post categories
//! - [`PostItem`] - category-specific item payload (one variant per category)
//! - [`Post`] and [`Donation`] - the generated batch entities
//! - [`HubConfig`] - generation settings loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! hub-core (this crate)
//!    │
//!    ├─── hub-generator     (produces a Dataset from a HubConfig)
//!    │
//!    ├─── hub-views         (DataContext and derived views over a Dataset)
//!    │
//!    └─── hub-export-jsonl  (writes a Dataset as JSON Lines)
//! ```
//!
//! # Example
//!
//! ```rust
//! use hub_core::{Category, OrganizationPool};
//!
//! assert_eq!(Category::ALL.len(), 5);
//! assert_eq!(Category::BloodDonations.organization_pool(), OrganizationPool::Hospitals);
//! assert_eq!("medical supplies".parse::<Category>().unwrap(), Category::MedicalSupplies);
//! ```

pub mod category;
pub mod config;
pub mod dataset;
pub mod donation;
pub mod items;
pub mod organization;
pub mod person;
pub mod post;

// Re-exports for convenience
pub use category::{Category, ParseCategoryError};
pub use config::{ConfigError, HubConfig, OrganizationPools};
pub use dataset::Dataset;
pub use donation::{Donation, DonationId, DROPPED_DATE, FALLBACK_DROP_DATE};
pub use items::{
    BloodDonationItem, ClothItem, FoodAmount, FoodItem, MedicalSuppliesItem, MedicalSupply,
    PostItem, ToyItem,
};
pub use organization::{
    Organization, OrganizationDirectory, OrganizationEntry, OrganizationId, OrganizationPool,
};
pub use person::Person;
pub use post::{Post, PostId};
