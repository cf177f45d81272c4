//! Synthetic data generator for donation-hub.
//!
//! This crate provides the [`DataGenerator`] which produces one batch of
//! donation posts and donations. Generation uses a seeded RNG so the same
//! config always produces the same batch.
//!
//! # Architecture
//!
//! ```text
//! HubConfig (YAML)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │    DataGenerator     │
//! │                      │
//! │  1. posts            │  category → pool → organization → item → templates
//! │  2. donations        │  random post → person → drop status
//! └──────────┬───────────┘
//!            │
//!            ▼
//!    Dataset { directory, posts, donations }
//! ```
//!
//! # Example
//!
//! ```rust
//! use hub_core::HubConfig;
//! use hub_generator::DataGenerator;
//!
//! let config = HubConfig {
//!     post_count: 10,
//!     donation_count: 20,
//!     ..HubConfig::default()
//! };
//! let dataset = DataGenerator::new(config).generate().unwrap();
//! assert_eq!(dataset.posts().len(), 10);
//! assert_eq!(dataset.donations().len(), 20);
//! ```
//!
//! # Item generators
//!
//! One generator per category, see [`generators`]:
//!
//! - `toys` - category, age range, gender, quantity, toy type
//! - `clothes` - type, material, season, gender, age group, quantity
//! - `medical` - device, equipment or medication, plus intended use
//! - `blood` - patient name, blood type, admitting hospital
//! - `food` - category with weight or quantity

pub mod donation;
pub mod generator;
pub mod generators;
pub mod post;

// Re-exports for convenience
pub use donation::synthesize_donation;
pub use generator::{DataGenerator, GeneratorError};
pub use generators::organizations::builtin_directory;
pub use post::synthesize_post;
