//! Derived views over a generated donation-hub batch.
//!
//! [`DataContext`] owns one [`Dataset`](hub_core::Dataset) and is the single
//! entry point for lookups. It is built once after generation and passed to
//! whatever needs it; nothing here is global.
//!
//! # Example
//!
//! ```rust
//! use hub_core::HubConfig;
//! use hub_generator::DataGenerator;
//! use hub_views::{DataContext, DonorSelector};
//!
//! let dataset = DataGenerator::new(HubConfig::default()).generate().unwrap();
//! let ctx = DataContext::new(dataset).unwrap();
//!
//! let own_posts = ctx.posts_for_default_organization();
//! let fulfilled = ctx.donors(DonorSelector::Fulfilled).unwrap();
//! assert!(fulfilled.iter().all(|entry| entry.post.is_fulfilled()));
//! # let _ = own_posts;
//! ```

pub mod catalog;
pub mod context;
pub mod donors;
pub mod error;
pub mod submissions;

pub use catalog::{requested_items, SEARCH_CATEGORIES};
pub use context::{DataContext, Summary};
pub use donors::{DonorEntry, DonorList, DonorRow, DonorSelector};
pub use error::ViewError;
pub use submissions::{Decision, OrganizationSubmission, ReviewedSubmission, SubmissionQueue};
