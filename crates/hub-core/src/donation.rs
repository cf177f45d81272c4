//! Donations pledged against posts.

use crate::person::Person;
use crate::post::PostId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drop date recorded for donations that were delivered.
pub const DROPPED_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 5, 2) {
    Some(date) => date,
    None => panic!("invalid drop date"),
};

/// Drop date scheduled for some donations that were not delivered yet.
pub const FALLBACK_DROP_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 7, 2) {
    Some(date) => date,
    None => panic!("invalid fallback drop date"),
};

/// Sequential donation id, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonationId(pub u32);

impl fmt::Display for DonationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A donor's pledge against exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    pub id: DonationId,
    pub post: PostId,
    #[serde(flatten)]
    pub donor: Person,
    pub address: String,
    pub area: String,
    pub governorate: String,
    pub is_dropped: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub drop_date: Option<NaiveDate>,
    pub details: String,
}
