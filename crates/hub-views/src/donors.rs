//! Donor listings: every donation paired with the post it was made to.

use crate::error::ViewError;
use hub_core::{Donation, DonationId, Post, PostId};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Which donors to list.
///
/// Parsed from the route segment of the donors screen: a post id, or one of
/// the `fulfilled` / `unfulfilled` status keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonorSelector {
    All,
    Post(PostId),
    Fulfilled,
    Unfulfilled,
}

impl DonorSelector {
    /// Parse an optional route segment; no segment selects every donor.
    pub fn parse(segment: Option<&str>) -> Result<Self, ViewError> {
        match segment {
            None => Ok(DonorSelector::All),
            Some(segment) => segment.parse(),
        }
    }

    /// Whether donors of `post` belong to this selection.
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            DonorSelector::All => true,
            DonorSelector::Post(id) => post.id == *id,
            DonorSelector::Fulfilled => post.is_fulfilled(),
            DonorSelector::Unfulfilled => !post.is_fulfilled(),
        }
    }
}

impl FromStr for DonorSelector {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fulfilled" => Ok(DonorSelector::Fulfilled),
            "unfulfilled" => Ok(DonorSelector::Unfulfilled),
            other => {
                let number = other
                    .parse::<i64>()
                    .map_err(|_| ViewError::InvalidPostId(other.to_string()))?;
                u32::try_from(number)
                    .map(|id| DonorSelector::Post(PostId(id)))
                    .map_err(|_| ViewError::PostOutOfRange(number))
            }
        }
    }
}

impl fmt::Display for DonorSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DonorSelector::All => f.write_str("all"),
            DonorSelector::Post(id) => write!(f, "{id}"),
            DonorSelector::Fulfilled => f.write_str("fulfilled"),
            DonorSelector::Unfulfilled => f.write_str("unfulfilled"),
        }
    }
}

/// A donation together with the post it was made to.
#[derive(Debug, Clone, Copy)]
pub struct DonorEntry<'a> {
    pub donation: &'a Donation,
    pub post: &'a Post,
}

/// Compact, serializable row for a donor listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonorRow {
    pub donation_id: DonationId,
    pub donor_name: String,
    pub post_id: PostId,
    pub post_title: String,
    pub post_status: &'static str,
}

impl DonorEntry<'_> {
    pub fn status_label(&self) -> &'static str {
        if self.post.is_fulfilled() {
            "Fulfilled"
        } else {
            "Not Fulfilled"
        }
    }

    pub fn row(&self) -> DonorRow {
        DonorRow {
            donation_id: self.donation.id,
            donor_name: self.donation.donor.full_name(),
            post_id: self.post.id,
            post_title: self.post.title.clone(),
            post_status: self.status_label(),
        }
    }
}

/// A working copy of a donor listing.
///
/// Removing an entry only drops it from this list; the batch itself is never
/// modified. Only donors of fulfilled posts can be removed.
#[derive(Debug, Clone, Default)]
pub struct DonorList<'a> {
    entries: Vec<DonorEntry<'a>>,
}

impl<'a> DonorList<'a> {
    pub fn new(entries: Vec<DonorEntry<'a>>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DonorEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Result<DonorEntry<'a>, ViewError> {
        let entry = self
            .entries
            .get(index)
            .ok_or(ViewError::EntryNotFound(index))?;
        if !entry.post.is_fulfilled() {
            return Err(ViewError::NotRemovable(entry.post.id));
        }

        let entry = self.entries.remove(index);
        info!(
            "Removed donation {} from donor list of post {}",
            entry.donation.id, entry.post.id
        );
        Ok(entry)
    }
}
