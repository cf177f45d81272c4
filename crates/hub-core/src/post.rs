//! Donation request posts.

use crate::category::Category;
use crate::donation::DonationId;
use crate::items::PostItem;
use crate::organization::OrganizationId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential post id, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u32);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A donation request published by one organization.
///
/// The only state that changes after synthesis is the donation list and the
/// `fulfilled` flag, which can be raised but never lowered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub organization: OrganizationId,
    pub title: String,
    pub details: String,
    #[serde(flatten)]
    pub item: PostItem,
    fulfilled: bool,
    donations: Vec<DonationId>,
}

impl Post {
    /// Create an unfulfilled post with no donations.
    pub fn new(
        id: PostId,
        organization: OrganizationId,
        title: String,
        details: String,
        item: PostItem,
    ) -> Self {
        Self {
            id,
            organization,
            title,
            details,
            item,
            fulfilled: false,
            donations: Vec::new(),
        }
    }

    /// Category of the post, derived from its item payload.
    pub fn category(&self) -> Category {
        self.item.category()
    }

    pub fn is_fulfilled(&self) -> bool {
        self.fulfilled
    }

    /// Mark the post fulfilled. There is no way to undo this.
    pub fn mark_fulfilled(&mut self) {
        self.fulfilled = true;
    }

    /// Donations made against this post, in creation order.
    pub fn donations(&self) -> &[DonationId] {
        &self.donations
    }

    /// Record a donation against this post.
    pub fn push_donation(&mut self, donation: DonationId) {
        self.donations.push(donation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{FoodAmount, FoodItem};

    fn food_post() -> Post {
        Post::new(
            PostId(1),
            OrganizationId(0),
            "Food Needed".to_string(),
            "details".to_string(),
            PostItem::Food(FoodItem {
                category: "Rice".to_string(),
                amount: FoodAmount::Quantity(4),
            }),
        )
    }

    #[test]
    fn test_new_post_is_unfulfilled_and_empty() {
        let post = food_post();
        assert!(!post.is_fulfilled());
        assert!(post.donations().is_empty());
        assert_eq!(post.category(), Category::Food);
    }

    #[test]
    fn test_fulfilled_is_monotonic() {
        let mut post = food_post();
        post.mark_fulfilled();
        assert!(post.is_fulfilled());
        post.mark_fulfilled();
        assert!(post.is_fulfilled());
    }

    #[test]
    fn test_push_donation_keeps_order() {
        let mut post = food_post();
        post.push_donation(DonationId(7));
        post.push_donation(DonationId(3));
        assert_eq!(post.donations(), &[DonationId(7), DonationId(3)]);
    }

    #[test]
    fn test_serialized_post_shape() {
        let mut post = food_post();
        post.push_donation(DonationId(2));
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["organization"], 0);
        assert_eq!(json["category"], "Food");
        assert_eq!(json["item"]["quantity"], 4);
        assert_eq!(json["fulfilled"], false);
        assert_eq!(json["donations"], serde_json::json!([2]));
    }
}
