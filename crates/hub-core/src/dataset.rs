//! The generated batch: organizations, posts and donations.

use crate::donation::{Donation, DonationId};
use crate::organization::{Organization, OrganizationDirectory, OrganizationId};
use crate::post::{Post, PostId};

/// One generation batch.
///
/// Posts and donations reference each other by id only: a post lists the ids
/// of its donations and each donation names its post. The batch is read-only
/// once built.
#[derive(Debug, Clone)]
pub struct Dataset {
    directory: OrganizationDirectory,
    posts: Vec<Post>,
    donations: Vec<Donation>,
}

impl Dataset {
    pub fn new(
        directory: OrganizationDirectory,
        posts: Vec<Post>,
        donations: Vec<Donation>,
    ) -> Self {
        Self {
            directory,
            posts,
            donations,
        }
    }

    pub fn directory(&self) -> &OrganizationDirectory {
        &self.directory
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn donations(&self) -> &[Donation] {
        &self.donations
    }

    /// Look up a post by id.
    pub fn post(&self, id: PostId) -> Option<&Post> {
        // Ids are sequential from 1, so try the direct slot before scanning.
        let slot = (id.0 as usize).checked_sub(1)?;
        match self.posts.get(slot) {
            Some(post) if post.id == id => Some(post),
            _ => self.posts.iter().find(|post| post.id == id),
        }
    }

    /// Look up a donation by id.
    pub fn donation(&self, id: DonationId) -> Option<&Donation> {
        let slot = (id.0 as usize).checked_sub(1)?;
        match self.donations.get(slot) {
            Some(donation) if donation.id == id => Some(donation),
            _ => self.donations.iter().find(|donation| donation.id == id),
        }
    }

    pub fn organization(&self, id: OrganizationId) -> Option<&Organization> {
        self.directory.get(id)
    }

    /// The organization that owns the given post.
    pub fn organization_of(&self, post: &Post) -> Option<&Organization> {
        self.directory.get(post.organization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{FoodAmount, FoodItem, PostItem};

    fn dataset_with_posts(ids: &[u32]) -> Dataset {
        let directory = OrganizationDirectory::new(
            vec![Organization::new("Shelter", "Charity", "1 St", "Maadi", "Cairo")],
            vec![],
        );
        let posts = ids
            .iter()
            .map(|id| {
                Post::new(
                    PostId(*id),
                    OrganizationId(0),
                    format!("Post {id}"),
                    String::new(),
                    PostItem::Food(FoodItem {
                        category: "Rice".to_string(),
                        amount: FoodAmount::Weight(1),
                    }),
                )
            })
            .collect();
        Dataset::new(directory, posts, Vec::new())
    }

    #[test]
    fn test_post_lookup_sequential() {
        let dataset = dataset_with_posts(&[1, 2, 3]);
        assert_eq!(dataset.post(PostId(2)).unwrap().title, "Post 2");
        assert!(dataset.post(PostId(0)).is_none());
        assert!(dataset.post(PostId(4)).is_none());
    }

    #[test]
    fn test_post_lookup_falls_back_to_scan() {
        let dataset = dataset_with_posts(&[10, 20]);
        assert_eq!(dataset.post(PostId(20)).unwrap().title, "Post 20");
        assert!(dataset.post(PostId(1)).is_none());
    }

    #[test]
    fn test_organization_of_post() {
        let dataset = dataset_with_posts(&[1]);
        let post = dataset.post(PostId(1)).unwrap();
        assert_eq!(dataset.organization_of(post).unwrap().name, "Shelter");
    }
}
