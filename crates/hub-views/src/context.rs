//! Explicit data context over one generated batch.

use crate::donors::{DonorEntry, DonorSelector};
use crate::error::ViewError;
use hub_core::{
    Category, Dataset, Donation, DonationId, HubConfig, Organization, OrganizationId, Post, PostId,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

/// Counts over the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub organizations: usize,
    pub posts: usize,
    pub fulfilled_posts: usize,
    pub unfulfilled_posts: usize,
    pub donations: usize,
    pub dropped_donations: usize,
    pub posts_by_category: BTreeMap<Category, usize>,
}

/// Read-only access to a batch plus the views the application reads.
///
/// The default organization's posts and donations are computed on first
/// access and cached for the lifetime of the context. Every other view is
/// recomputed on each call. The batch never changes after construction, so
/// the caches need no invalidation.
#[derive(Debug)]
pub struct DataContext {
    dataset: Dataset,
    default_organization: OrganizationId,
    default_posts: OnceLock<Vec<PostId>>,
    default_donations: OnceLock<Vec<DonationId>>,
}

impl DataContext {
    /// Build a context whose default organization is the first general one.
    pub fn new(dataset: Dataset) -> Result<Self, ViewError> {
        let default_organization = dataset
            .directory()
            .default_organization()
            .ok_or(ViewError::NoDefaultOrganization)?;
        Ok(Self::with_default(dataset, default_organization))
    }

    /// Build a context with the named default organization.
    pub fn with_default_organization(dataset: Dataset, name: &str) -> Result<Self, ViewError> {
        let default_organization = dataset
            .directory()
            .find_by_name(name)
            .ok_or_else(|| ViewError::UnknownOrganization(name.to_string()))?;
        Ok(Self::with_default(dataset, default_organization))
    }

    /// Build a context honouring `default_organization` from the config.
    pub fn from_config(dataset: Dataset, config: &HubConfig) -> Result<Self, ViewError> {
        match &config.default_organization {
            Some(name) => Self::with_default_organization(dataset, name),
            None => Self::new(dataset),
        }
    }

    fn with_default(dataset: Dataset, default_organization: OrganizationId) -> Self {
        Self {
            dataset,
            default_organization,
            default_posts: OnceLock::new(),
            default_donations: OnceLock::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn posts(&self) -> &[Post] {
        self.dataset.posts()
    }

    pub fn donations(&self) -> &[Donation] {
        self.dataset.donations()
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.dataset.post(id)
    }

    pub fn donation(&self, id: DonationId) -> Option<&Donation> {
        self.dataset.donation(id)
    }

    pub fn organization(&self, id: OrganizationId) -> Option<&Organization> {
        self.dataset.organization(id)
    }

    /// Find an organization id by name.
    pub fn organization_id(&self, name: &str) -> Result<OrganizationId, ViewError> {
        self.dataset
            .directory()
            .find_by_name(name)
            .ok_or_else(|| ViewError::UnknownOrganization(name.to_string()))
    }

    pub fn default_organization(&self) -> OrganizationId {
        self.default_organization
    }

    /// Posts owned by `organization`, in id order. Empty when the
    /// organization has no posts.
    pub fn posts_by_organization(&self, organization: OrganizationId) -> Vec<&Post> {
        self.posts()
            .iter()
            .filter(|post| post.organization == organization)
            .collect()
    }

    /// Posts whose fulfilled flag equals `fulfilled`.
    pub fn posts_by_status(&self, fulfilled: bool) -> Vec<&Post> {
        self.posts()
            .iter()
            .filter(|post| post.is_fulfilled() == fulfilled)
            .collect()
    }

    pub fn posts_by_category(&self, category: Category) -> Vec<&Post> {
        self.posts()
            .iter()
            .filter(|post| post.category() == category)
            .collect()
    }

    /// Donations made against the given post, in creation order.
    pub fn donations_for_post(&self, id: PostId) -> Result<Vec<&Donation>, ViewError> {
        let post = self.post(id).ok_or(ViewError::PostNotFound(id))?;
        Ok(post
            .donations()
            .iter()
            .filter_map(|donation| self.donation(*donation))
            .collect())
    }

    /// Ids of the default organization's posts, computed once.
    pub fn default_organization_post_ids(&self) -> &[PostId] {
        self.default_posts.get_or_init(|| {
            let ids: Vec<PostId> = self
                .posts_by_organization(self.default_organization)
                .iter()
                .map(|post| post.id)
                .collect();
            debug!(
                "Cached {} posts for default organization {}",
                ids.len(),
                self.default_organization
            );
            ids
        })
    }

    /// Ids of donations made to the default organization's posts, computed once.
    pub fn default_organization_donation_ids(&self) -> &[DonationId] {
        self.default_donations.get_or_init(|| {
            let ids: Vec<DonationId> = self
                .donations()
                .iter()
                .filter(|donation| {
                    self.post(donation.post)
                        .is_some_and(|post| post.organization == self.default_organization)
                })
                .map(|donation| donation.id)
                .collect();
            debug!(
                "Cached {} donations for default organization {}",
                ids.len(),
                self.default_organization
            );
            ids
        })
    }

    pub fn posts_for_default_organization(&self) -> Vec<&Post> {
        self.default_organization_post_ids()
            .iter()
            .filter_map(|id| self.post(*id))
            .collect()
    }

    pub fn donations_for_default_organization(&self) -> Vec<&Donation> {
        self.default_organization_donation_ids()
            .iter()
            .filter_map(|id| self.donation(*id))
            .collect()
    }

    /// Every donor entry matching `selector`, in post order then donation
    /// order.
    pub fn donors(&self, selector: DonorSelector) -> Result<Vec<DonorEntry<'_>>, ViewError> {
        if let DonorSelector::Post(id) = selector {
            if self.post(id).is_none() {
                return Err(ViewError::PostNotFound(id));
            }
        }

        let ctx = self;
        Ok(self
            .posts()
            .iter()
            .filter(|post| selector.matches(post))
            .flat_map(move |post| {
                post.donations()
                    .iter()
                    .filter_map(move |id| ctx.donation(*id))
                    .map(move |donation| DonorEntry { donation, post })
            })
            .collect())
    }

    pub fn summary(&self) -> Summary {
        let posts = self.posts();
        let fulfilled_posts = posts.iter().filter(|post| post.is_fulfilled()).count();
        let mut posts_by_category: BTreeMap<Category, usize> =
            Category::ALL.into_iter().map(|c| (c, 0)).collect();
        for post in posts {
            *posts_by_category.entry(post.category()).or_default() += 1;
        }

        Summary {
            organizations: self.dataset.directory().len(),
            posts: posts.len(),
            fulfilled_posts,
            unfulfilled_posts: posts.len() - fulfilled_posts,
            donations: self.donations().len(),
            dropped_donations: self.donations().iter().filter(|d| d.is_dropped).count(),
            posts_by_category,
        }
    }
}
