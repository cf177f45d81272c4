//! Batch orchestrator producing a complete [`Dataset`].

use crate::donation::synthesize_donation;
use crate::generators::organizations::builtin_directory;
use crate::post::synthesize_post;
use hub_core::{
    Category, Dataset, Donation, DonationId, HubConfig, OrganizationDirectory, OrganizationId,
    OrganizationPool, Post, PostId,
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, info};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// An organization pool has nothing to sample from
    #[error("Organization pool is empty: {0:?}")]
    EmptyPool(OrganizationPool),

    /// Donations were requested but there are no posts to attach them to
    #[error("Cannot generate donations without posts")]
    NoPosts,

    /// A post references an organization missing from the directory
    #[error("Unknown organization id: {0}")]
    UnknownOrganization(OrganizationId),

    /// A donation references a post missing from the batch
    #[error("Unknown post id: {0}")]
    UnknownPost(PostId),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(#[from] hub_core::ConfigError),
}

/// Generates one batch of posts and donations.
///
/// Generation runs in two phases: every post is created first, then every
/// donation is drawn against the finished post list. The RNG is seeded from
/// the config so a given config always yields the same batch.
pub struct DataGenerator {
    config: HubConfig,
    directory: OrganizationDirectory,
    rng: StdRng,
}

impl DataGenerator {
    /// Create a generator using the configured organization pools, or the
    /// built-in ones when the config has none.
    pub fn new(config: HubConfig) -> Self {
        let directory = match &config.organizations {
            Some(pools) => {
                OrganizationDirectory::new(pools.general.clone(), pools.hospitals.clone())
            }
            None => builtin_directory(),
        };
        Self::with_directory(config, directory)
    }

    /// Create a generator over an explicit organization directory.
    pub fn with_directory(config: HubConfig, directory: OrganizationDirectory) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            directory,
            rng,
        }
    }

    pub fn directory(&self) -> &OrganizationDirectory {
        &self.directory
    }

    /// Generate the whole batch.
    pub fn generate(&mut self) -> Result<Dataset, GeneratorError> {
        self.config.validate()?;
        if self.config.post_count > 0 {
            self.ensure_pools()?;
        }

        info!(
            "Generating {} posts and {} donations (seed {})",
            self.config.post_count, self.config.donation_count, self.config.seed
        );

        let mut posts = self.generate_posts()?;
        let donations = self.generate_donations(&mut posts)?;

        let fulfilled = posts.iter().filter(|post| post.is_fulfilled()).count();
        info!(
            "Generation complete: {} posts ({} fulfilled), {} donations",
            posts.len(),
            fulfilled,
            donations.len()
        );

        Ok(Dataset::new(self.directory.clone(), posts, donations))
    }

    fn ensure_pools(&self) -> Result<(), GeneratorError> {
        for pool in [OrganizationPool::General, OrganizationPool::Hospitals] {
            if self.directory.pool(pool).is_empty() {
                return Err(GeneratorError::EmptyPool(pool));
            }
        }
        Ok(())
    }

    /// Phase one: posts with ids `1..=post_count`.
    pub fn generate_posts(&mut self) -> Result<Vec<Post>, GeneratorError> {
        let count = self.config.post_count;
        let mut posts = Vec::with_capacity(count as usize);

        for id in 1..=count {
            let category = *Category::ALL
                .choose(&mut self.rng)
                .expect("category list is non-empty");
            let pool = category.organization_pool();
            let organization_id = *self
                .directory
                .pool(pool)
                .choose(&mut self.rng)
                .ok_or(GeneratorError::EmptyPool(pool))?;
            let organization = self
                .directory
                .get(organization_id)
                .ok_or(GeneratorError::UnknownOrganization(organization_id))?;

            posts.push(synthesize_post(
                PostId(id),
                category,
                organization_id,
                organization,
                &mut self.rng,
            ));

            if id % 250 == 0 {
                debug!("Generated {} posts", id);
            }
        }

        Ok(posts)
    }

    /// Phase two: donations with ids `1..=donation_count` against `posts`.
    ///
    /// Each donation is appended to its post, and a dropped donation marks
    /// the post fulfilled.
    pub fn generate_donations(
        &mut self,
        posts: &mut [Post],
    ) -> Result<Vec<Donation>, GeneratorError> {
        let count = self.config.donation_count;
        let mut donations = Vec::with_capacity(count as usize);

        for id in 1..=count {
            let donation =
                synthesize_donation(DonationId(id), posts, &self.directory, &mut self.rng)?;

            let index = post_index(posts, donation.post)
                .ok_or(GeneratorError::UnknownPost(donation.post))?;
            let post = &mut posts[index];
            post.push_donation(donation.id);
            if donation.is_dropped {
                post.mark_fulfilled();
            }

            donations.push(donation);

            if id % 250 == 0 {
                debug!("Generated {} donations", id);
            }
        }

        Ok(donations)
    }
}

/// Position of post `id`, trying its sequential slot before scanning.
fn post_index(posts: &[Post], id: PostId) -> Option<usize> {
    let slot = (id.0 as usize).checked_sub(1)?;
    match posts.get(slot) {
        Some(post) if post.id == id => Some(slot),
        _ => posts.iter().position(|post| post.id == id),
    }
}
