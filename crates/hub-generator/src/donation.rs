//! Donation synthesis.

use crate::generator::GeneratorError;
use crate::generators::person::generate_person;
use hub_core::{
    Donation, DonationId, OrganizationDirectory, Post, DROPPED_DATE, FALLBACK_DROP_DATE,
};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Build a donation against a post drawn uniformly from `posts`.
///
/// The donation is returned on its own; attaching it to the post and
/// raising the post's `fulfilled` flag is left to the batch orchestrator.
pub fn synthesize_donation<R: Rng + ?Sized>(
    id: DonationId,
    posts: &[Post],
    directory: &OrganizationDirectory,
    rng: &mut R,
) -> Result<Donation, GeneratorError> {
    let post = posts.choose(rng).ok_or(GeneratorError::NoPosts)?;
    let organization = directory
        .get(post.organization)
        .ok_or(GeneratorError::UnknownOrganization(post.organization))?;

    let donor = generate_person(rng);
    let address = format!(
        "Street {}, Building {}",
        rng.random_range(1..=100),
        rng.random_range(1..=100)
    );
    let is_dropped = rng.random_bool(0.5);
    let drop_date = if is_dropped {
        Some(DROPPED_DATE)
    } else if rng.random_bool(0.5) {
        Some(FALLBACK_DROP_DATE)
    } else {
        None
    };

    Ok(Donation {
        id,
        post: post.id,
        donor,
        address,
        area: organization.area.clone(),
        governorate: organization.governorate.clone(),
        is_dropped,
        drop_date,
        details: format!("I want to donate to the cause of {}.", post.title),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::organizations::builtin_directory;
    use crate::post::synthesize_post;
    use hub_core::{Category, OrganizationPool, PostId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn posts(directory: &OrganizationDirectory, rng: &mut StdRng) -> Vec<Post> {
        let org_id = directory.pool(OrganizationPool::General)[1];
        let organization = directory.get(org_id).unwrap();
        (1..=5)
            .map(|id| synthesize_post(PostId(id), Category::Food, org_id, organization, rng))
            .collect()
    }

    #[test]
    fn test_donation_copies_location_from_post_organization() {
        let mut rng = StdRng::seed_from_u64(42);
        let directory = builtin_directory();
        let posts = posts(&directory, &mut rng);
        let organization = directory.get(posts[0].organization).unwrap();

        for id in 1..=50 {
            let donation =
                synthesize_donation(DonationId(id), &posts, &directory, &mut rng).unwrap();
            let post = posts.iter().find(|p| p.id == donation.post).unwrap();

            assert_eq!(donation.id, DonationId(id));
            assert_eq!(donation.area, organization.area);
            assert_eq!(donation.governorate, organization.governorate);
            assert_eq!(
                donation.details,
                format!("I want to donate to the cause of {}.", post.title)
            );
            assert!(donation.address.starts_with("Street "));
            assert!(donation.address.contains(", Building "));
        }
    }

    #[test]
    fn test_drop_date_policy() {
        let mut rng = StdRng::seed_from_u64(11);
        let directory = builtin_directory();
        let posts = posts(&directory, &mut rng);
        let (mut unset, mut fallback) = (0, 0);

        for id in 1..=500 {
            let donation =
                synthesize_donation(DonationId(id), &posts, &directory, &mut rng).unwrap();
            if donation.is_dropped {
                assert_eq!(donation.drop_date, Some(DROPPED_DATE));
            } else {
                match donation.drop_date {
                    None => unset += 1,
                    Some(date) => {
                        assert_eq!(date, FALLBACK_DROP_DATE);
                        fallback += 1;
                    }
                }
            }
        }

        assert!(unset > 0, "some undelivered donations should have no date");
        assert!(
            fallback > 0,
            "some undelivered donations should have the fallback date"
        );
    }

    #[test]
    fn test_synthesizer_does_not_touch_posts() {
        let mut rng = StdRng::seed_from_u64(5);
        let directory = builtin_directory();
        let posts = posts(&directory, &mut rng);

        for id in 1..=20 {
            synthesize_donation(DonationId(id), &posts, &directory, &mut rng).unwrap();
        }
        assert!(posts
            .iter()
            .all(|p| p.donations().is_empty() && !p.is_fulfilled()));
    }

    #[test]
    fn test_no_posts() {
        let mut rng = StdRng::seed_from_u64(5);
        let directory = builtin_directory();
        let result = synthesize_donation(DonationId(1), &[], &directory, &mut rng);
        assert!(matches!(result, Err(GeneratorError::NoPosts)));
    }
}
