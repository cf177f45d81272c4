//! Whole-batch properties of generated data, checked across several seeds.

use hub_core::{
    Category, HubConfig, OrganizationPool, Post, PostItem, DROPPED_DATE, FALLBACK_DROP_DATE,
};
use hub_generator::DataGenerator;
use hub_views::{DataContext, DonorSelector};
use std::collections::HashMap;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("hub_generator=debug,hub_views=debug")
        .with_test_writer()
        .try_init()
        .ok();
}

fn context(seed: u64) -> DataContext {
    let config = HubConfig {
        seed,
        ..HubConfig::default()
    };
    let dataset = DataGenerator::new(config.clone()).generate().unwrap();
    DataContext::from_config(dataset, &config).unwrap()
}

fn ids(posts: Vec<&Post>) -> Vec<u32> {
    posts.iter().map(|post| post.id.0).collect()
}

#[test]
fn test_default_batch_shape() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    for seed in [1, 42, 1234] {
        let ctx = context(seed);
        assert_eq!(ctx.posts().len(), 1000);
        assert_eq!(ctx.donations().len(), 1000);

        let attached: usize = ctx.posts().iter().map(|p| p.donations().len()).sum();
        assert_eq!(attached, 1000);

        let mut by_post: HashMap<_, usize> = HashMap::new();
        for donation in ctx.donations() {
            *by_post.entry(donation.post).or_default() += 1;
        }
        assert_eq!(by_post.values().sum::<usize>(), ctx.donations().len());
        for (post_id, count) in by_post {
            let post = ctx.post(post_id).ok_or("dangling post reference")?;
            assert_eq!(post.donations().len(), count);
        }
    }
    Ok(())
}

#[test]
fn test_payload_and_pool_rules() {
    init_logging();

    for seed in [3, 99] {
        let ctx = context(seed);
        let directory = ctx.dataset().directory();

        for post in ctx.posts() {
            let variant_category = match &post.item {
                PostItem::Toys(_) => Category::Toys,
                PostItem::Clothes(_) => Category::Clothes,
                PostItem::MedicalSupplies(_) => Category::MedicalSupplies,
                PostItem::BloodDonation(_) => Category::BloodDonations,
                PostItem::Food(_) => Category::Food,
            };
            assert_eq!(variant_category, post.category());

            let pool = directory.pool_of(post.organization).unwrap();
            match post.category() {
                Category::BloodDonations | Category::MedicalSupplies => {
                    assert_eq!(pool, OrganizationPool::Hospitals, "post {}", post.id)
                }
                _ => assert_eq!(pool, OrganizationPool::General, "post {}", post.id),
            }
        }
    }
}

#[test]
fn test_drop_dates_and_fulfillment() {
    init_logging();
    let ctx = context(42);

    for donation in ctx.donations() {
        if donation.is_dropped {
            assert_eq!(donation.drop_date, Some(DROPPED_DATE));
            assert!(ctx.post(donation.post).unwrap().is_fulfilled());
        } else {
            assert!(donation.drop_date.is_none() || donation.drop_date == Some(FALLBACK_DROP_DATE));
        }
    }

    // A post is fulfilled exactly when one of its donations was dropped.
    for post in ctx.posts() {
        let dropped = ctx
            .donations_for_post(post.id)
            .unwrap()
            .iter()
            .any(|d| d.is_dropped);
        assert_eq!(post.is_fulfilled(), dropped);
    }
}

#[test]
fn test_views_are_stable() {
    init_logging();
    let ctx = context(42);

    for entry in ctx.dataset().directory().entries() {
        let first = ids(ctx.posts_by_organization(entry.id));
        let second = ids(ctx.posts_by_organization(entry.id));
        assert_eq!(first, second);
    }

    let fulfilled_before = ids(ctx.posts_by_status(true));
    let _ = ctx.donors(DonorSelector::All).unwrap();
    let _ = ctx.donations_for_default_organization();
    let fulfilled_after = ids(ctx.posts_by_status(true));
    assert_eq!(fulfilled_before, fulfilled_after);
}

#[test]
fn test_small_custom_batch() {
    init_logging();
    let yaml = r#"
seed: 5
post_count: 3
donation_count: 12
organizations:
  general:
    - name: "Lonely Shelter"
      type: "Charity"
      address: "1 Nile St"
      area: "Zamalek"
      governorate: "Cairo"
  hospitals:
    - name: "Only Hospital"
      type: "Hospital"
      address: "2 Port St"
      area: "Smouha"
      governorate: "Alexandria"
"#;
    let config = HubConfig::from_yaml(yaml).unwrap();
    let dataset = DataGenerator::new(config.clone()).generate().unwrap();
    let ctx = DataContext::from_config(dataset, &config).unwrap();

    assert_eq!(ctx.posts().len(), 3);
    assert_eq!(ctx.donations().len(), 12);
    for donation in ctx.donations() {
        let post = ctx.post(donation.post).unwrap();
        let org = ctx.organization(post.organization).unwrap();
        assert_eq!(donation.area, org.area);
        assert_eq!(donation.governorate, org.governorate);
    }
}
