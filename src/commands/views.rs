//! Handlers for the read-only view commands.

use super::write_json_line;
use clap::ValueEnum;
use hub_core::{Category, Post, PostId};
use hub_views::{DataContext, DonorList, DonorSelector};
use serde::Serialize;
use std::io::Write;

/// Post fulfillment filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PostStatus {
    Fulfilled,
    Unfulfilled,
}

/// Filters for the `posts` command; unset filters match everything.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub organization: Option<String>,
    pub default_organization: bool,
    pub status: Option<PostStatus>,
    pub category: Option<Category>,
}

#[derive(Debug, Serialize)]
struct PostRow<'a> {
    id: PostId,
    organization: &'a str,
    category: Category,
    title: &'a str,
    fulfilled: bool,
    donations: usize,
}

fn post_row<'a>(ctx: &'a DataContext, post: &'a Post) -> PostRow<'a> {
    PostRow {
        id: post.id,
        organization: ctx
            .organization(post.organization)
            .map(|org| org.name.as_str())
            .unwrap_or_default(),
        category: post.category(),
        title: &post.title,
        fulfilled: post.is_fulfilled(),
        donations: post.donations().len(),
    }
}

/// Print the category list in dropdown order.
pub fn run_categories<W: Write>(out: &mut W) -> anyhow::Result<()> {
    for category in Category::ALL {
        write_json_line(out, &category)?;
    }
    Ok(())
}

/// Print posts matching `filter`.
pub fn run_posts<W: Write>(
    ctx: &DataContext,
    filter: &PostFilter,
    out: &mut W,
) -> anyhow::Result<()> {
    let posts = if filter.default_organization {
        ctx.posts_for_default_organization()
    } else if let Some(name) = &filter.organization {
        ctx.posts_by_organization(ctx.organization_id(name)?)
    } else {
        ctx.posts().iter().collect()
    };

    let mut printed = 0usize;
    for post in posts {
        if let Some(status) = filter.status {
            if post.is_fulfilled() != (status == PostStatus::Fulfilled) {
                continue;
            }
        }
        if let Some(category) = filter.category {
            if post.category() != category {
                continue;
            }
        }
        write_json_line(out, &post_row(ctx, post))?;
        printed += 1;
    }

    tracing::info!("Listed {} posts", printed);
    Ok(())
}

/// Print donors selected by an optional route-style selector.
///
/// With `remove`, the entry at that index is first dropped from the printed
/// list. Only donors of fulfilled posts can be removed.
pub fn run_donors<W: Write>(
    ctx: &DataContext,
    selector: Option<&str>,
    remove: Option<usize>,
    out: &mut W,
) -> anyhow::Result<()> {
    let selector = DonorSelector::parse(selector)?;
    let mut donors = DonorList::new(ctx.donors(selector)?);
    if let Some(index) = remove {
        donors.remove(index)?;
    }
    tracing::info!(
        "Listing {} donors for selector '{}'",
        donors.len(),
        selector
    );

    for entry in donors.entries() {
        write_json_line(out, &entry.row())?;
    }
    Ok(())
}

/// Print batch counts.
pub fn run_summary<W: Write>(ctx: &DataContext, out: &mut W) -> anyhow::Result<()> {
    write_json_line(out, &ctx.summary())
}
