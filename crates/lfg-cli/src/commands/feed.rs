use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use lfg_core::FeedSettings;
use lfg_feed::{FeedPage, FeedRanker, Post};

pub struct RankOptions<'a> {
    pub following: Vec<String>,
    pub now: Option<&'a str>,
    pub ordered: bool,
    pub seed: Option<u64>,
    pub format: &'a str,
}

pub fn rank(settings: &FeedSettings, input: &Path, opts: &RankOptions<'_>) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let posts = FeedPage::from_json(&json)?.into_data()?.posts;

    let ordered = order_posts(settings, posts, opts)?;
    match opts.format {
        "json" => println!("{}", serde_json::to_string_pretty(&ordered)?),
        _ => {
            for post in &ordered {
                println!(
                    "{}\t{}\t{}",
                    post.id,
                    post.author_id,
                    post.created_at.to_rfc3339()
                );
            }
        }
    }
    Ok(())
}

fn order_posts(
    settings: &FeedSettings,
    posts: Vec<Post>,
    opts: &RankOptions<'_>,
) -> anyhow::Result<Vec<Post>> {
    let now = match opts.now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("invalid --now {raw:?}"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    let following: HashSet<String> = opts.following.iter().cloned().collect();
    let ranker = FeedRanker::from_settings(settings);

    Ok(if opts.ordered {
        ranker.priority_order(posts, &following, now)
    } else if let Some(seed) = opts.seed {
        ranker.rank_with_rng(posts, &following, now, &mut StdRng::seed_from_u64(seed))
    } else {
        ranker.rank(posts, &following, now)
    })
}
