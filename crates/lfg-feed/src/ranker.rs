//! Follow-aware feed ordering.
//!
//! Priority order for a fresh load:
//! - **Recent followed**: author is followed and the post is at most
//!   `recent_window` old (future timestamps count as recent)
//! - **Older followed**: author is followed, post is older than the window
//! - **Other**: everything else
//!
//! Each bucket is newest first, ties keep input order. [`FeedRanker::rank`]
//! then shuffles the whole sequence once so every fresh load looks
//! different. That shuffle is uniform and therefore overrides the
//! priority order entirely; it is intentional product behavior and is kept
//! as-is until product decides otherwise.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use lfg_core::FeedSettings;
use lfg_core::config::DEFAULT_RECENT_WINDOW;

use crate::model::FeedItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedRanker {
    recent_window: TimeDelta,
}

impl Default for FeedRanker {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_WINDOW)
    }
}

impl FeedRanker {
    pub fn new(recent_window: Duration) -> Self {
        Self {
            recent_window: TimeDelta::from_std(recent_window).unwrap_or(TimeDelta::MAX),
        }
    }

    pub fn from_settings(settings: &FeedSettings) -> Self {
        Self::new(settings.recent_window)
    }

    pub fn recent_window(&self) -> TimeDelta {
        self.recent_window
    }

    /// Rank a fresh batch: priority order, then one uniform shuffle.
    pub fn rank<T: FeedItem>(
        &self,
        posts: Vec<T>,
        following: &HashSet<String>,
        now: DateTime<Utc>,
    ) -> Vec<T> {
        self.rank_with_rng(posts, following, now, &mut rand::rng())
    }

    /// [`rank`](Self::rank) with a caller-supplied random source.
    pub fn rank_with_rng<T: FeedItem, R: Rng + ?Sized>(
        &self,
        posts: Vec<T>,
        following: &HashSet<String>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<T> {
        let mut order = self.priority_order(posts, following, now);
        order.shuffle(rng);
        order
    }

    /// Deterministic order before the shuffle:
    /// recent followed, older followed, other.
    pub fn priority_order<T: FeedItem>(
        &self,
        posts: Vec<T>,
        following: &HashSet<String>,
        now: DateTime<Utc>,
    ) -> Vec<T> {
        let (mut followed, mut other): (Vec<T>, Vec<T>) = posts
            .into_iter()
            .partition(|post| following.contains(post.author_id()));

        // Stable: equal timestamps keep their input order.
        followed.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        other.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        // Newest first, so the recent posts form a prefix.
        let recent = followed
            .iter()
            .take_while(|post| self.is_recent(*post, now))
            .count();
        trace!(
            recent_followed = recent,
            older_followed = followed.len() - recent,
            other = other.len(),
            "feed buckets"
        );

        followed.append(&mut other);
        followed
    }

    fn is_recent<T: FeedItem>(&self, post: &T, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(post.created_at()) <= self.recent_window
    }
}

/// Append a later page as received: no re-ranking, no reshuffle.
pub fn append_stable<T>(mut current: Vec<T>, new_posts: impl IntoIterator<Item = T>) -> Vec<T> {
    current.extend(new_posts);
    current
}
