//! Infinite-scroll feed state.
//!
//! The first page of a load is ranked; every later page is appended as
//! received so the user's scroll position never reshuffles.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use crate::error::FeedResult;
use crate::model::{FeedPage, Pagination, Post};
use crate::ranker::{FeedRanker, append_stable};

#[derive(Debug, Clone, Default)]
pub struct FeedSession {
    ranker: FeedRanker,
    following: HashSet<String>,
    posts: Vec<Post>,
    pagination: Option<Pagination>,
}

impl FeedSession {
    pub fn new(ranker: FeedRanker, following: HashSet<String>) -> Self {
        Self {
            ranker,
            following,
            posts: Vec::new(),
            pagination: None,
        }
    }

    /// Replace the feed with a freshly ranked first page.
    pub fn load(&mut self, page: FeedPage, now: DateTime<Utc>) -> FeedResult<&[Post]> {
        self.load_with_rng(page, now, &mut rand::rng())
    }

    pub fn load_with_rng<R: Rng + ?Sized>(
        &mut self,
        page: FeedPage,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> FeedResult<&[Post]> {
        let data = page.into_data()?;
        self.posts = self
            .ranker
            .rank_with_rng(data.posts, &self.following, now, rng);
        self.pagination = Some(data.pagination);
        debug!(
            posts = self.posts.len(),
            page = data.pagination.current,
            total = data.pagination.total,
            "feed loaded"
        );
        Ok(&self.posts)
    }

    /// Append a later page without touching what is already shown.
    ///
    /// An unsuccessful page leaves the session unchanged.
    pub fn append(&mut self, page: FeedPage) -> FeedResult<&[Post]> {
        let data = page.into_data()?;
        let added = data.posts.len();
        self.posts = append_stable(std::mem::take(&mut self.posts), data.posts);
        self.pagination = Some(data.pagination);
        debug!(
            added,
            posts = self.posts.len(),
            page = data.pagination.current,
            "feed page appended"
        );
        Ok(&self.posts)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    pub fn following(&self) -> &HashSet<String> {
        &self.following
    }

    pub fn has_more(&self) -> bool {
        self.pagination.is_some_and(|p| p.has_more())
    }

    /// Page number to request next, if any remain.
    pub fn next_page(&self) -> Option<u32> {
        self.pagination
            .filter(Pagination::has_more)
            .map(|p| p.current + 1)
    }
}
