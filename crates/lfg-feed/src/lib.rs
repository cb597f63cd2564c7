//! lfg-feed — ordering posts for the social feed.
//!
//! A fresh load is ranked (followed-recent, followed-older, everything
//! else, each newest first) and then shuffled once for variety. Later
//! pages are appended as received so already-seen posts never move.

pub mod error;
pub mod model;
pub mod ranker;
pub mod session;

pub use error::{FeedError, FeedResult};
pub use model::{FeedData, FeedItem, FeedPage, Pagination, Post, PostContent};
pub use ranker::{FeedRanker, append_stable};
pub use session::FeedSession;
