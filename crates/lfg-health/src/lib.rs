//! lfg-health — backend connectivity monitoring.
//!
//! Answers "is the backend reachable?" and, once it is not, retries with
//! bounded exponential backoff until success or exhaustion.
//!
//! # Architecture
//!
//! ```text
//! ConnectionMonitor
//!   ├── Probe (HttpProbe in production) → ProbeResult
//!   ├── BackoffPolicy (min(base * 2^attempt, max), max_attempts)
//!   ├── single-flight gate for reconnect_with_backoff
//!   └── watch channel + optional callback for state changes
//! ```
//!
//! Connectivity loss is routine, so no operation returns an error: every
//! failure is folded into a `false` return and the exposed
//! [`ConnectionState`].

pub mod backoff;
pub mod checker;
pub mod monitor;

pub use backoff::BackoffPolicy;
pub use checker::{BoxFuture, HttpProbe, Probe, ProbeResult, http_probe};
pub use monitor::{ConnectionMonitor, ConnectionState, StateCallback};
