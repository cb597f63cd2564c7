//! Connection monitor — reachability state and backoff reconnection.
//!
//! One `ConnectionMonitor` watches one health URL. Its owner decides the
//! lifetime; there is no process-wide instance. Hosts react to
//! connectivity changes through [`ConnectionMonitor::subscribe`] or a
//! [`StateCallback`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::{Notify, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use lfg_core::HealthSettings;
use lfg_core::config::DEFAULT_POLL_INTERVAL;

use crate::backoff::BackoffPolicy;
use crate::checker::{HttpProbe, Probe};

/// Current belief about backend reachability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No probe has completed yet.
    Checking,
    Connected,
    Disconnected,
}

impl ConnectionState {
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionState::Checking => "checking",
            ConnectionState::Connected => "connected",
            ConnectionState::Disconnected => "disconnected",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback invoked on every connection state transition.
pub type StateCallback = Arc<dyn Fn(ConnectionState) + Send + Sync>;

/// Run id meaning "no backoff sequence in flight".
const IDLE: u64 = 0;

/// Single-flight gate and retry counter.
///
/// Both fields change under one lock so a cancelled run can never write
/// into the counter of the run that replaced it. The lock is never held
/// across an await.
#[derive(Debug)]
struct Gate {
    /// Id of the backoff run holding the gate, or `IDLE`.
    active_run: u64,
    /// Consecutive failed reconnect probes.
    attempt: u32,
}

/// Monitors a single health-check URL.
pub struct ConnectionMonitor<P = HttpProbe> {
    url: String,
    probe: P,
    policy: BackoffPolicy,
    poll_interval: Duration,
    state_tx: watch::Sender<ConnectionState>,
    gate: Mutex<Gate>,
    next_run: AtomicU64,
    /// Wakes a sleeping backoff run when `reset` is called.
    cancel: Notify,
    on_state_change: Option<StateCallback>,
}

impl ConnectionMonitor<HttpProbe> {
    /// Monitor `url` with the default HTTP probe and backoff policy.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_probe(url, HttpProbe::default())
    }

    /// Monitor `url` using resolved `[health]` settings.
    pub fn from_settings(url: impl Into<String>, settings: &HealthSettings) -> Self {
        Self::with_probe(url, HttpProbe::new(settings.timeout))
            .with_policy(BackoffPolicy::from_settings(settings))
            .with_poll_interval(settings.poll_interval)
    }
}

impl<P: Probe> ConnectionMonitor<P> {
    /// Monitor `url` with a custom probe.
    pub fn with_probe(url: impl Into<String>, probe: P) -> Self {
        let (state_tx, _) = watch::channel(ConnectionState::Checking);
        Self {
            url: url.into(),
            probe,
            policy: BackoffPolicy::default(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            state_tx,
            gate: Mutex::new(Gate {
                active_run: IDLE,
                attempt: 0,
            }),
            next_run: AtomicU64::new(IDLE + 1),
            cancel: Notify::new(),
            on_state_change: None,
        }
    }

    pub fn with_policy(mut self, policy: BackoffPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the fixed interval used by [`wait_for_connection`](Self::wait_for_connection).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set a callback for state changes.
    pub fn with_callback(mut self, callback: StateCallback) -> Self {
        self.on_state_change = Some(callback);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn policy(&self) -> &BackoffPolicy {
        &self.policy
    }

    pub fn state(&self) -> ConnectionState {
        *self.state_tx.borrow()
    }

    pub fn attempt(&self) -> u32 {
        self.gate().attempt
    }

    /// Whether a backoff sequence currently holds the single-flight gate.
    pub fn is_reconnecting(&self) -> bool {
        self.gate().active_run != IDLE
    }

    /// Receive every subsequent state change.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state_tx.subscribe()
    }

    /// Probe the URL once and record the outcome in `state`.
    ///
    /// A success also clears the attempt counter. Never fails: errors,
    /// timeouts and non-2xx statuses all yield `false`.
    pub async fn check_once(&self) -> bool {
        let healthy = self.probe.probe(&self.url).await.is_healthy();
        let new_state = if healthy {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        };

        let previous = {
            let mut gate = self.gate();
            if healthy {
                gate.attempt = 0;
            }
            self.update_state(new_state)
        };
        self.announce(previous, new_state);
        healthy
    }

    /// Poll at the fixed interval until a probe succeeds or `max_wait`
    /// has elapsed. Success resets the attempt counter.
    pub async fn wait_for_connection(&self, max_wait: Duration) -> bool {
        let start = Instant::now();
        while start.elapsed() < max_wait {
            if self.check_once().await {
                return true;
            }
            tokio::time::sleep(self.poll_interval).await;
        }
        debug!(url = %self.url, ?max_wait, "gave up waiting for connection");
        false
    }

    /// Reconnect with exponential backoff.
    ///
    /// Only one sequence runs at a time: a call made while another is in
    /// flight returns `false` immediately without probing. Each round
    /// sleeps `min(base_delay * 2^attempt, max_delay)` and probes; the
    /// sequence ends with `true` on the first success or `false` after
    /// `max_attempts` consecutive failures. A sequence that was already
    /// exhausted starts over from attempt 0.
    pub async fn reconnect_with_backoff(&self) -> bool {
        let run = self.next_run.fetch_add(1, Ordering::SeqCst);
        let Some(first_attempt) = self.acquire_gate(run) else {
            debug!(url = %self.url, "reconnect already in progress");
            return false;
        };
        info!(url = %self.url, attempt = first_attempt, "reconnecting");

        loop {
            let cancelled = self.cancel.notified();
            tokio::pin!(cancelled);
            cancelled.as_mut().enable();

            let Some(attempt) = self.gate_attempt(run) else {
                debug!(url = %self.url, "reconnect cancelled");
                return false;
            };
            if self.policy.is_exhausted(attempt) {
                break;
            }
            let delay = self.policy.delay_for(attempt);

            debug!(url = %self.url, attempt, delay_ms = delay.as_millis() as u64, "waiting before reconnect probe");
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = &mut cancelled => {}
            }
            if self.gate_attempt(run).is_none() {
                debug!(url = %self.url, "reconnect cancelled");
                return false;
            }

            let healthy = self.probe.probe(&self.url).await.is_healthy();
            let new_state = if healthy {
                ConnectionState::Connected
            } else {
                ConnectionState::Disconnected
            };

            let recorded = {
                let mut gate = self.gate();
                if gate.active_run != run {
                    None
                } else {
                    if healthy {
                        gate.attempt = 0;
                        gate.active_run = IDLE;
                    } else {
                        gate.attempt += 1;
                    }
                    Some(self.update_state(new_state))
                }
            };
            let Some(previous) = recorded else {
                debug!(url = %self.url, "reconnect cancelled during probe");
                return false;
            };
            self.announce(previous, new_state);

            if healthy {
                info!(url = %self.url, "reconnected");
                return true;
            }
        }

        {
            let mut gate = self.gate();
            if gate.active_run == run {
                gate.active_run = IDLE;
            }
        }
        warn!(
            url = %self.url,
            attempts = self.policy.max_attempts(),
            "reconnect attempts exhausted"
        );
        false
    }

    /// Clear the attempt counter and the single-flight gate.
    ///
    /// An in-flight backoff sequence wakes up, sees it no longer owns the
    /// gate, and exits without probing or writing state again.
    pub fn reset(&self) {
        let previous = {
            let mut gate = self.gate();
            gate.attempt = 0;
            std::mem::replace(&mut gate.active_run, IDLE)
        };
        self.cancel.notify_waiters();
        if previous != IDLE {
            debug!(url = %self.url, "in-flight reconnect abandoned");
        }
    }

    fn gate(&self) -> MutexGuard<'_, Gate> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Take the gate for `run`, returning the attempt it starts from.
    fn acquire_gate(&self, run: u64) -> Option<u32> {
        let mut gate = self.gate();
        if gate.active_run != IDLE {
            return None;
        }
        gate.active_run = run;
        if self.policy.is_exhausted(gate.attempt) {
            gate.attempt = 0;
        }
        Some(gate.attempt)
    }

    /// Current attempt if `run` still holds the gate.
    fn gate_attempt(&self, run: u64) -> Option<u32> {
        let gate = self.gate();
        (gate.active_run == run).then_some(gate.attempt)
    }

    /// Store `new_state`, returning the previous state if it changed.
    fn update_state(&self, new_state: ConnectionState) -> Option<ConnectionState> {
        let mut previous = None;
        self.state_tx.send_if_modified(|state| {
            if *state == new_state {
                false
            } else {
                previous = Some(*state);
                *state = new_state;
                true
            }
        });
        previous
    }

    /// Log a transition and run the callback. Called without the gate held.
    fn announce(&self, previous: Option<ConnectionState>, new_state: ConnectionState) {
        let Some(previous) = previous else {
            return;
        };

        match new_state {
            ConnectionState::Disconnected => {
                warn!(url = %self.url, from = %previous, "backend unreachable")
            }
            _ => info!(url = %self.url, from = %previous, to = %new_state, "connection state changed"),
        }
        if let Some(ref cb) = self.on_state_change {
            cb(new_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;
    use std::sync::atomic::AtomicUsize;

    use crate::checker::{BoxFuture, ProbeResult};

    /// Probe that fails until `succeed_from` calls have been made.
    struct ScriptedProbe {
        calls: AtomicUsize,
        succeed_from: Option<usize>,
    }

    impl ScriptedProbe {
        fn always_failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                succeed_from: None,
            })
        }

        fn succeeding_after(failures: usize) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                succeed_from: Some(failures),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Probe for ScriptedProbe {
        fn probe<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, ProbeResult> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let healthy = self.succeed_from.is_some_and(|k| n >= k);
            Box::pin(async move {
                if healthy {
                    ProbeResult::Healthy
                } else {
                    ProbeResult::Failed
                }
            })
        }
    }

    fn monitor(probe: &Arc<ScriptedProbe>) -> ConnectionMonitor<Arc<ScriptedProbe>> {
        ConnectionMonitor::with_probe("http://backend.test/api/health", probe.clone())
    }

    #[test]
    fn monitor_starts_checking() {
        let probe = ScriptedProbe::always_failing();
        let monitor = monitor(&probe);
        assert_eq!(monitor.state(), ConnectionState::Checking);
        assert_eq!(monitor.attempt(), 0);
        assert!(!monitor.is_reconnecting());
        assert_eq!(*monitor.policy(), BackoffPolicy::default());
    }

    #[tokio::test]
    async fn check_once_tracks_state() {
        let probe = ScriptedProbe::succeeding_after(1);
        let monitor = monitor(&probe);

        assert!(!monitor.check_once().await);
        assert_eq!(monitor.state(), ConnectionState::Disconnected);

        assert!(monitor.check_once().await);
        assert_eq!(monitor.state(), ConnectionState::Connected);
        assert_eq!(monitor.attempt(), 0);
        assert_eq!(probe.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn reconnect_succeeds_after_failures_and_resets_attempt() {
        let probe = ScriptedProbe::succeeding_after(3);
        let monitor = monitor(&probe);

        let start = Instant::now();
        assert!(monitor.reconnect_with_backoff().await);
        assert_eq!(probe.calls(), 4);
        assert_eq!(monitor.attempt(), 0);
        assert_eq!(monitor.state(), ConnectionState::Connected);
        assert!(!monitor.is_reconnecting());
        // 1s + 2s + 4s + 8s of backoff before the fourth probe.
        assert_eq!(start.elapsed(), Duration::from_secs(15));
    }

    #[tokio::test(start_paused = true)]
    async fn reconnect_exhausts_after_max_attempts() {
        let probe = ScriptedProbe::always_failing();
        let monitor = monitor(&probe);

        let start = Instant::now();
        assert!(!monitor.reconnect_with_backoff().await);
        assert_eq!(probe.calls(), 10);
        assert_eq!(monitor.state(), ConnectionState::Disconnected);
        assert!(!monitor.is_reconnecting());
        // 1 + 2 + 4 + 8, then six rounds capped at 10s.
        assert_eq!(start.elapsed(), Duration::from_secs(75));
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_monitor_can_reconnect_again() {
        let probe = ScriptedProbe::succeeding_after(3);
        let monitor = monitor(&probe)
            .with_policy(BackoffPolicy::new(Duration::from_millis(100), Duration::from_secs(1), 2));

        assert!(!monitor.reconnect_with_backoff().await);
        assert_eq!(probe.calls(), 2);
        assert_eq!(monitor.attempt(), 2);

        // Fresh cycle: one more failure, then success.
        assert!(monitor.reconnect_with_backoff().await);
        assert_eq!(probe.calls(), 4);
        assert_eq!(monitor.attempt(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_reconnect_is_rejected() {
        let probe = ScriptedProbe::succeeding_after(0);
        let monitor = monitor(&probe);

        let (first, second) = tokio::join!(
            monitor.reconnect_with_backoff(),
            monitor.reconnect_with_backoff()
        );
        assert!(first);
        assert!(!second);
        assert_eq!(probe.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_cancels_sleeping_reconnect() {
        let probe = ScriptedProbe::always_failing();
        let monitor = Arc::new(monitor(&probe));

        let task = {
            let monitor = monitor.clone();
            tokio::spawn(async move { monitor.reconnect_with_backoff().await })
        };

        // First probe fires at 1s; the run is then sleeping 2s more.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(probe.calls(), 1);
        assert!(monitor.is_reconnecting());

        monitor.reset();
        assert!(!task.await.unwrap());
        assert_eq!(probe.calls(), 1);
        assert_eq!(monitor.attempt(), 0);
        assert!(!monitor.is_reconnecting());

        // Nothing keeps probing in the background.
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(probe.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_frees_gate_for_new_run() {
        let probe = ScriptedProbe::succeeding_after(2);
        let monitor = Arc::new(monitor(&probe));

        let stale = {
            let monitor = monitor.clone();
            tokio::spawn(async move { monitor.reconnect_with_backoff().await })
        };
        tokio::task::yield_now().await;
        assert!(monitor.is_reconnecting());

        monitor.reset();
        assert!(monitor.reconnect_with_backoff().await);
        assert!(!stale.await.unwrap());
        assert_eq!(monitor.attempt(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_for_connection_polls_every_second() {
        let probe = ScriptedProbe::succeeding_after(2);
        let monitor = monitor(&probe);

        let start = Instant::now();
        assert!(monitor.wait_for_connection(Duration::from_secs(10)).await);
        assert_eq!(probe.calls(), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(2));
        assert_eq!(monitor.state(), ConnectionState::Connected);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_for_connection_times_out() {
        let probe = ScriptedProbe::always_failing();
        let monitor = monitor(&probe);

        assert!(!monitor.wait_for_connection(Duration::from_secs(3)).await);
        assert_eq!(probe.calls(), 3);
        assert_eq!(monitor.state(), ConnectionState::Disconnected);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_for_connection_resets_attempt() {
        let probe = ScriptedProbe::succeeding_after(2);
        let monitor = monitor(&probe)
            .with_policy(BackoffPolicy::new(Duration::from_millis(10), Duration::from_millis(10), 2));

        assert!(!monitor.reconnect_with_backoff().await);
        assert_eq!(monitor.attempt(), 2);

        assert!(monitor.wait_for_connection(Duration::from_secs(5)).await);
        assert_eq!(monitor.attempt(), 0);
    }

    #[tokio::test]
    async fn callback_and_subscribers_see_transitions() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let probe = ScriptedProbe::succeeding_after(1);
        let monitor = {
            let seen = seen.clone();
            monitor(&probe).with_callback(Arc::new(move |state| seen.lock().unwrap().push(state)))
        };
        let mut rx = monitor.subscribe();

        monitor.check_once().await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ConnectionState::Disconnected);

        monitor.check_once().await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ConnectionState::Connected);

        // Repeating the same outcome is not a transition.
        monitor.check_once().await;
        assert!(!rx.has_changed().unwrap());

        assert_eq!(
            *seen.lock().unwrap(),
            vec![ConnectionState::Disconnected, ConnectionState::Connected]
        );
    }

    /// Backend that runs a hook mid-request, then reports `result`.
    struct HookedBackend {
        calls: AtomicUsize,
        result: ProbeResult,
        hook: OnceLock<Box<dyn Fn() + Send + Sync>>,
    }

    impl HookedBackend {
        fn new(result: ProbeResult) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                result,
                hook: OnceLock::new(),
            })
        }
    }

    impl Probe for HookedBackend {
        fn probe<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, ProbeResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                if let Some(hook) = self.hook.get() {
                    hook();
                }
                self.result
            })
        }
    }

    /// Backend whose first request hangs until released; later ones fail at once.
    struct StalledBackend {
        calls: AtomicUsize,
        release: Notify,
    }

    impl Probe for StalledBackend {
        fn probe<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, ProbeResult> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                if n == 0 {
                    self.release.notified().await;
                }
                ProbeResult::Failed
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn successful_check_clears_exhausted_attempts() {
        let probe = ScriptedProbe::succeeding_after(2);
        let monitor = monitor(&probe)
            .with_policy(BackoffPolicy::new(Duration::from_millis(10), Duration::from_millis(10), 2));

        assert!(!monitor.reconnect_with_backoff().await);
        assert_eq!(monitor.attempt(), 2);

        assert!(monitor.check_once().await);
        assert_eq!(monitor.state(), ConnectionState::Connected);
        assert_eq!(monitor.attempt(), 0);
    }

    #[tokio::test]
    async fn failed_check_keeps_attempts() {
        let probe = ScriptedProbe::always_failing();
        let monitor = monitor(&probe)
            .with_policy(BackoffPolicy::new(Duration::ZERO, Duration::ZERO, 3));

        assert!(!monitor.reconnect_with_backoff().await);
        assert!(!monitor.check_once().await);
        assert_eq!(monitor.attempt(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_during_successful_check_writes_nothing() {
        let backend = HookedBackend::new(ProbeResult::Healthy);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let monitor = {
            let seen = seen.clone();
            Arc::new(
                ConnectionMonitor::with_probe("http://backend.test/api/health", backend.clone())
                    .with_callback(Arc::new(move |state| seen.lock().unwrap().push(state))),
            )
        };
        let weak = Arc::downgrade(&monitor);
        let _ = backend.hook.set(Box::new(move || {
            if let Some(monitor) = weak.upgrade() {
                monitor.reset();
            }
        }));

        assert!(!monitor.reconnect_with_backoff().await);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert_eq!(monitor.state(), ConnectionState::Checking);
        assert_eq!(monitor.attempt(), 0);
        assert!(!monitor.is_reconnecting());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_run_leaves_new_run_counter_alone() {
        let backend = Arc::new(StalledBackend {
            calls: AtomicUsize::new(0),
            release: Notify::new(),
        });
        let monitor = Arc::new(ConnectionMonitor::with_probe(
            "http://backend.test/api/health",
            backend.clone(),
        ));

        let stale = {
            let monitor = monitor.clone();
            tokio::spawn(async move { monitor.reconnect_with_backoff().await })
        };
        // The stale run is now stuck inside its first request.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

        monitor.reset();
        let fresh = {
            let monitor = monitor.clone();
            tokio::spawn(async move { monitor.reconnect_with_backoff().await })
        };
        tokio::task::yield_now().await;
        assert!(monitor.is_reconnecting());

        // The stale request fails after the new run took over.
        backend.release.notify_one();
        assert!(!stale.await.unwrap());
        assert_eq!(monitor.attempt(), 0);
        assert_eq!(monitor.state(), ConnectionState::Checking);
        assert!(monitor.is_reconnecting());

        // The new run still starts from a 1s delay.
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
        assert_eq!(monitor.attempt(), 1);

        monitor.reset();
        assert!(!fresh.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempt_policy_still_checks_once() {
        let probe = ScriptedProbe::always_failing();
        let monitor = monitor(&probe)
            .with_policy(BackoffPolicy::new(Duration::from_millis(50), Duration::from_millis(50), 0));

        assert!(!monitor.reconnect_with_backoff().await);
        assert_eq!(probe.calls(), 1);
        assert_eq!(monitor.state(), ConnectionState::Disconnected);
    }

    #[test]
    fn from_settings_applies_policy_and_interval() {
        let settings = HealthSettings {
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(4),
            max_attempts: 3,
            poll_interval: Duration::from_secs(2),
            timeout: Duration::from_secs(1),
            url: None,
        };
        let monitor = ConnectionMonitor::from_settings("http://127.0.0.1:8080/health", &settings);
        assert_eq!(monitor.url(), "http://127.0.0.1:8080/health");
        assert_eq!(monitor.policy().max_attempts(), 3);
        assert_eq!(monitor.policy().delay_for(4), Duration::from_secs(4));
        assert_eq!(monitor.poll_interval, Duration::from_secs(2));
    }

    #[test]
    fn state_display() {
        assert_eq!(ConnectionState::Checking.to_string(), "checking");
        assert_eq!(ConnectionState::Connected.to_string(), "connected");
        assert_eq!(ConnectionState::Disconnected.to_string(), "disconnected");
    }
}
