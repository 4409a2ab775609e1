//! In-memory store of shell state keyed by browser session.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::shell::ShellState;

/// Default idle timeout (30 minutes).
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// Default cap on live sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Entry {
    state: ShellState,
    last_seen: Instant,
}

impl Entry {
    fn new(now: Instant) -> Self {
        Self {
            state: ShellState::default(),
            last_seen: now,
        }
    }

    fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.last_seen) > ttl
    }
}

/// Thread-safe map from session ID to [`ShellState`].
///
/// Sessions idle for longer than the TTL are dropped, and the store never
/// holds more than `max_sessions`: creating a session past the cap evicts
/// the least recently used one.
///
/// Cloning the store is cheap; clones share the same sessions.
#[derive(Debug, Clone)]
pub struct ShellStore {
    sessions: Arc<RwLock<HashMap<String, Entry>>>,
    ttl: Duration,
    max_sessions: usize,
}

impl Default for ShellStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_SESSION_TTL, DEFAULT_MAX_SESSIONS)
    }
}

impl ShellStore {
    /// Create an empty store with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with an idle timeout and a session cap.
    ///
    /// A cap of zero is treated as one.
    #[must_use]
    pub fn with_limits(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::default(),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Start a new session in the initial state and return its ID.
    pub fn create(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let now = Instant::now();

        let mut guard = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        guard.retain(|_, entry| !entry.is_expired(self.ttl, now));

        while guard.len() >= self.max_sessions {
            let Some(oldest) = guard
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| id.clone())
            else {
                break;
            };
            guard.remove(&oldest);
        }

        guard.insert(id.clone(), Entry::new(now));
        id
    }

    /// Snapshot of a session's state.
    ///
    /// Counts as activity. Returns `None` for unknown or expired sessions.
    pub fn get(&self, id: &str) -> Option<ShellState> {
        self.update(id, |_| {})
    }

    /// Apply `f` to a session's state under the write lock.
    ///
    /// Returns the state after the update, or `None` for an unknown or
    /// expired session.
    pub fn update<F>(&self, id: &str, f: F) -> Option<ShellState>
    where
        F: FnOnce(&mut ShellState),
    {
        let now = Instant::now();
        let mut guard = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if guard.get(id)?.is_expired(self.ttl, now) {
            guard.remove(id);
            return None;
        }

        let entry = guard.get_mut(id)?;
        entry.last_seen = now;
        f(&mut entry.state);
        Some(entry.state)
    }

    /// Remove all sessions idle for longer than the TTL.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired(&self) -> usize {
        let now = Instant::now();
        let mut guard = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|_, entry| !entry.is_expired(self.ttl, now));
        before - guard.len()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store holds no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Idle timeout after which a session is dropped.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::shell::NavItem;

    #[test]
    fn test_create_starts_in_default_state() {
        let store = ShellStore::new();
        let id = store.create();

        assert_eq!(store.get(&id), Some(ShellState::default()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_is_per_session() {
        let store = ShellStore::new();
        let a = store.create();
        let b = store.create();

        let after = store.update(&a, ShellState::toggle_sidebar).unwrap();
        assert!(after.sidebar_collapsed);
        assert!(!store.get(&b).unwrap().sidebar_collapsed);
    }

    #[test]
    fn test_clones_share_sessions() {
        let store = ShellStore::new();
        let clone = store.clone();
        assert!(store.is_empty());
        let id = store.create();

        clone.update(&id, |s| {
            s.navigate(NavItem::Home);
        });
        assert!(store.get(&id).is_some());
        assert_eq!(clone.len(), 1);
    }

    #[test]
    fn test_unknown_session() {
        let store = ShellStore::new();
        assert_eq!(store.get("missing"), None);
        assert_eq!(store.update("missing", ShellState::toggle_sidebar), None);
    }

    #[test]
    fn test_idle_sessions_expire() {
        let store = ShellStore::with_limits(Duration::from_millis(50), 100);
        let stale = store.create();
        let other = store.create();

        thread::sleep(Duration::from_millis(120));

        assert_eq!(store.get(&stale), None);
        assert_eq!(store.update(&stale, ShellState::toggle_sidebar), None);

        // Creating a session sweeps whatever else has gone idle.
        let fresh = store.create();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&other), None);
        assert!(store.get(&fresh).is_some());
    }

    #[test]
    fn test_cleanup_expired_counts_removed() {
        let store = ShellStore::with_limits(Duration::from_millis(50), 100);
        for _ in 0..3 {
            store.create();
        }

        thread::sleep(Duration::from_millis(120));
        let kept = store.create();

        assert_eq!(store.cleanup_expired(), 0, "create already swept them");
        assert_eq!(store.len(), 1);
        assert!(store.get(&kept).is_some());

        thread::sleep(Duration::from_millis(120));
        assert_eq!(store.cleanup_expired(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_activity_keeps_session_alive() {
        let store = ShellStore::with_limits(Duration::from_millis(150), 100);
        let id = store.create();

        for _ in 0..4 {
            thread::sleep(Duration::from_millis(60));
            assert!(store.get(&id).is_some());
        }
    }

    #[test]
    fn test_cap_evicts_least_recently_used() {
        let store = ShellStore::with_limits(DEFAULT_SESSION_TTL, 3);
        let a = store.create();
        thread::sleep(Duration::from_millis(2));
        let b = store.create();
        thread::sleep(Duration::from_millis(2));
        let c = store.create();
        thread::sleep(Duration::from_millis(2));

        // Touching `a` makes `b` the oldest.
        store.get(&a);
        thread::sleep(Duration::from_millis(2));
        let d = store.create();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(&b), None);
        for id in [&a, &c, &d] {
            assert!(store.get(id).is_some());
        }

        for _ in 0..50 {
            store.create();
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_zero_cap_still_holds_one() {
        let store = ShellStore::with_limits(DEFAULT_SESSION_TTL, 0);
        let id = store.create();
        assert!(store.get(&id).is_some());
        assert_eq!(store.len(), 1);
    }
}
