//! Two-tier value store.
//!
//! The local copy is edited synchronously and is what the editing surface shows.
//! The owner's (external) copy is only updated through the commit callback, after
//! the value has been left alone for one debounce interval.
//!
//! There is no background timer: the pending commit is a deadline, and the host
//! loop calls [`DebouncedValue::poll`] (or sleeps until
//! [`DebouncedValue::next_deadline`]) to let it fire.

use super::clock::{Clock, SystemClock};
use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceInterval(Duration);

impl DebounceInterval {
    /// `0` is treated like an unset interval and falls back to the default.
    pub fn from_millis(ms: u64) -> Self {
        let ms = if ms == 0 { DEFAULT_DEBOUNCE_MS } else { ms };
        Self(Duration::from_millis(ms))
    }

    pub fn from_option(ms: Option<u64>) -> Self {
        Self::from_millis(ms.unwrap_or(0))
    }

    pub fn as_duration(self) -> Duration {
        self.0
    }

    pub fn as_millis(self) -> u64 {
        self.0.as_millis() as u64
    }
}

impl Default for DebounceInterval {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DEBOUNCE_MS)
    }
}

pub struct DebouncedValue<T, F, C = SystemClock> {
    local: T,
    external: T,
    pending: Option<Instant>,
    interval: DebounceInterval,
    on_commit: F,
    clock: C,
}

impl<T, F> DebouncedValue<T, F, SystemClock>
where
    T: Clone + PartialEq,
    F: FnMut(T),
{
    pub fn new(initial: T, on_commit: F, interval: DebounceInterval) -> Self {
        Self::with_clock(initial, on_commit, interval, SystemClock)
    }
}

impl<T, F, C> DebouncedValue<T, F, C>
where
    T: Clone + PartialEq,
    F: FnMut(T),
    C: Clock,
{
    pub fn with_clock(initial: T, on_commit: F, interval: DebounceInterval, clock: C) -> Self {
        Self {
            local: initial.clone(),
            external: initial,
            pending: None,
            interval,
            on_commit,
            clock,
        }
    }

    pub fn value(&self) -> &T {
        &self.local
    }

    /// Last value the owner handed us.
    pub fn external(&self) -> &T {
        &self.external
    }

    pub fn interval(&self) -> DebounceInterval {
        self.interval
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
    }

    /// Local edit. Always cancels the outstanding deadline first; a new one is
    /// only armed when the edit diverges from the owner's value.
    pub fn set_value(&mut self, value: T) {
        self.pending = None;
        self.local = value;
        if self.local != self.external {
            let deadline = self.clock.now() + self.interval.as_duration();
            self.pending = Some(deadline);
            tracing::trace!(
                interval_ms = self.interval.as_millis(),
                "debounced commit scheduled"
            );
        }
    }

    /// The owner's value changed. Local edits that were not committed yet are
    /// discarded together with their deadline. Returns `false` when `value`
    /// equals the last known external value.
    pub fn sync_external(&mut self, value: T) -> bool {
        if value == self.external {
            return false;
        }

        if self.pending.take().is_some() {
            tracing::debug!("external value replaced a pending local edit");
        }
        self.local = value.clone();
        self.external = value;
        true
    }

    /// Fires the commit if its deadline has passed.
    ///
    /// The commit carries the current local value even if it has drifted back to
    /// the external one since the deadline was armed.
    pub fn poll(&mut self) -> bool {
        let Some(deadline) = self.pending else {
            return false;
        };
        let now = self.clock.now();
        if now < deadline {
            return false;
        }

        let overshoot = now.duration_since(deadline);
        if overshoot.as_millis() > 5 {
            tracing::debug!(
                overshoot_ms = overshoot.as_millis() as u64,
                "debounced commit overshoot"
            );
        }

        self.commit();
        true
    }

    /// Commits immediately if a commit is pending.
    pub fn flush(&mut self) -> bool {
        if self.pending.is_none() {
            return false;
        }
        self.commit();
        true
    }

    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    fn commit(&mut self) {
        self.pending = None;
        tracing::trace!("debounced commit fired");
        (self.on_commit)(self.local.clone());
    }
}

impl<T, F, C> Drop for DebouncedValue<T, F, C> {
    fn drop(&mut self) {
        if self.pending.take().is_some() {
            tracing::trace!("pending commit dropped with its store");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/debounce.rs"]
mod tests;
