//! Drives a [`DebouncedValue`] from a tokio task.
//!
//! The store lives inside the task; callers talk to it through [`DebounceTask`].
//! Dropping the handle aborts the task, so a pending commit never reaches an owner
//! that has gone away.

use super::clock::Clock;
use super::debounce::{DebounceInterval, DebouncedValue};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Reads tokio's clock so paused test time moves the deadlines too.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

#[derive(Debug)]
enum DebounceMessage<T> {
    Edit(T),
    External(T),
    Flush,
}

pub struct DebounceTask<T> {
    tx: mpsc::UnboundedSender<DebounceMessage<T>>,
    handle: JoinHandle<()>,
}

impl<T> DebounceTask<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(initial: T, on_commit: F, interval: DebounceInterval) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = DebouncedValue::with_clock(initial, on_commit, interval, TokioClock);
        let handle = tokio::spawn(run(store, rx));
        Self { tx, handle }
    }

    pub fn set_value(&self, value: T) -> bool {
        self.tx.send(DebounceMessage::Edit(value)).is_ok()
    }

    pub fn sync_external(&self, value: T) -> bool {
        self.tx.send(DebounceMessage::External(value)).is_ok()
    }

    pub fn flush(&self) -> bool {
        self.tx.send(DebounceMessage::Flush).is_ok()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T> Drop for DebounceTask<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run<T, F>(
    mut store: DebouncedValue<T, F, TokioClock>,
    mut rx: mpsc::UnboundedReceiver<DebounceMessage<T>>,
) where
    T: Clone + PartialEq,
    F: FnMut(T),
{
    loop {
        let deadline = store.next_deadline();
        let wake_at = deadline
            .map(tokio::time::Instant::from_std)
            .unwrap_or_else(|| tokio::time::Instant::now() + Duration::from_secs(3600));

        tokio::select! {
            msg = rx.recv() => match msg {
                Some(DebounceMessage::Edit(value)) => store.set_value(value),
                Some(DebounceMessage::External(value)) => {
                    store.sync_external(value);
                }
                Some(DebounceMessage::Flush) => {
                    store.flush();
                }
                None => break,
            },
            _ = tokio::time::sleep_until(wake_at), if deadline.is_some() => {
                store.poll();
            }
        }
    }
    tracing::trace!("debounce task finished");
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/runtime.rs"]
mod tests;
