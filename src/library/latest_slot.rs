use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::Duration;

/// Single-value hand-off between threads. A new value replaces whatever was
/// waiting, so a slow reader only ever sees the most recent one.
pub struct LatestSlot<T> {
    inner: Arc<(Mutex<Option<T>>, Condvar)>,
}

impl<T> Clone for LatestSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new((Mutex::new(None), Condvar::new())),
        }
    }

    fn value(&self) -> MutexGuard<'_, Option<T>> {
        self.inner.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stores `value`, returning the unread value it replaced.
    pub fn put(&self, value: T) -> Option<T> {
        let replaced = self.value().replace(value);
        self.inner.1.notify_one();
        replaced
    }

    pub fn take(&self) -> Option<T> {
        self.value().take()
    }

    /// Waits up to `timeout` for a value and takes it.
    pub fn take_timeout(&self, timeout: Duration) -> Option<T> {
        let guard = self.value();
        let (mut guard, _) = self
            .inner
            .1
            .wait_timeout_while(guard, timeout, |value| value.is_none())
            .unwrap_or_else(|e| e.into_inner());
        guard.take()
    }
}

impl<T: Clone> LatestSlot<T> {
    /// Reads the current value without consuming it.
    pub fn peek(&self) -> Option<T> {
        self.value().clone()
    }
}
