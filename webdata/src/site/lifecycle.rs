use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared liveness flag for work started by a mounted view. Completions that
/// arrive after [`MountGuard::retire`] must be dropped by the caller.
#[derive(Debug, Clone)]
pub struct MountGuard {
    live: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self { live: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn retire(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Runs `apply` only while still mounted. Returns whether it ran.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_live() {
            apply(value);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let guard = MountGuard::new();
        let in_flight = guard.clone();
        let mut seen = Vec::new();
        assert!(in_flight.deliver(1, |v| seen.push(v)));
        guard.retire();
        assert!(!in_flight.is_live());
        assert!(!in_flight.deliver(2, |v| seen.push(v)));
        assert_eq!(seen, vec![1]);
    }
}
