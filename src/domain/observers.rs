use crate::domain::level::Level;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Callback run after a line has been printed. Receives the level and the
/// values of the call, in order.
pub type Observer = Arc<dyn Fn(Level, &[String]) + Send + Sync>;

/// Handle returned by [`ObserverRegistry::register`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId {
    level: Level,
    seq: u64,
}

impl ObserverId {
    pub fn level(&self) -> Level {
        self.level
    }
}

/// Per-level observer lists.
#[derive(Default)]
pub struct ObserverRegistry {
    next_seq: AtomicU64,
    slots: [RwLock<Vec<(u64, Observer)>>; 4],
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, level: Level, observer: Observer) -> ObserverId {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.slot(level).write().push((seq, observer));
        ObserverId { level, seq }
    }

    /// Returns false if `id` was already removed.
    pub fn unregister(&self, id: ObserverId) -> bool {
        let mut slot = self.slot(id.level).write();
        let before = slot.len();
        slot.retain(|(seq, _)| *seq != id.seq);
        slot.len() != before
    }

    pub fn clear(&self, level: Level) {
        self.slot(level).write().clear();
    }

    pub fn has_observers(&self, level: Level) -> bool {
        !self.slot(level).read().is_empty()
    }

    pub fn count(&self, level: Level) -> usize {
        self.slot(level).read().len()
    }

    /// Copy of the observers registered for `level` at the time of the call.
    pub fn snapshot(&self, level: Level) -> Vec<Observer> {
        self.slot(level)
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect()
    }

    fn slot(&self, level: Level) -> &RwLock<Vec<(u64, Observer)>> {
        &self.slots[level.rank() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_observer(counter: &Arc<AtomicUsize>) -> Observer {
        let counter = Arc::clone(counter);
        Arc::new(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_registry_starts_empty() {
        let registry = ObserverRegistry::new();
        for level in Level::ALL {
            assert!(!registry.has_observers(level));
        }
    }

    #[test]
    fn test_register_is_per_level() {
        let registry = ObserverRegistry::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let id = registry.register(Level::Warn, counting_observer(&counter));

        assert_eq!(id.level(), Level::Warn);
        assert!(registry.has_observers(Level::Warn));
        assert!(!registry.has_observers(Level::Error));
        assert_eq!(registry.snapshot(Level::Warn).len(), 1);
    }

    #[test]
    fn test_unregister_removes_only_that_observer() {
        let registry = ObserverRegistry::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let first = registry.register(Level::Info, counting_observer(&counter));
        let _second = registry.register(Level::Info, counting_observer(&counter));

        assert!(registry.unregister(first));
        assert!(!registry.unregister(first));
        assert_eq!(registry.count(Level::Info), 1);
    }

    #[test]
    fn test_clear_level() {
        let registry = ObserverRegistry::new();
        let counter = Arc::new(AtomicUsize::new(0));
        registry.register(Level::Debug, counting_observer(&counter));
        registry.register(Level::Debug, counting_observer(&counter));
        registry.register(Level::Error, counting_observer(&counter));

        registry.clear(Level::Debug);

        assert!(!registry.has_observers(Level::Debug));
        assert!(registry.has_observers(Level::Error));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let registry = ObserverRegistry::new();
        let counter = Arc::new(AtomicUsize::new(0));
        registry.register(Level::Info, counting_observer(&counter));

        let snapshot = registry.snapshot(Level::Info);
        registry.clear(Level::Info);

        for observer in &snapshot {
            observer(Level::Info, &[]);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
