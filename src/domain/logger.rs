use crate::config::LoggerConfig;
use crate::domain::format::{format_line, format_timestamp};
use crate::domain::level::Level;
use crate::domain::observers::{Observer, ObserverId, ObserverRegistry};
use crate::platform::Platform;
use std::fmt::Display;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Leveled console logger.
///
/// Every call below the configured minimum level is dropped before any
/// formatting happens. Calls at or above it print one line synchronously and
/// then hand each registered observer for that level to the platform
/// scheduler, so observers always run after the line is visible and never on
/// the caller's stack.
///
/// `Logger` is a cheap handle: clones share the same level and observers.
/// Build one in the application's composition root and pass it around.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    level: AtomicU8,
    observers: ObserverRegistry,
    platform: Platform,
}

impl Logger {
    /// Creates a logger filtering at [`Level::Info`].
    pub fn new(platform: Platform) -> Self {
        Self::with_level(platform, Level::default())
    }

    pub fn with_level(platform: Platform, level: Level) -> Self {
        Self {
            inner: Arc::new(Inner {
                level: AtomicU8::new(level.rank()),
                observers: ObserverRegistry::new(),
                platform,
            }),
        }
    }

    pub fn from_config(platform: Platform, config: &LoggerConfig) -> Self {
        Self::with_level(platform, config.level)
    }

    /// Sets the minimum level from its name. Unrecognized names select
    /// [`Level::Error`].
    pub fn set_level(&self, name: &str) {
        self.set_level_to(Level::from_name_or_error(name));
    }

    pub fn set_level_to(&self, level: Level) {
        self.inner.level.store(level.rank(), Ordering::SeqCst);
    }

    pub fn level(&self) -> Level {
        Level::from_rank(self.inner.level.load(Ordering::SeqCst))
    }

    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    pub fn platform(&self) -> &Platform {
        &self.inner.platform
    }

    pub fn debug<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.log(Level::Debug, values);
    }

    pub fn info<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.log(Level::Info, values);
    }

    pub fn warn<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.log(Level::Warn, values);
    }

    pub fn error<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.log(Level::Error, values);
    }

    pub fn log<I>(&self, level: Level, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        if !self.is_enabled(level) {
            return;
        }

        let values: Arc<[String]> = values.into_iter().map(|v| v.to_string()).collect();
        let timestamp = format_timestamp(self.inner.platform.clock().now());
        let line = format_line(&timestamp, level, &values);
        self.inner.platform.console().write(level.channel(), &line);

        self.notify_shared(level, values);
    }

    /// `"<timestamp> <TAG>:"` for a line printed now.
    pub fn line_prefix(&self, level: Level) -> String {
        let timestamp = format_timestamp(self.inner.platform.clock().now());
        format_line(&timestamp, level, &[])
    }

    /// Schedules the observers of `level` without printing or level check.
    /// For front ends that print through their own path.
    pub fn notify<I>(&self, level: Level, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        if !self.inner.observers.has_observers(level) {
            return;
        }
        let values: Arc<[String]> = values.into_iter().map(|v| v.to_string()).collect();
        self.notify_shared(level, values);
    }

    fn notify_shared(&self, level: Level, values: Arc<[String]>) {
        if !self.inner.observers.has_observers(level) {
            return;
        }

        // One task per observer so a failing observer does not starve the others.
        for observer in self.inner.observers.snapshot(level) {
            let values = Arc::clone(&values);
            self.inner
                .platform
                .scheduler()
                .defer(Box::new(move || observer(level, &values)));
        }
    }

    pub fn register<F>(&self, level: Level, observer: F) -> ObserverId
    where
        F: Fn(Level, &[String]) + Send + Sync + 'static,
    {
        self.register_arc(level, Arc::new(observer))
    }

    pub fn register_arc(&self, level: Level, observer: Observer) -> ObserverId {
        self.inner.observers.register(level, observer)
    }

    pub fn unregister(&self, id: ObserverId) -> bool {
        self.inner.observers.unregister(id)
    }

    pub fn clear_observers(&self, level: Level) {
        self.inner.observers.clear(level);
    }

    pub fn has_observers(&self, level: Level) -> bool {
        self.inner.observers.has_observers(level)
    }

    pub fn on_debug<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        self.register(Level::Debug, move |_, values| observer(values))
    }

    pub fn on_info<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        self.register(Level::Info, move |_, values| observer(values))
    }

    pub fn on_warn<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        self.register(Level::Warn, move |_, values| observer(values))
    }

    pub fn on_error<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        self.register(Level::Error, move |_, values| observer(values))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Platform::default())
    }
}
