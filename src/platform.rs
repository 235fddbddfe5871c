/// Platform - Dependency injection container for the logger's ports.
///
/// Every port is held as `Arc<dyn Trait>` so callers can swap in their own
/// sink, clock or scheduler; the defaults are the adapters for the current
/// build target.
use crate::ports::{ClockPort, ConsolePort, EnvironmentPort, SchedulerPort};
use std::sync::Arc;

#[derive(Clone)]
pub struct Platform {
    console: Arc<dyn ConsolePort>,
    clock: Arc<dyn ClockPort>,
    scheduler: Arc<dyn SchedulerPort>,
    environment: Arc<dyn EnvironmentPort>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            console: Arc::new(crate::adapters::ConsoleLogger::new()),
            clock: Arc::new(crate::adapters::Clock::new()),
            scheduler: crate::adapters::scheduler(),
            environment: Arc::new(crate::adapters::Environment::new()),
        }
    }

    pub fn with_console(mut self, console: Arc<dyn ConsolePort>) -> Self {
        self.console = console;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn ClockPort>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_scheduler(mut self, scheduler: Arc<dyn SchedulerPort>) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn with_environment(mut self, environment: Arc<dyn EnvironmentPort>) -> Self {
        self.environment = environment;
        self
    }

    #[inline]
    pub fn console(&self) -> &dyn ConsolePort {
        self.console.as_ref()
    }

    #[inline]
    pub fn clock(&self) -> &dyn ClockPort {
        self.clock.as_ref()
    }

    #[inline]
    pub fn scheduler(&self) -> &dyn SchedulerPort {
        self.scheduler.as_ref()
    }

    #[inline]
    pub fn environment(&self) -> &dyn EnvironmentPort {
        self.environment.as_ref()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
