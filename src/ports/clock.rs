/// Port for reading wall-clock time
pub trait ClockPort: Send + Sync {
    /// Returns milliseconds since the Unix epoch
    fn now(&self) -> f64;
}
