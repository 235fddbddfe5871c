//! Variadic logging macros.
//!
//! `log_info!(logger, "user", id, "connected")` renders each value with
//! `Display` and forwards them to the matching `Logger` method. The level
//! check runs first, so filtered calls never format their arguments.

#[macro_export]
macro_rules! log_at {
    ($logger:expr, $lvl:expr $(, $value:expr)* $(,)?) => {{
        let __logger = &$logger;
        let __level = $lvl;
        if __logger.is_enabled(__level) {
            let __values: ::std::vec::Vec<::std::string::String> =
                ::std::vec![$(::std::string::ToString::to_string(&$value)),*];
            __logger.log(__level, __values);
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Level::Debug $(, $value)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Level::Info $(, $value)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Level::Warn $(, $value)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Level::Error $(, $value)*)
    };
}
