/// Evaluates `$body` and, with the `log` feature enabled, traces how long that took.
macro_rules! timed {
    ($name:expr, $body:expr) => {{
        #[cfg(feature = "log")]
        let timer = std::time::Instant::now();
        let result = $body;
        #[cfg(feature = "log")]
        log::trace!("{} took {:?}", $name, timer.elapsed());
        result
    }};
}

/// `log::debug!`, but only if the `log` feature is enabled.
macro_rules! debug_log {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)+);
    };
}
