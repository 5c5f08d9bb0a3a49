use tracing::Level;

#[derive(Debug, Clone, Copy)]
pub struct TraceOption {
    /// Tracing level to use if a call is accepted.
    pub ok_level: Level,
    /// Tracing level to use if a call is rejected or fails.
    pub error_level: Level,
}

impl TraceOption {
    /// For calls submitted by participants.
    pub const LOUD: Self = Self {
        ok_level: Level::INFO,
        error_level: Level::WARN,
    };
    /// For bulk replays, e.g. property tests.
    pub const MUTE: Self = Self {
        ok_level: Level::TRACE,
        error_level: Level::TRACE,
    };
}

impl Default for TraceOption {
    fn default() -> Self {
        Self::LOUD
    }
}

/// Emit a tracing event at a level only known at runtime.
#[macro_export]
macro_rules! dyn_event {
    ($lvl:expr, $($arg:tt)+) => {{
        let lvl: ::tracing::Level = $lvl;
        if lvl == ::tracing::Level::TRACE {
            ::tracing::trace!($($arg)+);
        } else if lvl == ::tracing::Level::DEBUG {
            ::tracing::debug!($($arg)+);
        } else if lvl == ::tracing::Level::INFO {
            ::tracing::info!($($arg)+);
        } else if lvl == ::tracing::Level::WARN {
            ::tracing::warn!($($arg)+);
        } else {
            ::tracing::error!($($arg)+);
        }
    }};
}
