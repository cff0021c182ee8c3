//! # eventdispatch
//!
//! In-process publish/subscribe for Rust applications:
//! - Exact channels (`user.created`) and single-level wildcards (`user.*`)
//! - Synchronous delivery on the publishing thread
//! - Callbacks can stop propagation to the rest of the list
//!
//! ## Architecture
//!
//! 1. **eventdispatch-core** - Dispatcher, channel matching, config, errors
//! 2. **eventdispatch** - This facade: re-exports and logging setup
//!
//! ## Example
//!
//! ```rust
//! use eventdispatch::{Dispatcher, Propagation};
//!
//! let dispatcher: Dispatcher<str> = Dispatcher::new();
//! dispatcher.on("user.*", |name: &str| {
//!     println!("user event: {name}");
//!     Propagation::Continue
//! });
//!
//! assert_eq!(dispatcher.dispatch("user.created", "alice").invoked, 1);
//! ```

pub use eventdispatch_core::dispatcher::channel;
pub use eventdispatch_core::{
    AnyDispatcher, AnyPayload, Callback, CallbackList, ChannelMap, DispatchError, DispatchOutcome,
    Dispatcher, DispatcherConfig, Propagation, Result,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for [`init_logging_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per record
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
/// - Thread ids and names, so concurrent dispatches can be told apart
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Pretty)
}

/// Initialize logging with the given output format
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_line_number(true)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_thread_ids(true)
                .with_thread_names(true)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    tracing::debug!(version = VERSION, ?format, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // only this test installs a subscriber in the test binary
        init_logging_with(LogFormat::Json).expect("first init");
        assert!(init_logging().is_err());
    }

    #[test]
    fn test_config_from_host_settings() {
        let settings = r#"{ "events": { "separator": "/" } }"#;
        let value: serde_json::Value = serde_json::from_str(settings).expect("Should parse");
        let config: DispatcherConfig =
            serde_json::from_value(value["events"].clone()).expect("Should deserialize");

        let dispatcher: Dispatcher<str> =
            Dispatcher::with_config(config).expect("valid config");
        dispatcher.on("jobs/*", |_| true);
        assert_eq!(dispatcher.dispatch("jobs/done/", "").invoked, 1);
    }

    #[test]
    fn test_channel_helpers_reexported() {
        assert_eq!(channel::wildcard_prefix("user.created", '.'), Some("user."));
    }
}
