//! Dispatcher implementation.
//!
//! Provides the core Dispatcher struct, its configuration, and the
//! per-dispatch outcome report.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::channel;
use super::propagation::Propagation;
use crate::error::{DispatchError, Result};
use crate::types::{Callback, ChannelMap};

/// Configuration for the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Namespace separator between channel segments.
    pub separator: char,
    /// Trailing marker that turns a registration into a wildcard.
    pub wildcard: char,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            separator: '.',
            wildcard: '*',
        }
    }
}

impl DispatcherConfig {
    /// Check that the separator and wildcard marker can be told apart
    pub fn validate(&self) -> Result<()> {
        if self.separator == self.wildcard {
            return Err(DispatchError::InvalidConfig {
                reason: format!(
                    "separator and wildcard are both {:?}",
                    self.separator
                ),
            });
        }
        Ok(())
    }
}

/// What a single dispatch did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// Number of callbacks invoked, including the one that stopped propagation.
    pub invoked: usize,
    /// Whether a callback returned [`Propagation::Stop`].
    pub stopped: bool,
}

impl DispatchOutcome {
    /// True when no registered callback matched the name
    pub fn is_unmatched(&self) -> bool {
        self.invoked == 0
    }
}

/// In-process publish/subscribe dispatcher
///
/// Callbacks are registered against exact channels (`user.created`) or
/// single-level wildcards (`user.*`) and invoked synchronously by
/// [`Dispatcher::dispatch`]. Wildcard callbacks run before exact ones;
/// within each group registration order is kept.
///
/// Callbacks run while the channel map is read-locked. A callback may
/// dispatch again on the same dispatcher, but must not call
/// [`Dispatcher::on`] on it, since that waits for the read lock to clear.
pub struct Dispatcher<P: ?Sized> {
    /// Registration key -> callbacks
    channels: ChannelMap<P>,
    /// Configuration
    config: DispatcherConfig,
}

impl<P: ?Sized> Dispatcher<P> {
    /// Create a new dispatcher with default configuration
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            config: DispatcherConfig::default(),
        }
    }

    /// Create a new dispatcher with custom configuration
    pub fn with_config(config: DispatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            channels: RwLock::new(HashMap::new()),
            config,
        })
    }

    /// Register a callback for a channel
    ///
    /// A trailing wildcard marker is stripped before storing, so `user.*`
    /// lands under `user.` and fires for `user.created`, `user.updated` and
    /// so on. Any name is accepted; see [`Dispatcher::try_on`] for the
    /// validating variant.
    ///
    /// The callback may return [`Propagation`] or `bool` (`false` stops
    /// propagation).
    pub fn on<F, R>(&self, name: &str, callback: F)
    where
        F: Fn(&P) -> R + Send + Sync + 'static,
        R: Into<Propagation>,
    {
        let key = channel::registration_key(name, self.config.wildcard);
        let callback: Callback<P> =
            Box::new(move |payload: &P| -> Propagation { callback(payload).into() });

        let mut channels = self.channels.write();
        let callbacks = channels.entry(key.to_string()).or_default();
        callbacks.push(callback);
        tracing::debug!(
            channel = name,
            key,
            callbacks = callbacks.len(),
            "Callback registered"
        );
    }

    /// Register a callback after checking the channel name is well formed
    ///
    /// Rejects empty names, exact names ending in the separator, and
    /// wildcard markers anywhere but the final segment (`user.cre*`,
    /// `event.*.name`).
    pub fn try_on<F, R>(&self, name: &str, callback: F) -> Result<()>
    where
        F: Fn(&P) -> R + Send + Sync + 'static,
        R: Into<Propagation>,
    {
        channel::validate_pattern(name, self.config.separator, self.config.wildcard)?;
        self.on(name, callback);
        Ok(())
    }

    /// Dispatch a payload to every callback matching `name`
    ///
    /// One trailing separator is stripped first (`event.` is `event`).
    /// Callbacks registered under the parent wildcard run first, then the
    /// exact-name callbacks. Delivery stops after the first callback that
    /// returns [`Propagation::Stop`]. An unmatched name is a no-op.
    ///
    /// A panicking callback unwinds through this call and skips the rest.
    pub fn dispatch(&self, name: &str, payload: &P) -> DispatchOutcome {
        let name = channel::normalize(name, self.config.separator);
        let prefix = channel::wildcard_prefix(name, self.config.separator);

        let channels = self.channels.read_recursive();
        let wildcard = prefix.and_then(|prefix| channels.get(prefix));
        // `a..` normalizes to `a.`, which is also its own wildcard prefix
        let exact = if prefix == Some(name) {
            None
        } else {
            channels.get(name)
        };

        let mut outcome = DispatchOutcome::default();
        for callback in wildcard.into_iter().chain(exact).flatten() {
            outcome.invoked += 1;
            if callback(payload).is_stop() {
                outcome.stopped = true;
                tracing::debug!(
                    channel = name,
                    invoked = outcome.invoked,
                    "Propagation stopped"
                );
                break;
            }
        }

        tracing::trace!(channel = name, invoked = outcome.invoked, "Dispatched");
        outcome
    }

    /// Get the number of registration keys
    pub fn channel_count(&self) -> usize {
        self.channels.read().len()
    }

    /// Get the number of callbacks stored under the registration key of `name`
    pub fn callback_count(&self, name: &str) -> usize {
        let key = channel::registration_key(name, self.config.wildcard);
        self.channels.read().get(key).map_or(0, Vec::len)
    }

    /// True when nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.channels.read().is_empty()
    }

    /// Get the current configuration
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }
}

impl<P: ?Sized> Default for Dispatcher<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized> std::fmt::Debug for Dispatcher<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("channels", &self.channel_count())
            .field("config", &self.config)
            .finish()
    }
}
