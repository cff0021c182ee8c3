//! # eventdispatch core
//!
//! In-process publish/subscribe with hierarchical channel names.
//! Provides the dispatcher, channel-name matching, configuration and
//! error types.

pub mod dispatcher;
pub mod error;
pub mod types;

pub use dispatcher::{DispatchOutcome, Dispatcher, DispatcherConfig, Propagation};

pub use error::{DispatchError, Result};

pub use types::{AnyPayload, Callback, CallbackList, ChannelMap};

/// Dispatcher whose payload can be any `Send + Sync` value.
///
/// Callbacks narrow the payload with `downcast_ref` and decline (return
/// `Continue`) when it is not the type they handle.
pub type AnyDispatcher = Dispatcher<AnyPayload>;
