//! Type aliases for the dispatcher's callback storage.
//!
//! `Dispatcher<P>` stores every registered callback behind the same boxed
//! trait object so that closures of different concrete types can share one
//! ordered list per channel.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use eventdispatch_core::types::*;
//!
//! let cb: Callback<str> = Box::new(|name| {
//!     println!("got {name}");
//!     Propagation::Continue
//! });
//! ```

use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;

use crate::dispatcher::Propagation;

// =============================================================================
// CALLBACK TYPES
// =============================================================================

/// A registered channel callback.
///
/// Thread-safe, invoked on the dispatching thread with a borrowed payload.
/// `P` may be unsized (`str`, `[u8]`, `dyn Any + Send + Sync`).
pub type Callback<P> = Box<dyn Fn(&P) -> Propagation + Send + Sync>;

/// Callbacks stored under one registration key, in registration order.
pub type CallbackList<P> = Vec<Callback<P>>;

// =============================================================================
// SHARED STATE TYPES
// =============================================================================

/// Registration key -> callbacks, behind a reader-writer lock.
///
/// Uses `parking_lot::RwLock` so a panicking callback does not poison the
/// map for later dispatches.
pub type ChannelMap<P> = RwLock<HashMap<String, CallbackList<P>>>;

/// Payload type for dispatchers that carry arbitrary values.
///
/// Callbacks narrow with `downcast_ref` and return `Continue` when the value
/// is not the type they handle.
pub type AnyPayload = dyn Any + Send + Sync;
