//! # Dispatcher Module
//!
//! Synchronous in-process publish/subscribe keyed by channel name.
//!
//! ## Overview
//!
//! - Callbacks register against an exact channel (`user.created`) or a
//!   single-level wildcard (`user.*`)
//! - Dispatch runs the wildcard group first, then the exact group, each in
//!   registration order
//! - A callback returning [`Propagation::Stop`] (or `false`) ends the dispatch
//!
//! ## Usage
//!
//! ```rust
//! use eventdispatch_core::dispatcher::{Dispatcher, Propagation};
//!
//! #[derive(Debug)]
//! struct UserCreated {
//!     id: u64,
//! }
//!
//! let dispatcher: Dispatcher<UserCreated> = Dispatcher::new();
//!
//! dispatcher.on("user.*", |ev: &UserCreated| {
//!     println!("user event for {}", ev.id);
//!     Propagation::Continue
//! });
//! dispatcher.on("user.created", |_: &UserCreated| true);
//!
//! let outcome = dispatcher.dispatch("user.created", &UserCreated { id: 1 });
//! assert_eq!(outcome.invoked, 2);
//! ```

mod bus;
pub mod channel;
mod propagation;

pub use bus::*;
pub use propagation::*;
