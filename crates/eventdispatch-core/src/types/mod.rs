//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for callbacks and the shared channel map.

pub mod aliases;

pub use aliases::*;
