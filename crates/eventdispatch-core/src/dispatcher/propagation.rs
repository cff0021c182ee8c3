//! Callback return signal.

use serde::{Deserialize, Serialize};

/// Whether a dispatch should keep invoking the remaining callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Propagation {
    /// Invoke the next matching callback.
    #[default]
    Continue,
    /// Skip every remaining callback for this dispatch.
    Stop,
}

impl Propagation {
    /// True when the dispatch should stop after this callback
    pub fn is_stop(self) -> bool {
        self == Propagation::Stop
    }
}

impl From<bool> for Propagation {
    fn from(propagate: bool) -> Self {
        if propagate {
            Propagation::Continue
        } else {
            Propagation::Stop
        }
    }
}

impl From<Propagation> for bool {
    fn from(p: Propagation) -> Self {
        p == Propagation::Continue
    }
}

impl std::fmt::Display for Propagation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Propagation::Continue => write!(f, "continue"),
            Propagation::Stop => write!(f, "stop"),
        }
    }
}
