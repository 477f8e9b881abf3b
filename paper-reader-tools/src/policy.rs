//! Analysis policy owned by the dispatcher.
//!
//! The policy starts out unset and is replaced wholesale on every committed
//! update; fields omitted from an update become unset rather than keeping
//! their previous value.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_chunking: Option<bool>,
}

impl AnalysisPolicy {
    pub fn new(max_tokens: Option<Number>, enable_chunking: Option<bool>) -> Self {
        Self {
            max_tokens,
            enable_chunking,
        }
    }
}

impl fmt::Display for AnalysisPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.max_tokens {
            Some(n) => write!(f, "max_tokens={n}")?,
            None => write!(f, "max_tokens=unset")?,
        }
        match self.enable_chunking {
            Some(b) => write!(f, ", enable_chunking={b}"),
            None => write!(f, ", enable_chunking=unset"),
        }
    }
}

/// Shared handle to the single policy slot.
///
/// Requests are handled one at a time, so the lock is never contended; it is
/// only held for the duration of a clone or a swap.
#[derive(Debug, Clone, Default)]
pub struct PolicyStore {
    inner: Arc<RwLock<Option<AnalysisPolicy>>>,
}

impl PolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed policy, or `None` before the first commit.
    pub fn current(&self) -> Option<AnalysisPolicy> {
        self.inner.read().clone()
    }

    /// Overwrite the policy, returning whatever was committed before.
    pub fn replace(&self, policy: AnalysisPolicy) -> Option<AnalysisPolicy> {
        self.inner.write().replace(policy)
    }
}
