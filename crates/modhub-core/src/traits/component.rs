//! Component and capability model.
//!
//! Components declare the capability tags they implement; resolution and
//! instantiation check conformance against a requested tag instead of
//! inspecting concrete types.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A named interface a component may declare, e.g. `"cache.backend"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(String);

impl Capability {
    /// Creates a capability tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Capability {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// A constructed component instance.
pub trait Component: Send + Sync + fmt::Debug + 'static {
    /// Capability tags this instance implements.
    fn capabilities(&self) -> Vec<Capability>;

    /// Access to the concrete type for downcasting by the host.
    fn as_any(&self) -> &dyn Any;

    /// Returns whether this instance implements `capability`.
    fn implements(&self, capability: &Capability) -> bool {
        self.capabilities().iter().any(|c| c == capability)
    }
}

/// The runtime component space: which fully qualified names exist, what
/// they declare, and how to build them.
pub trait ComponentSpace: Send + Sync + fmt::Debug {
    /// Returns whether `name` denotes a loadable component.
    fn exists(&self, name: &str) -> bool;

    /// Returns whether the component `name` declares `capability`.
    /// Unknown names never satisfy anything.
    fn satisfies(&self, name: &str, capability: &Capability) -> bool;

    /// Constructs a zero-argument instance of `name`.
    fn construct(&self, name: &str) -> Option<Arc<dyn Component>>;
}
