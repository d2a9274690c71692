//! Hook data types: implementations discovered on disk and the payload
//! shared across a dispatch pass.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a hook's logic lives and how to invoke it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookImplementation {
    /// The hook file this implementation was discovered from.
    pub source: PathBuf,
    /// Callable identifier, `<module>_hook_<hook>`.
    pub callable: String,
}

/// Builds the callable identifier for `hook` in `module`.
pub fn callable_id(module: &str, hook: &str) -> String {
    format!("{module}_hook_{hook}")
}

/// Payload passed by mutable reference to every hook in a pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookPayload {
    /// Arbitrary data keyed by string.
    pub data: HashMap<String, serde_json::Value>,
    /// Timestamp the payload was created.
    pub created_at: DateTime<Utc>,
}

impl Default for HookPayload {
    fn default() -> Self {
        Self::new()
    }
}

impl HookPayload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Inserts a value.
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    /// Inserts a string value.
    pub fn with_string(self, key: &str, value: &str) -> Self {
        self.with_data(key, serde_json::json!(value))
    }

    /// Sets a value in place, returning the previous one.
    pub fn set(&mut self, key: &str, value: serde_json::Value) -> Option<serde_json::Value> {
        self.data.insert(key.to_string(), value)
    }

    /// Appends `value` to the array stored at `key`, creating it if needed.
    /// A non-array value at `key` is replaced.
    pub fn push(&mut self, key: &str, value: serde_json::Value) {
        let slot = self
            .data
            .entry(key.to_string())
            .or_insert_with(|| serde_json::Value::Array(Vec::new()));
        match slot {
            serde_json::Value::Array(items) => items.push(value),
            other => *other = serde_json::Value::Array(vec![value]),
        }
    }

    /// Gets a value by key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Gets a string value.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }

    /// Gets an i64 value.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.data.get(key).and_then(|v| v.as_i64())
    }

    /// Gets a bool value.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.data.get(key).and_then(|v| v.as_bool())
    }
}

/// Summary of a completed dispatch pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    /// The hook that was dispatched.
    pub hook: String,
    /// Modules whose implementation ran, in invocation order.
    pub invoked: Vec<String>,
}
