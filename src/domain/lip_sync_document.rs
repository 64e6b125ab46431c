use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mouth-cue timing produced by the lip-sync analyzer. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LipSyncDocument(Value);

impl LipSyncDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}
