use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};

/// A player record as persisted in the collection file.
///
/// Only `id` is guaranteed to be present; everything else is whatever the
/// client sent. Fields that are `None` are omitted on serialization, so a
/// full replace that drops a field really removes it from the file. Fields
/// outside the known three are kept verbatim in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for POST / - any subset of fields, unrecognized ones pass through.
#[derive(Debug, Deserialize)]
pub struct CreatePlayer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub rank: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreatePlayer {
    /// Build a Player with a server-assigned id. A client-supplied `id`
    /// lands in the passthrough map and is discarded here.
    pub fn into_player(self, id: String) -> Player {
        let mut extra = self.extra;
        extra.remove("id");
        Player {
            id,
            name: self.name,
            country: self.country,
            rank: self.rank,
            extra,
        }
    }
}

/// Payload for PUT /:id - replaces name, country and rank wholesale.
/// Fields missing from the request become missing on the record.
#[derive(Debug, Deserialize)]
pub struct UpdatePlayer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub rank: Option<Value>,
}

/// Payload for PATCH /:id - each field is applied only when truthy.
#[derive(Debug, Deserialize)]
pub struct PatchPlayer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub rank: Option<Value>,
}

/// JavaScript truthiness for an untyped rank value: null, false, 0, NaN
/// and "" are falsy, everything else is truthy. A falsy patch value is
/// silently dropped and the record keeps its old field.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
