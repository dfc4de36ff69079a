use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use stockkeep_core::{DomainError, DomainResult};

/// Name of a stock-keeping unit. Never empty; whitespace is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        Self::try_from(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(value))
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An add request arriving without static types (JSON input, scripting glue).
///
/// `Empty` preserves the silent no-op for an empty item name; every other
/// malformed shape is a validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UntypedAdd {
    Empty,
    Entry { item: String, qty: i64 },
}

impl UntypedAdd {
    pub(crate) fn parse(item: &JsonValue, qty: &JsonValue) -> DomainResult<Self> {
        let item = match item {
            JsonValue::String(s) => s,
            JsonValue::Null => return Ok(Self::Empty),
            other => {
                return Err(DomainError::validation(format!(
                    "item name must be a string, got {}",
                    json_kind(other)
                )));
            }
        };
        if item.is_empty() {
            return Ok(Self::Empty);
        }

        let qty = qty.as_i64().ok_or_else(|| {
            DomainError::validation(format!(
                "quantity for {item:?} must be an integer, got {}",
                json_kind(qty)
            ))
        })?;

        Ok(Self::Entry {
            item: item.clone(),
            qty,
        })
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_f64() => "float",
        JsonValue::Number(n) if n.as_i64().is_none() => "integer out of range",
        JsonValue::Number(_) => "integer",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
