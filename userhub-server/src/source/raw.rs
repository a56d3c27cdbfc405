//! Raw entry shape returned by the random-user API

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawLogin {
    #[serde(default)]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawLocation {
    #[serde(default)]
    pub city: Option<String>,
}

/// One external user entry. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub login: Option<RawLogin>,
    #[serde(default)]
    pub name: Option<RawName>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<RawLocation>,
}

impl RawUser {
    /// Lenient conversion: an entry that doesn't fit the shape yields an
    /// all-absent record rather than failing the whole page.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Extract the `results` array from a page body.
///
/// Returns `None` when the body isn't an object with a `results` array.
pub(crate) fn page_entries(body: Value) -> Option<Vec<RawUser>> {
    match body {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => Some(items.into_iter().map(RawUser::from_value).collect()),
            _ => None,
        },
        _ => None,
    }
}
