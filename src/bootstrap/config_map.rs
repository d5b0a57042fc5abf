// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration map parsed from the configuration tool's output.
//!
//! ```text
//! stdout bytes --serde_json--> Value::Object --validate/coerce--> ConfigMap
//!   string        verbatim
//!   number/bool   JSON text ("1", "2.5", "true")
//!   null          ""
//!   array/object  compact JSON
//! ```

use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::FetchError;

/// Flat string-to-string configuration, ready to become environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap(BTreeMap<String, String>);

impl ConfigMap {
    /// Parses the raw output of the configuration tool.
    ///
    /// # Errors
    ///
    /// - `FetchError::MalformedConfig` if `raw` is not JSON, including
    ///   invalid UTF-8 and empty output.
    /// - `FetchError::NotAnObject` if it is JSON but not an object.
    /// - `FetchError::InvalidKey` / `FetchError::InvalidValue` if an entry
    ///   cannot be stored in an environment variable.
    pub fn parse(raw: &[u8]) -> Result<Self, FetchError> {
        let value: Value =
            serde_json::from_slice(raw).map_err(|source| FetchError::MalformedConfig { source })?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self, FetchError> {
        let Value::Object(object) = value else {
            return Err(FetchError::NotAnObject {
                found: json_type_name(&value),
            });
        };

        let mut vars = BTreeMap::new();
        for (key, value) in object {
            validate_key(&key)?;
            let text = value_to_text(value);
            if text.contains('\0') {
                return Err(FetchError::InvalidValue { key });
            }
            vars.insert(key, text);
        }
        Ok(Self(vars))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Variable names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Name/value pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a ConfigMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn validate_key(key: &str) -> Result<(), FetchError> {
    let reason = if key.is_empty() {
        "empty name"
    } else if key.contains('=') {
        "contains '='"
    } else if key.contains('\0') {
        "contains a NUL byte"
    } else {
        return Ok(());
    };
    Err(FetchError::InvalidKey {
        key: key.to_string(),
        reason,
    })
}

/// Text form of a configuration value.
fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
