// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable set with copy-on-write cloning.
//!
//! ```text
//! Env
//! data: Option<Arc<EnvData>>
//! clone shares the Arc; first write goes through Arc::make_mut
//! ```

use super::types::{EnvData, EnvKey};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A set of environment variables with copy-on-write semantics.
///
/// Clones share data until one of them is modified. An `Env` is a value
/// handed to a child process; it never touches the environment of the
/// current process.
#[derive(Debug, Clone, Default)]
pub struct Env {
    data: Option<Arc<EnvData>>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: None }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        let data = EnvData::from_vars(vars.into_iter().map(|(k, v)| (EnvKey::new(k), v)).collect());
        Self {
            data: Some(Arc::new(data)),
        }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.data_mut()
            .vars_mut()
            .insert(EnvKey::new(key), value.into());
        self
    }

    /// Sets every pair from `vars`, later pairs winning over existing ones.
    pub fn extend<I, K, V>(&mut self, vars: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let data = self.data_mut();
        for (key, value) in vars {
            data.vars_mut().insert(EnvKey::new(key), value.into());
        }
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.vars().get(&EnvKey::new(key)).map(String::as_str))
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Returns an iterator over environment variables, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .iter()
            .flat_map(|d| d.vars().iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_none_or(|d| d.vars().is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.vars().len())
    }

    /// Returns the data for writing, detaching it from any clones first.
    fn data_mut(&mut self) -> &mut EnvData {
        Arc::make_mut(self.data.get_or_insert_with(Arc::default))
    }
}
