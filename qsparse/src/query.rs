// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    decode::{decode_uri_component, decode_uri_component_opt},
    errors::DecodeError,
    strings::split_delim_str,
};
use std::{collections::HashMap, str::FromStr};

/// How a component without `=` is rendered into a text-only map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingValue {
    /// The literal text `undefined`.
    #[default]
    Undefined,
    /// An empty string.
    Empty,
}

impl MissingValue {
    fn as_str(&self) -> &'static str {
        match self {
            MissingValue::Undefined => "undefined",
            MissingValue::Empty => "",
        }
    }
}

/// A decoded query string.
///
/// Maps decoded names to decoded values.
/// The value is `None`, if the component had no `=` separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    comps: HashMap<String, Option<String>>,
}

impl Query {
    /// Parses the query part of a URL.
    ///
    /// Everything after the first `?` is the query string.
    /// An absent input and an input without `?` both parse as an empty query string,
    /// which results in exactly one component: An empty name without value.
    ///
    /// Later components overwrite earlier components with the same name.
    pub fn parse(search: Option<&str>) -> Result<Self, DecodeError> {
        let search = search.unwrap_or("");
        let query = split_delim_str(search, b'?').map_or("", |(_, q)| q);

        let mut comps = HashMap::new();
        for comp in query.split('&') {
            let (name, value) = match split_delim_str(comp, b'=') {
                Some((name, value)) => (name, Some(value)),
                None => (comp, None),
            };
            let name = decode_uri_component(name)
                .inspect_err(|e| log::debug!("Query name '{name}': {e}"))?;
            let value = decode_uri_component_opt(value)
                .inspect_err(|e| log::debug!("Query value of '{name}': {e}"))?;
            comps.insert(name, value);
        }
        log::trace!("Parsed query string with {} components.", comps.len());

        Ok(Self { comps })
    }

    /// Returns the value of a query component, by name.
    /// Returns `None` if the component does not exist
    /// and `Some(None)` if it exists without value.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.comps.get(name).map(|v| v.as_deref())
    }

    /// Returns the value of a query component, by name.
    /// Components without value are treated like missing components.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.comps.get(name).and_then(|v| v.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.comps.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.comps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }

    /// Iterate over all components in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.comps.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn into_map(self) -> HashMap<String, Option<String>> {
        self.comps
    }

    /// Convert into a text-only map.
    /// Components without value are rendered according to `missing`.
    pub fn into_compat_map(self, missing: MissingValue) -> HashMap<String, String> {
        self.comps
            .into_iter()
            .map(|(k, v)| (k, v.unwrap_or_else(|| missing.as_str().to_string())))
            .collect()
    }
}

impl FromStr for Query {
    type Err = DecodeError;

    /// Parses the query part of a URL. See [Query::parse].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

/// Parses the query part of `search` into a map of decoded names and values.
///
/// See [Query::parse].
pub fn parse_qs(search: Option<&str>) -> Result<HashMap<String, Option<String>>, DecodeError> {
    Ok(Query::parse(search)?.into_map())
}

/// Like [parse_qs], but components without value map to the text `undefined`.
pub fn parse_qs_compat(search: Option<&str>) -> Result<HashMap<String, String>, DecodeError> {
    Ok(Query::parse(search)?.into_compat_map(MissingValue::Undefined))
}


// vim: ts=4 sw=4 expandtab
