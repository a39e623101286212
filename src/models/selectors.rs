//! Selector configuration for generic scrapes.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{
    CONTAINER_KEY, DEFAULT_CONTAINER_SELECTOR, FORM_SELECTOR_PREFIX, HREF_FIELD_SUFFIX,
};

/// Field name → CSS selector, in the order the caller supplied them.
///
/// The reserved key `container` names the repeatable element block and is
/// never extracted as a field. Fields ending in `_href` yield a resolved URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorConfig {
    entries: Vec<(String, String)>,
}

impl SelectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from form fields named `selector_<field>`.
    ///
    /// Blank values are dropped; other fields are ignored.
    pub fn from_form_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::new();
        for (key, value) in fields {
            let Some(field) = key.strip_prefix(FORM_SELECTOR_PREFIX) else {
                continue;
            };
            let value = value.trim();
            if field.is_empty() || value.is_empty() {
                continue;
            }
            config.insert(field, value);
        }
        config
    }

    pub fn insert(&mut self, field: impl Into<String>, selector: impl Into<String>) {
        let field = field.into();
        let selector = selector.into();
        match self.entries.iter_mut().find(|(k, _)| *k == field) {
            Some((_, existing)) => *existing = selector,
            None => self.entries.push((field, selector)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v.as_str())
    }

    /// Container selector, `body` when absent or blank.
    pub fn container(&self) -> &str {
        match self.get(CONTAINER_KEY).map(str::trim) {
            Some(selector) if !selector.is_empty() => selector,
            _ => DEFAULT_CONTAINER_SELECTOR,
        }
    }

    /// Extractable fields in configuration order, without `container`.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(k, _)| k != CONTAINER_KEY)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// True for fields whose `href` attribute is extracted instead of their text.
pub fn is_href_field(field: &str) -> bool {
    field.ends_with(HREF_FIELD_SUFFIX)
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SelectorConfig {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut config = Self::new();
        for (k, v) in iter {
            config.insert(k, v);
        }
        config
    }
}

impl Serialize for SelectorConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// Deserialized by hand so JSON object order survives.
impl<'de> Deserialize<'de> for SelectorConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SelectorConfigVisitor;

        impl<'de> Visitor<'de> for SelectorConfigVisitor {
            type Value = SelectorConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping field names to CSS selectors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut config = SelectorConfig::new();
                while let Some((field, selector)) = access.next_entry::<String, String>()? {
                    config.insert(field, selector);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(SelectorConfigVisitor)
    }
}
