//! Caller-supplied selection: app ids plus an ordered tweak id → value map.
//!
//! A tweak mapped to `None` (JSON `null`) is treated exactly like an absent
//! key. Tweak order is the order in which the caller chose them and survives
//! serde round-trips.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MacInitError, Result};
use crate::types::ValueType;

/// A concrete value chosen for a tweak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TweakValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(Cow<'static, str>),
}

impl TweakValue {
    /// Build a text value from anything string-like.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Cow::Owned(value.into()))
    }

    /// Whether this value can be written as `value_type`.
    ///
    /// Integers are accepted for float tweaks; nothing else converts.
    pub fn fits(&self, value_type: ValueType) -> bool {
        matches!(
            (self, value_type),
            (Self::Bool(_), ValueType::Boolean)
                | (Self::Int(_), ValueType::Integer)
                | (Self::Int(_) | Self::Float(_), ValueType::Float)
                | (Self::Text(_), ValueType::String)
        )
    }

    /// Short name of the value's kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
        }
    }

    /// Parse a command-line value according to the tweak's value type.
    ///
    /// Booleans accept `true/false`, `yes/no`, `on/off` and `1/0`.
    pub fn parse_as(value_type: ValueType, raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        match value_type {
            ValueType::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(Self::Bool(true)),
                "false" | "no" | "off" | "0" => Ok(Self::Bool(false)),
                _ => Err(MacInitError::validation(format!(
                    "'{raw}' is not a boolean"
                ))),
            },
            ValueType::Integer => trimmed
                .parse::<i64>()
                .map(Self::Int)
                .map_err(|_| MacInitError::validation(format!("'{raw}' is not an integer"))),
            ValueType::Float => trimmed
                .parse::<f64>()
                .map(Self::Float)
                .map_err(|_| MacInitError::validation(format!("'{raw}' is not a number"))),
            ValueType::String => Ok(Self::text(raw)),
        }
    }
}

impl fmt::Display for TweakValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for TweakValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for TweakValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for TweakValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for TweakValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

/// Insertion-ordered tweak id → value map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TweakSelections {
    entries: Vec<(String, Option<TweakValue>)>,
}

impl TweakSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a tweak's value. An existing key keeps its position.
    pub fn insert(&mut self, id: impl Into<String>, value: Option<TweakValue>) {
        let id = id.into();
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((id, value)),
        }
    }

    /// Remove a tweak, returning its previous entry value.
    pub fn remove(&mut self, id: &str) -> Option<Option<TweakValue>> {
        let index = self.entries.iter().position(|(key, _)| key == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Raw entry for `id`, including explicit `None`.
    pub fn get(&self, id: &str) -> Option<&Option<TweakValue>> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, value)| value)
    }

    /// Chosen value for `id`, `None` when absent or deselected.
    pub fn value(&self, id: &str) -> Option<&TweakValue> {
        self.get(id).and_then(Option::as_ref)
    }

    /// All entries in insertion order, including explicit `None`.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&TweakValue>)> {
        self.entries
            .iter()
            .map(|(id, value)| (id.as_str(), value.as_ref()))
    }

    /// Selected tweaks in insertion order; `None` entries are skipped.
    pub fn selected(&self) -> impl Iterator<Item = (&str, &TweakValue)> {
        self.entries
            .iter()
            .filter_map(|(id, value)| value.as_ref().map(|v| (id.as_str(), v)))
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_count() == 0
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Into<String>> FromIterator<(K, Option<TweakValue>)> for TweakSelections {
    fn from_iter<I: IntoIterator<Item = (K, Option<TweakValue>)>>(iter: I) -> Self {
        let mut selections = Self::new();
        for (id, value) in iter {
            selections.insert(id, value);
        }
        selections
    }
}

impl Serialize for TweakSelections {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, value) in &self.entries {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TweakSelections {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = TweakSelections;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of tweak ids to values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut selections = TweakSelections::new();
                while let Some((id, value)) =
                    access.next_entry::<String, Option<TweakValue>>()?
                {
                    selections.insert(id, value);
                }
                Ok(selections)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// One generation request's input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    /// Selected app ids; order does not matter and duplicates collapse.
    pub apps: Vec<String>,
    /// Selected tweaks with their chosen values.
    pub tweaks: TweakSelections,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app(mut self, id: impl Into<String>) -> Self {
        self.apps.push(id.into());
        self
    }

    pub fn with_tweak(mut self, id: impl Into<String>, value: impl Into<TweakValue>) -> Self {
        self.tweaks.insert(id, Some(value.into()));
        self
    }

    /// App ids with duplicates removed, first occurrence kept.
    pub fn unique_app_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.apps
            .iter()
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty() && self.tweaks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_tweak_is_not_selected() {
        let mut tweaks = TweakSelections::new();
        tweaks.insert("show-hidden-files", Some(TweakValue::Bool(true)));
        tweaks.insert("auto-hide-dock", None);

        assert_eq!(tweaks.selected_count(), 1);
        assert!(tweaks.value("auto-hide-dock").is_none());
        assert_eq!(tweaks.get("auto-hide-dock"), Some(&None));
    }

    #[test]
    fn test_insert_keeps_position() {
        let mut tweaks = TweakSelections::new();
        tweaks.insert("a", Some(TweakValue::Bool(true)));
        tweaks.insert("b", Some(TweakValue::Bool(true)));
        tweaks.insert("a", Some(TweakValue::Bool(false)));

        let ids: Vec<&str> = tweaks.selected().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(tweaks.value("a"), Some(&TweakValue::Bool(false)));
    }

    #[test]
    fn test_json_preserves_order_and_nulls() {
        let json = r#"{"zeta": true, "alpha": 2, "mid": null, "name": "Dark"}"#;
        let tweaks: TweakSelections = serde_json::from_str(json).unwrap();

        let ids: Vec<&str> = tweaks.entries().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid", "name"]);
        assert_eq!(tweaks.value("alpha"), Some(&TweakValue::Int(2)));
        assert_eq!(tweaks.value("name"), Some(&TweakValue::text("Dark")));
        assert_eq!(tweaks.selected_count(), 3);

        let back = serde_json::to_string(&tweaks).unwrap();
        assert_eq!(back, r#"{"zeta":true,"alpha":2,"mid":null,"name":"Dark"}"#);
    }

    #[test]
    fn test_untagged_numbers() {
        let int: TweakValue = serde_json::from_str("3").unwrap();
        let float: TweakValue = serde_json::from_str("0.5").unwrap();
        assert_eq!(int, TweakValue::Int(3));
        assert_eq!(float, TweakValue::Float(0.5));
    }

    #[test]
    fn test_fits_value_type() {
        assert!(TweakValue::Bool(true).fits(ValueType::Boolean));
        assert!(TweakValue::Int(2).fits(ValueType::Float));
        assert!(!TweakValue::Float(2.5).fits(ValueType::Integer));
        assert!(!TweakValue::text("yes").fits(ValueType::Boolean));
    }

    #[test]
    fn test_parse_as() {
        assert_eq!(
            TweakValue::parse_as(ValueType::Boolean, "on").unwrap(),
            TweakValue::Bool(true)
        );
        assert_eq!(
            TweakValue::parse_as(ValueType::Integer, " 15 ").unwrap(),
            TweakValue::Int(15)
        );
        assert!(TweakValue::parse_as(ValueType::Integer, "fast").is_err());
        assert!(TweakValue::parse_as(ValueType::Boolean, "maybe").is_err());
    }

    #[test]
    fn test_unique_app_ids() {
        let selection = Selection::new()
            .with_app("git")
            .with_app("vscode")
            .with_app("git");
        assert_eq!(selection.unique_app_ids(), vec!["git", "vscode"]);
    }
}
