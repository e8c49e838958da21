// src/power.rs
//! The power record: an ordered bag of `field → text`.
//!
//! Records are flat on purpose. Parsers only know the labels they happened to
//! see, so any key is allowed; the renderer picks the ones it knows by name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const TITLE: &str = "power";
pub const QUOTE: &str = "quote";
pub const DESCRIPTION: &str = "description";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PowerRecord {
    fields: IndexMap<String, String>,
}

impl PowerRecord {
    pub fn new() -> Self { Self::default() }

    pub fn with_title(title: impl Into<String>) -> Self {
        let mut r = Self::new();
        r.insert(TITLE, title);
        r
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Like `get`, but treats an empty string as absent.
    pub fn get_nonempty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        self.fields.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool { self.fields.contains_key(key) }

    pub fn title(&self) -> Option<&str> { self.get(TITLE) }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PowerRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut r = PowerRecord::new();
        for (k, v) in iter {
            r.insert(k, v);
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut r = PowerRecord::with_title("Blink");
        r.insert("cost", "1");
        r.insert("range", "5");
        r.insert("cost", "2");
        let keys: Vec<&str> = r.keys().collect();
        assert_eq!(keys, vec!["power", "cost", "range"]);
        assert_eq!(r.get("cost"), Some("2"));
    }

    #[test]
    fn json_keeps_field_order() {
        let r: PowerRecord = [("power", "Blink"), ("effect", "Teleport"), ("cost", "1")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"power":"Blink","effect":"Teleport","cost":"1"}"#);
    }

    #[test]
    fn non_string_values_rejected() {
        let err = serde_json::from_str::<PowerRecord>(r#"{"power": 3}"#);
        assert!(err.is_err());
    }

    #[test]
    fn json_order_survives_load() {
        let r: PowerRecord = serde_json::from_str(r#"{"power":"B","range":"5","cost":"1"}"#).unwrap();
        let keys: Vec<&str> = r.keys().collect();
        assert_eq!(keys, vec!["power", "range", "cost"]);
    }

    #[test]
    fn empty_value_is_not_present() {
        let r: PowerRecord = [("power", "X"), ("cost", "")].into_iter().collect();
        assert!(r.contains("cost"));
        assert_eq!(r.get_nonempty("cost"), None);
    }
}
