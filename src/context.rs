//! The variable context handed to every template of a generation run.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::ParamValue;

/// Parameter name to parsed value, in the order the parameters were declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Vars(IndexMap<String, ParamValue>);

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>>(&mut self, name: K, value: ParamValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    /// JSON rendering for log lines.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl<K: Into<String>> FromIterator<(K, ParamValue)> for Vars {
    fn from_iter<I: IntoIterator<Item = (K, ParamValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_keeps_declaration_order() {
        let vars: Vars = [
            ("name", ParamValue::String("Widget".to_string())),
            ("count", ParamValue::Number(3.0)),
            ("ratio", ParamValue::Number(0.5)),
            ("tags", ParamValue::Array(vec!["a".to_string(), "b".to_string()])),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            vars.to_json(),
            r#"{"name":"Widget","count":3,"ratio":0.5,"tags":["a","b"]}"#
        );
    }
}
