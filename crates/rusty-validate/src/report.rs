// File: src/report.rs
// Purpose: The outcome of one validation run

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::sink::ErrorSink;

/// Field name to message for every field that failed
///
/// A field appears at most once. Entries follow the order of the field spec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    errors: IndexMap<String, String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no rule failed
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Message for a specific field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set the message for a field, replacing an earlier one
    pub(crate) fn set(&mut self, field: &str, message: String) {
        self.errors.insert(field.to_string(), message);
    }

    /// Keep only the entries whose field passes `keep`
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.errors.retain(|field, _| keep(field));
    }

    /// Move every entry into a sink
    ///
    /// Nothing is written unless the sink accepts every field.
    pub fn write_to<S: ErrorSink + ?Sized>(self, sink: &mut S) -> Result<()> {
        if let Some(field) = self.errors.keys().find(|field| !sink.accepts(field)) {
            return Err(Error::UnknownSinkField {
                field: field.clone(),
            });
        }
        for (field, message) in self.errors {
            sink.put(&field, message)?;
        }
        Ok(())
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.errors.into_iter().collect()
    }
}

impl IntoIterator for Report {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl From<Report> for HashMap<String, String> {
    fn from(report: Report) -> Self {
        report.into_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_ok() {
        let report = Report::new();
        assert!(report.is_ok());
        assert!(!report.has_errors());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn test_set_overwrites() {
        let mut report = Report::new();
        report.set("Name", "first".to_string());
        report.set("Name", "second".to_string());
        assert_eq!(report.len(), 1);
        assert_eq!(report.get("Name"), Some("second"));
        assert!(!report.is_ok());
    }

    #[test]
    fn test_serializes_as_object() {
        let mut report = Report::new();
        report.set("Email", "email address is invalid".to_string());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({ "Email": "email address is invalid" }));
    }

    struct OnlyName(Vec<String>);

    impl ErrorSink for OnlyName {
        fn put(&mut self, field: &str, message: String) -> Result<()> {
            if field != "Name" {
                return Err(Error::UnknownSinkField {
                    field: field.to_string(),
                });
            }
            self.0.push(message);
            Ok(())
        }

        fn accepts(&self, field: &str) -> bool {
            field == "Name"
        }
    }

    #[test]
    fn test_write_to_is_all_or_nothing() {
        let mut report = Report::new();
        report.set("Name", "bad name".to_string());
        report.set("Email", "bad email".to_string());

        let mut sink = OnlyName(Vec::new());
        let err = report.clone().write_to(&mut sink).unwrap_err();
        assert!(matches!(err, Error::UnknownSinkField { ref field } if field == "Email"));
        assert!(sink.0.is_empty());

        report.retain(|field| field == "Name");
        report.write_to(&mut sink).unwrap();
        assert_eq!(sink.0, vec!["bad name"]);
    }

    #[test]
    fn test_into_map() {
        let mut report = Report::new();
        report.set("A", "a".to_string());
        let map: HashMap<String, String> = report.into();
        assert_eq!(map.get("A").map(String::as_str), Some("a"));
    }
}
