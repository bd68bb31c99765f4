// File: src/fields.rs
// Purpose: Field specs, the mapping from field name to its rule list

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::rule::Rule;

/// Field name to ordered rule list
///
/// Rule order inside a field matters for which message is kept; the order of
/// fields only decides the order of entries in the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSpec {
    fields: IndexMap<String, Vec<Rule>>,
}

impl FieldSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any rules already set for that name
    pub fn field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.insert(name, rules);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, rules: Vec<Rule>) -> Option<Vec<Rule>> {
        self.fields.insert(name.into(), rules)
    }

    pub fn get(&self, name: &str) -> Option<&[Rule]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<Rule>)> for FieldSpec {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Rule>)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, Vec<Rule>)> for FieldSpec {
    fn extend<I: IntoIterator<Item = (K, Vec<Rule>)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// Build a [`FieldSpec`] from `name => [rules...]` pairs
///
/// ```
/// use rusty_validate::{fields, required, email, min, message};
///
/// let spec = fields! {
///     "Name" => [required, min(3)],
///     "Email" => [email, message("we need a valid address")],
/// };
/// assert_eq!(spec.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::FieldSpec::new()
    };
    ($($name:expr => [$($rule:expr),* $(,)?]),+ $(,)?) => {
        $crate::FieldSpec::new()
            $(.field($name, $crate::rules![$($rule),*]))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{max, min, required};

    #[test]
    fn test_builder_keeps_insertion_order() {
        let spec = FieldSpec::new()
            .field("Zeta", vec![required()])
            .field("Alpha", vec![min(1)]);
        let names: Vec<&str> = spec.names().collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_field_replaces_rules() {
        let spec = FieldSpec::new()
            .field("Name", vec![required()])
            .field("Name", vec![max(3)]);
        assert_eq!(spec.len(), 1);
        assert_eq!(spec.get("Name"), Some(&[Rule::Max(3)][..]));
    }

    #[test]
    fn test_fields_macro() {
        let spec = fields! {
            "FirstName" => [required, min(10), max(100)],
            "LastName" => [],
        };
        assert_eq!(spec.get("FirstName").unwrap().len(), 3);
        assert_eq!(spec.get("LastName"), Some(&[] as &[Rule]));
        assert!(fields!().is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let spec: FieldSpec = vec![("Name", vec![required()])].into_iter().collect();
        assert_eq!(spec.get("Name"), Some(&[Rule::Required][..]));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let spec: FieldSpec = toml::from_str(
            r#"
            Name = ["required", { min = 3 }]
            Email = ["email", { message = "bad email" }]
            "#,
        )
        .unwrap();
        assert_eq!(spec.get("Name"), Some(&[Rule::Required, Rule::Min(3)][..]));
        assert_eq!(
            spec.get("Email"),
            Some(&[Rule::Email, Rule::Message("bad email".to_string())][..])
        );
    }
}
