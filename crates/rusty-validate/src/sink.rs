// File: src/sink.rs
// Purpose: Destinations for failure messages

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

use crate::error::Result;
use crate::report::Report;

/// Something that receives one message per failed field
///
/// Maps take any field name. Structs get an implementation from
/// `#[derive(ErrorSink)]`, which writes into the public field with the same
/// name and returns [`Error::UnknownSinkField`](crate::Error::UnknownSinkField)
/// for names it does not have. Before the first write the engine asks
/// [`accepts`](ErrorSink::accepts) about every failed field, so a sink that
/// rejects one of them is left untouched.
///
/// ```
/// use rusty_validate::{ErrorSink, Validator, fields, required};
///
/// #[derive(Default, ErrorSink)]
/// struct SignupErrors {
///     #[record(rename = "Name")]
///     pub name: Option<String>,
/// }
///
/// let form = serde_json::json!({ "Name": "" });
/// let mut errors = SignupErrors::default();
/// let ok = Validator::new(&form, fields! { "Name" => [required] })
///     .validate(&mut errors)
///     .unwrap();
/// assert!(!ok);
/// assert_eq!(errors.name.as_deref(), Some("Name is a required field"));
/// ```
pub trait ErrorSink {
    fn put(&mut self, field: &str, message: String) -> Result<()>;

    /// Whether `put` would store a message for `field`
    fn accepts(&self, field: &str) -> bool {
        let _ = field;
        true
    }
}

impl ErrorSink for HashMap<String, String> {
    fn put(&mut self, field: &str, message: String) -> Result<()> {
        self.insert(field.to_string(), message);
        Ok(())
    }
}

impl ErrorSink for BTreeMap<String, String> {
    fn put(&mut self, field: &str, message: String) -> Result<()> {
        self.insert(field.to_string(), message);
        Ok(())
    }
}

impl ErrorSink for IndexMap<String, String> {
    fn put(&mut self, field: &str, message: String) -> Result<()> {
        self.insert(field.to_string(), message);
        Ok(())
    }
}

impl ErrorSink for Report {
    fn put(&mut self, field: &str, message: String) -> Result<()> {
        self.set(field, message);
        Ok(())
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    fn put(&mut self, field: &str, message: String) -> Result<()> {
        (**self).put(field, message)
    }
    fn accepts(&self, field: &str) -> bool {
        (**self).accepts(field)
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for Box<S> {
    fn put(&mut self, field: &str, message: String) -> Result<()> {
        (**self).put(field, message)
    }
    fn accepts(&self, field: &str) -> bool {
        (**self).accepts(field)
    }
}

/// A missing sink swallows every message.
impl<S: ErrorSink> ErrorSink for Option<S> {
    fn put(&mut self, field: &str, message: String) -> Result<()> {
        match self {
            Some(sink) => sink.put(field, message),
            None => Ok(()),
        }
    }
    fn accepts(&self, field: &str) -> bool {
        self.as_ref().map_or(true, |sink| sink.accepts(field))
    }
}

/// A struct field that can hold a failure message
///
/// Used by `#[derive(ErrorSink)]` for each writable field.
pub trait MessageSlot {
    fn fill(&mut self, message: String);
}

impl MessageSlot for String {
    fn fill(&mut self, message: String) {
        *self = message;
    }
}

impl MessageSlot for Option<String> {
    fn fill(&mut self, message: String) {
        *self = Some(message);
    }
}

impl MessageSlot for Vec<String> {
    fn fill(&mut self, message: String) {
        self.push(message);
    }
}
