// File: src/record.rs
// Purpose: Field lookup by name for anything that can be validated

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use crate::value::Value;

/// A value whose fields can be read by name
///
/// Usually implemented with `#[derive(Record)]`, which exposes the public
/// fields of a struct and reports the others as private:
///
/// ```
/// use rusty_validate::{Record, Value};
///
/// #[derive(Record)]
/// #[record(rename_all = "PascalCase")]
/// struct Signup {
///     pub first_name: String,
///     pub age: u32,
///     password_hash: String,
/// }
///
/// let s = Signup { first_name: "Ada".into(), age: 36, password_hash: String::new() };
/// assert_eq!(s.field("FirstName"), Some(Value::String("Ada".into())));
/// assert_eq!(s.field("Age"), Some(Value::Int(36)));
/// assert_eq!(s.field("PasswordHash"), None);
/// assert!(s.is_private("PasswordHash"));
/// # let _ = s.password_hash;
/// ```
pub trait Record {
    /// Current value of a public field, or `None` if there is no such field
    fn field(&self, name: &str) -> Option<Value>;

    /// Whether `name` is a field that exists but is not publicly readable
    fn is_private(&self, name: &str) -> bool {
        let _ = name;
        false
    }
}

macro_rules! impl_record_for_pointer {
    ($($ptr:ty),*) => {
        $(
            impl<R: Record + ?Sized> Record for $ptr {
                fn field(&self, name: &str) -> Option<Value> {
                    (**self).field(name)
                }

                fn is_private(&self, name: &str) -> bool {
                    (**self).is_private(name)
                }
            }
        )*
    };
}

impl_record_for_pointer!(&R, &mut R, Box<R>, Rc<R>, Arc<R>);

impl Record for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).and_then(Value::from_json)
    }
}

/// Only JSON objects have fields; every other JSON value reads as empty.
impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Option<Value> {
        match self {
            serde_json::Value::Object(map) => map.field(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Manual {
        name: String,
    }

    impl Record for Manual {
        fn field(&self, name: &str) -> Option<Value> {
            match name {
                "Name" => Some(Value::from(&self.name)),
                _ => None,
            }
        }
    }

    #[test]
    fn test_pointers_dereference() {
        let m = Manual { name: "x".to_string() };
        let boxed: Box<dyn Record> = Box::new(Manual { name: "y".to_string() });
        assert_eq!((&m).field("Name"), Some(Value::from("x")));
        assert_eq!((&&m).field("Name"), Some(Value::from("x")));
        assert_eq!(boxed.field("Name"), Some(Value::from("y")));
        assert_eq!(Arc::new(m).field("Missing"), None);
    }

    #[test]
    fn test_map_records() {
        let mut map: HashMap<String, Value> = HashMap::new();
        map.insert("Age".to_string(), Value::Int(3));
        assert_eq!(map.field("Age"), Some(Value::Int(3)));
        assert_eq!(map.field("age"), None);
        assert!(!map.is_private("Age"));
    }

    #[test]
    fn test_json_records() {
        let doc = json!({ "Name": "ann", "Age": 30, "Tags": ["a"] });
        assert_eq!(doc.field("Name"), Some(Value::from("ann")));
        assert_eq!(doc.field("Age"), Some(Value::Int(30)));
        assert_eq!(doc.field("Tags"), None);
        assert_eq!(json!([1, 2]).field("Name"), None);
        assert_eq!(json!("text").field("Name"), None);
    }
}
