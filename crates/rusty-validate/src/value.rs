// File: src/value.rs
// Purpose: Runtime field values handed to rules

use std::fmt;

/// A field value as seen by the rule engine
///
/// Records expose their fields as `Value`s so that rules can branch on the
/// runtime type without knowing the record's concrete type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned integers above `i64::MAX`; smaller ones are `Int`
    UInt(u64),
    Float(f64),
    String(String),
}

impl Value {
    /// Name of the runtime type, used in log output
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Convert a JSON value into a field value
    ///
    /// Arrays and objects have no scalar counterpart and yield `None`.
    pub fn from_json(json: &serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::Null => Some(Value::Null),
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Value::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Some(Value::UInt(u))
                } else {
                    n.as_f64().map(Value::Float)
                }
            }
            serde_json::Value::String(s) => Some(Value::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::UInt(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_uint {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    match i64::try_from(n) {
                        Ok(i) => Value::Int(i),
                        Err(_) => Value::UInt(n as u64),
                    }
                }
            }
        )*
    };
}

impl_from_wide_uint!(u64, usize);

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversions() {
        assert_eq!(Value::from(7u8), Value::Int(7));
        assert_eq!(Value::from(-3i32), Value::Int(-3));
        assert_eq!(Value::from(42usize), Value::Int(42));
        assert_eq!(Value::from(-9isize), Value::Int(-9));
        assert_eq!(Value::from(i64::MAX as u64), Value::Int(i64::MAX));
        assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
        assert_eq!(Value::UInt(u64::MAX).type_name(), "uint");
        assert_eq!(Value::UInt(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from_json(&serde_json::json!(5)), Some(Value::Int(5)));
        assert_eq!(Value::from_json(&serde_json::json!(1.5)), Some(Value::Float(1.5)));
        assert_eq!(
            Value::from_json(&serde_json::json!(u64::MAX)),
            Some(Value::UInt(u64::MAX))
        );
        assert_eq!(
            Value::from_json(&serde_json::json!("hi")),
            Some(Value::String("hi".to_string()))
        );
        assert_eq!(Value::from_json(&serde_json::json!(null)), Some(Value::Null));
        assert_eq!(Value::from_json(&serde_json::json!([1, 2])), None);
        assert_eq!(Value::from_json(&serde_json::json!({"a": 1})), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(12).to_string(), "12");
        assert_eq!(Value::String("abc".into()).to_string(), "abc");
        assert_eq!(Value::Null.to_string(), "");
    }
}
