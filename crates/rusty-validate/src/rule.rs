// File: src/rule.rs
// Purpose: Rule descriptors, constructors and per-rule evaluation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::patterns::Patterns;
use crate::value::Value;

/// One validation check for a field
///
/// Each variant carries its own configuration. `Message` is not a check: it
/// replaces the reported message of whatever other rule fails on the field.
///
/// In TOML/JSON a rule list reads like `["required", { min = 3 }, { message = "..." }]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    Email,
    Url,
    Min(i64),
    Max(i64),
    Message(String),
}

/// The tag of a [`Rule`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Required,
    Email,
    Url,
    Min,
    Max,
    Message,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Email => "email",
            RuleKind::Url => "url",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
            RuleKind::Message => "message",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Required => RuleKind::Required,
            Rule::Email => RuleKind::Email,
            Rule::Url => RuleKind::Url,
            Rule::Min(_) => RuleKind::Min,
            Rule::Max(_) => RuleKind::Max,
            Rule::Message(_) => RuleKind::Message,
        }
    }

    pub fn is_message(&self) -> bool {
        matches!(self, Rule::Message(_))
    }

    /// Evaluate the rule against a field value
    ///
    /// `None` means the record has no readable field of that name. Values of
    /// the wrong runtime type fail. `Message` always passes.
    pub fn check(&self, value: Option<&Value>, patterns: &Patterns) -> bool {
        match self {
            Rule::Required => matches!(value, Some(Value::String(s)) if !s.is_empty()),
            Rule::Email => match value {
                Some(Value::String(s)) => patterns.is_email(s),
                _ => false,
            },
            Rule::Url => match value {
                Some(Value::String(s)) => patterns.is_url(s),
                _ => false,
            },
            Rule::Min(n) => measure(value).is_some_and(|m| m >= i128::from(*n)),
            Rule::Max(n) => measure(value).is_some_and(|m| m <= i128::from(*n)),
            Rule::Message(_) => true,
        }
    }

    /// The message reported when this rule fails and no override is set
    pub fn default_message(&self, field: &str) -> Option<String> {
        match self {
            Rule::Required => Some(format!("{} is a required field", field)),
            Rule::Email => Some("email address is invalid".to_string()),
            Rule::Url => Some("url is invalid".to_string()),
            Rule::Min(n) => Some(format!("{} should be at least {} characters long", field, n)),
            Rule::Max(n) => Some(format!("{} should be maximum {} characters long", field, n)),
            Rule::Message(_) => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Min(n) | Rule::Max(n) => write!(f, "{}({})", self.kind(), n),
            Rule::Message(text) => write!(f, "{}({:?})", self.kind(), text),
            _ => f.write_str(self.kind().as_str()),
        }
    }
}

/// Size of a value for `min`/`max`: character count for strings, the value
/// itself for integers. Other types have no size.
fn measure(value: Option<&Value>) -> Option<i128> {
    match value? {
        Value::String(s) => i128::try_from(s.chars().count()).ok(),
        Value::Int(n) => Some(i128::from(*n)),
        Value::UInt(n) => Some(i128::from(*n)),
        _ => None,
    }
}

/// Field must be a non-empty string
pub fn required() -> Rule {
    Rule::Required
}

/// Field must be a lowercase email address
pub fn email() -> Rule {
    Rule::Email
}

/// Field must be an http(s) URL with a dotted host
pub fn url() -> Rule {
    Rule::Url
}

/// String length or integer value must be at least `n`
pub fn min(n: i64) -> Rule {
    Rule::Min(n)
}

/// String length or integer value must be at most `n`
pub fn max(n: i64) -> Rule {
    Rule::Max(n)
}

/// Report `text` instead of the default message when the field fails
pub fn message(text: impl Into<String>) -> Rule {
    Rule::Message(text.into())
}

/// Anything that can stand in a rule list
///
/// Implemented for `Rule` and for constructors that have not been called yet,
/// so `rules![required, min(5)]` and `rules![required(), min(5)]` are the same.
pub trait IntoRule {
    fn into_rule(self) -> Rule;
}

impl IntoRule for Rule {
    fn into_rule(self) -> Rule {
        self
    }
}

impl<F> IntoRule for F
where
    F: FnOnce() -> Rule,
{
    fn into_rule(self) -> Rule {
        self()
    }
}

/// Collect rules into an ordered list
pub fn rules<I>(items: I) -> Vec<Rule>
where
    I: IntoIterator,
    I::Item: IntoRule,
{
    items.into_iter().map(IntoRule::into_rule).collect()
}

/// Build an ordered rule list from a mix of constructors and rules
///
/// ```
/// use rusty_validate::{rules, required, min, max, message, Rule};
///
/// let list = rules![required, min(3), max(20), message("pick a username")];
/// assert_eq!(list[0], Rule::Required);
/// assert_eq!(list.len(), 4);
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        ::std::vec::Vec::<$crate::Rule>::new()
    };
    ($($rule:expr),+ $(,)?) => {
        ::std::vec![$($crate::IntoRule::into_rule($rule)),+]
    };
}
