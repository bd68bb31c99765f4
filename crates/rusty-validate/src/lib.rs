//! # rusty-validate
//!
//! Declarative field validation: describe which rules apply to which field
//! name, hand over a record, get back one message per failed field.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use rusty_validate::{fields, required, email, min, max, message, Record, Validator};
//!
//! #[derive(Record)]
//! #[record(rename_all = "PascalCase")]
//! struct RegisterForm {
//!     pub first_name: String,
//!     pub email: String,
//!     pub age: u32,
//! }
//!
//! let form = RegisterForm {
//!     first_name: String::new(),
//!     email: "a@gg.com".to_string(),
//!     age: 16,
//! };
//!
//! let spec = fields! {
//!     "FirstName" => [required, max(100), message("The name needs to be present")],
//!     "Email" => [required, email],
//!     "Age" => [min(18)],
//! };
//!
//! let mut errors: HashMap<String, String> = HashMap::new();
//! let ok = Validator::new(&form, spec).validate(&mut errors).unwrap();
//!
//! assert!(!ok);
//! assert_eq!(errors["FirstName"], "The name needs to be present");
//! assert_eq!(errors["Age"], "Age should be at least 18 characters long");
//! assert!(!errors.contains_key("Email"));
//! ```
//!
//! ## Architecture
//!
//! - **`rule`** - `Rule` variants, constructors and the `rules!` builder
//! - **`fields`** - `FieldSpec` and the `fields!` builder
//! - **`record`** - `Record`, field lookup by name (`#[derive(Record)]`)
//! - **`engine`** - `validate` and `Validator`, one evaluation loop for both
//! - **`report`** / **`sink`** - the result map and where it gets written
//! - **`config`** - engine switches and field specs from `rusty-validate.toml`

pub mod config;
pub mod engine;
pub mod error;
pub mod fields;
pub mod patterns;
pub mod record;
pub mod report;
pub mod rule;
pub mod sink;
pub mod value;

// Re-export derive macros
pub use rusty_validate_derive::{ErrorSink, Record};

pub use config::{Config, ValidationConfig};
pub use engine::{validate, Validator};
pub use error::{Error, Result};
pub use fields::FieldSpec;
pub use patterns::Patterns;
pub use record::Record;
pub use report::Report;
pub use rule::{email, max, message, min, required, rules, url, IntoRule, Rule, RuleKind};
pub use sink::{ErrorSink, MessageSlot};
pub use value::Value;
