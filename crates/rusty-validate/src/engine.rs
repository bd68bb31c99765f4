// File: src/engine.rs
// Purpose: Rule evaluation over a record and its field spec

use tracing::{debug, trace, warn};

use crate::config::ValidationConfig;
use crate::error::Result;
use crate::fields::FieldSpec;
use crate::patterns::Patterns;
use crate::record::Record;
use crate::report::Report;
use crate::rule::Rule;
use crate::sink::ErrorSink;

/// Validate a record and return the failures together with the overall flag
///
/// ```
/// use rusty_validate::{fields, validate, required, min};
///
/// let form = serde_json::json!({ "Name": "123" });
/// let (errors, ok) = validate(&form, &fields! { "Name" => [required, min(5)] });
/// assert!(!ok);
/// assert_eq!(errors.get("Name"), Some("Name should be at least 5 characters long"));
/// ```
pub fn validate<R: Record + ?Sized>(record: &R, fields: &FieldSpec) -> (Report, bool) {
    let report = evaluate(record, fields, &ValidationConfig::default(), Patterns::global());
    let ok = report.is_ok();
    (report, ok)
}

/// A record paired with the rules to check it against
///
/// ```
/// use std::collections::HashMap;
/// use rusty_validate::{fields, Validator, email};
///
/// let form = serde_json::json!({ "Email": "a@gg.com" });
/// let mut errors: HashMap<String, String> = HashMap::new();
/// let ok = Validator::new(&form, fields! { "Email" => [email] })
///     .validate(&mut errors)
///     .unwrap();
/// assert!(ok);
/// assert!(errors.is_empty());
/// ```
pub struct Validator<'a, R: ?Sized> {
    record: &'a R,
    fields: FieldSpec,
    config: ValidationConfig,
    patterns: &'a Patterns,
}

impl<'a, R: Record + ?Sized> Validator<'a, R> {
    pub fn new(record: &'a R, fields: FieldSpec) -> Self {
        Self {
            record,
            fields,
            config: ValidationConfig::default(),
            patterns: Patterns::global(),
        }
    }

    pub fn with_config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom pattern set for `email` and `url` rules
    pub fn with_patterns(mut self, patterns: &'a Patterns) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn fields(&self) -> &FieldSpec {
        &self.fields
    }

    /// Run every rule and return the failures
    pub fn report(&self) -> Report {
        evaluate(self.record, &self.fields, &self.config, self.patterns)
    }

    /// Run every rule, write each failure into `sink`, and return whether
    /// the record passed
    ///
    /// Errors only come from the sink, e.g. a struct sink without a field for
    /// one of the failed names while `strict_sinks` is on. The sink is left
    /// untouched in that case.
    pub fn validate<S: ErrorSink + ?Sized>(&self, sink: &mut S) -> Result<bool> {
        let mut report = self.report();
        let ok = report.is_ok();
        if !self.config.strict_sinks {
            report.retain(|field| {
                let accepted = sink.accepts(field);
                if !accepted {
                    warn!(field = %field, "error sink has no field for message, dropping it");
                }
                accepted
            });
        }
        report.write_to(sink)?;
        Ok(ok)
    }
}

/// The shared engine behind both entry points
fn evaluate<R: Record + ?Sized>(
    record: &R,
    fields: &FieldSpec,
    config: &ValidationConfig,
    patterns: &Patterns,
) -> Report {
    let mut report = Report::new();

    for (name, rules) in fields.iter() {
        if record.is_private(name) && config.skip_private_fields {
            trace!(field = name, "skipping private field");
            continue;
        }

        let value = record.field(name);
        if value.is_none() {
            trace!(field = name, "field not readable, treating as absent");
        }

        // The last message rule wins over every default, wherever it sits.
        let override_message = rules.iter().rev().find_map(|rule| match rule {
            Rule::Message(text) => Some(text.as_str()),
            _ => None,
        });

        for rule in rules.iter().filter(|rule| !rule.is_message()) {
            if rule.check(value.as_ref(), patterns) {
                continue;
            }

            debug!(
                field = name,
                rule = %rule,
                value_type = value.as_ref().map(|v| v.type_name()).unwrap_or("absent"),
                "rule failed"
            );

            let message = match override_message {
                Some(text) => Some(text.to_string()),
                None => rule.default_message(name),
            };
            if let Some(message) = message {
                report.set(name, message);
            }
        }
    }

    debug!(fields = fields.len(), failed = report.len(), "validation finished");
    report
}
