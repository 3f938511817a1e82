//! Declarative validation schemas built from localized messages.
//!
//! Building a schema cannot fail; only evaluating it against input produces
//! errors. Evaluation is pure: at most one error per field per pass, first
//! failing rule wins, rules run in declared order.

use common::i18n::Messages;

use crate::domain::{FieldError, FormValues};

/// A single rule with its localized failure message.
#[derive(Debug, Clone)]
pub enum Rule {
    Required { message: String },
    MinLen { min: usize, message: String },
    Email { message: String },
    Password { message: String },
    MatchesField { other: String, message: String },
}

impl Rule {
    fn required(message: &str) -> Self {
        Self::Required { message: message.into() }
    }

    fn min_len(min: usize, message: &str) -> Self {
        Self::MinLen { min, message: message.into() }
    }

    fn email(message: &str) -> Self {
        Self::Email { message: message.into() }
    }

    fn password(message: &str) -> Self {
        Self::Password { message: message.into() }
    }

    fn matches_field(other: &str, message: &str) -> Self {
        Self::MatchesField { other: other.into(), message: message.into() }
    }

    fn check(&self, value: &str, values: &FormValues) -> Result<(), &str> {
        let ok = match self {
            Rule::Required { .. } => !value.is_empty(),
            Rule::MinLen { min, .. } => value.chars().count() >= *min,
            Rule::Email { .. } => is_email(value),
            Rule::Password { .. } => is_strong_password(value),
            Rule::MatchesField { other, .. } => value == values.get(other),
        };
        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::MinLen { message, .. }
            | Rule::Email { message }
            | Rule::Password { message }
            | Rule::MatchesField { message, .. } => message,
        }
    }
}

/// Rules for one field, evaluated in declared order.
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: String,
    rules: Vec<Rule>,
}

fn field(name: &str, rules: Vec<Rule>) -> FieldRules {
    FieldRules { field: name.into(), rules }
}

/// The rule set one form validates against. Immutable once built; rebuild
/// when the active locale's messages change.
#[derive(Debug, Clone)]
pub struct ValidationSchema {
    fields: Vec<FieldRules>,
}

impl ValidationSchema {
    pub fn new(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// Field names in declared (display) order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.field.as_str())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.field == name)
    }

    /// Pure evaluation of the schema against current values.
    pub fn validate(&self, values: &FormValues) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for f in &self.fields {
            let value = values.get(&f.field);
            for rule in &f.rules {
                if let Err(message) = rule.check(value, values) {
                    errors.push(FieldError::new(&f.field, message));
                    break;
                }
            }
        }
        errors
    }
}

/// Sign-in schema: both credentials are required, nothing more.
pub fn login_schema(messages: &Messages) -> ValidationSchema {
    ValidationSchema::new(vec![
        field("username", vec![Rule::required(messages.get("username-required"))]),
        field("password", vec![Rule::required(messages.get("password-required"))]),
    ])
}

/// Registration schema; the cross-field confirm rule is attached to
/// `passwordConfirm` so its error surfaces there.
pub fn register_schema(messages: &Messages) -> ValidationSchema {
    ValidationSchema::new(vec![
        field(
            "username",
            vec![
                Rule::required(messages.get("username-required")),
                Rule::min_len(2, messages.get("username-min")),
            ],
        ),
        field(
            "firstName",
            vec![
                Rule::required(messages.get("firstname-required")),
                Rule::min_len(2, messages.get("firstname-min")),
            ],
        ),
        field(
            "lastName",
            vec![
                Rule::required(messages.get("lastname-required")),
                Rule::min_len(2, messages.get("lastname-min")),
            ],
        ),
        field(
            "email",
            vec![
                Rule::required(messages.get("email-required")),
                Rule::email(messages.get("email-invalid")),
            ],
        ),
        field(
            "password",
            vec![
                Rule::required(messages.get("password-required")),
                Rule::password(messages.get("password-invalid")),
            ],
        ),
        field(
            "passwordConfirm",
            vec![
                Rule::required(messages.get("password-confirm-required")),
                Rule::matches_field("password", messages.get("password-confirm-mismatch")),
            ],
        ),
    ])
}

fn is_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    // Domain needs an interior dot.
    match domain.find('.') {
        Some(idx) => idx > 0 && idx < domain.len() - 1,
        None => false,
    }
}

// At least one lowercase letter, at least one uppercase letter, minimum
// length 8 characters.
fn is_strong_password(value: &str) -> bool {
    value.chars().any(|c| c.is_lowercase())
        && value.chars().any(|c| c.is_uppercase())
        && value.chars().count() >= 8
}

#[cfg(test)]
mod tests {
    use common::i18n::{Locale, Messages};

    use super::*;

    fn messages() -> Messages {
        Messages::new(Locale::En)
    }

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        let mut v = FormValues::new();
        for (field, value) in pairs {
            v.set(*field, *value);
        }
        v
    }

    #[test]
    fn login_requires_both_fields() {
        let schema = login_schema(&messages());
        let errors = schema.validate(&values(&[("username", ""), ("password", "")]));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "username");
        assert_eq!(errors[0].message, messages().get("username-required"));
        assert_eq!(errors[1].field, "password");
    }

    #[test]
    fn login_has_no_min_length() {
        // "ab" passes login; only the empty password fails.
        let schema = login_schema(&messages());
        let errors = schema.validate(&values(&[("username", "ab"), ("password", "")]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn one_error_per_field_first_rule_wins() {
        let schema = register_schema(&messages());
        let errors = schema.validate(&values(&[("username", "")]));
        let username_errors: Vec<_> = errors.iter().filter(|e| e.field == "username").collect();
        assert_eq!(username_errors.len(), 1);
        assert_eq!(username_errors[0].message, messages().get("username-required"));
    }

    #[test]
    fn register_accepts_valid_input() {
        let schema = register_schema(&messages());
        let errors = schema.validate(&values(&[
            ("username", "sara"),
            ("firstName", "Sara"),
            ("lastName", "Adel"),
            ("email", "sara@example.com"),
            ("password", "Abcdefg1"),
            ("passwordConfirm", "Abcdefg1"),
        ]));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn mismatched_confirm_surfaces_on_confirm_field() {
        let schema = register_schema(&messages());
        let errors = schema.validate(&values(&[
            ("username", "sara"),
            ("firstName", "Sara"),
            ("lastName", "Adel"),
            ("email", "sara@example.com"),
            ("password", "Abcdefg1"),
            ("passwordConfirm", "Abcdefg2"),
        ]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "passwordConfirm");
        assert_eq!(errors[0].message, messages().get("password-confirm-mismatch"));
    }

    #[test]
    fn password_needs_upper_lower_and_length() {
        assert!(is_strong_password("Abcdefg1"));
        assert!(is_strong_password("aBcdefgh"));
        assert!(!is_strong_password("abcdefgh"));
        assert!(!is_strong_password("ABCDEFGH"));
        assert!(!is_strong_password("Abc1"));
    }

    #[test]
    fn email_syntax_checks() {
        assert!(is_email("sara@example.com"));
        assert!(is_email("s.adel@mail.example.org"));
        assert!(!is_email("sara"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("sara@"));
        assert!(!is_email("sara@example"));
        assert!(!is_email("sara@.com"));
        assert!(!is_email("sa ra@example.com"));
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let schema = register_schema(&messages());
        let errors = schema.validate(&values(&[("firstName", "مي")]));
        assert!(errors.iter().all(|e| e.field != "firstName"));
    }
}
