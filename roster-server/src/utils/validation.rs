//! Input validation
//!
//! Payload checks are declared as static rule tables, one per payload type,
//! and run by a single generic [`validate`] walk over the raw JSON. Every
//! violation is collected so the client sees all of them in one response.

use serde_json::Value;
use shared::serde_helpers::parse_date;

// ── Text length limits (mirrored by the schema CHECKs) ──────────────

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 20;
pub const MAX_STREET_NAME_LEN: usize = 100;
pub const MAX_STREET_NUMBER_LEN: usize = 50;
pub const MAX_REGION_LEN: usize = 100;
pub const MAX_POSTCODE_LEN: usize = 20;

/// Expected shape of a single field
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// String whose character count lies in `min..=max`
    Text { min: usize, max: usize },
    Integer,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    Date,
    /// Nested object checked against its own rules
    Object(&'static [FieldRule]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// JSON field name
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: true }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false }
    }
}

const fn text(min: usize, max: usize) -> FieldKind {
    FieldKind::Text { min, max }
}

// ── Rule tables ─────────────────────────────────────────────────────

pub const CREATE_ADDRESS_RULES: &[FieldRule] = &[
    FieldRule::required("streetName", text(1, MAX_STREET_NAME_LEN)),
    FieldRule::required("streetNumber1", text(1, MAX_STREET_NUMBER_LEN)),
    FieldRule::optional("streetNumber2", text(0, MAX_STREET_NUMBER_LEN)),
    FieldRule::required("state", text(1, MAX_REGION_LEN)),
    FieldRule::required("city", text(1, MAX_REGION_LEN)),
    FieldRule::required("postcode", text(1, MAX_POSTCODE_LEN)),
    FieldRule::required("countryId", FieldKind::Integer),
];

pub const CREATE_EMPLOYEE_RULES: &[FieldRule] = &[
    FieldRule::required("firstName", text(1, MAX_NAME_LEN)),
    FieldRule::required("lastName", text(1, MAX_NAME_LEN)),
    FieldRule::required("hireDate", FieldKind::Date),
    FieldRule::required("departmentId", FieldKind::Integer),
    FieldRule::required("phone", text(1, MAX_PHONE_LEN)),
    FieldRule::required("address", FieldKind::Object(CREATE_ADDRESS_RULES)),
];

pub const UPDATE_ADDRESS_RULES: &[FieldRule] = &[
    FieldRule::optional("streetName", text(1, MAX_STREET_NAME_LEN)),
    FieldRule::optional("streetNumber1", text(1, MAX_STREET_NUMBER_LEN)),
    FieldRule::optional("streetNumber2", text(0, MAX_STREET_NUMBER_LEN)),
    FieldRule::optional("state", text(1, MAX_REGION_LEN)),
    FieldRule::optional("city", text(1, MAX_REGION_LEN)),
    FieldRule::optional("postcode", text(1, MAX_POSTCODE_LEN)),
    FieldRule::optional("countryId", FieldKind::Integer),
];

pub const UPDATE_EMPLOYEE_RULES: &[FieldRule] = &[
    FieldRule::optional("firstName", text(1, MAX_NAME_LEN)),
    FieldRule::optional("lastName", text(1, MAX_NAME_LEN)),
    FieldRule::optional("hireDate", FieldKind::Date),
    FieldRule::optional("departmentId", FieldKind::Integer),
    FieldRule::optional("phone", text(1, MAX_PHONE_LEN)),
    FieldRule::optional("address", FieldKind::Object(UPDATE_ADDRESS_RULES)),
];

// ── Validation ──────────────────────────────────────────────────────

/// Check `value` against `rules`, returning every violation message.
///
/// An empty vector means the payload is valid. Absent and `null` fields are
/// only violations when the rule is required.
pub fn validate(rules: &[FieldRule], value: &Value) -> Vec<String> {
    let mut errors = Vec::new();
    match value {
        Value::Object(_) => validate_object(rules, value, "", &mut errors),
        _ => errors.push("request body must be a JSON object".to_string()),
    }
    errors
}

fn validate_object(rules: &[FieldRule], object: &Value, prefix: &str, errors: &mut Vec<String>) {
    for rule in rules {
        let path = format!("{prefix}{}", rule.name);
        match object.get(rule.name) {
            None | Some(Value::Null) => {
                if rule.required {
                    errors.push(format!("{path} should not be empty"));
                }
            }
            Some(field) => validate_field(rule.kind, field, &path, errors),
        }
    }
}

fn validate_field(kind: FieldKind, field: &Value, path: &str, errors: &mut Vec<String>) {
    match kind {
        FieldKind::Text { min, max } => match field.as_str() {
            None => errors.push(format!("{path} must be a string")),
            Some(s) => {
                let len = s.chars().count();
                if min > 0 && s.trim().is_empty() {
                    errors.push(format!("{path} should not be empty"));
                } else if len < min {
                    errors.push(format!("{path} must be at least {min} characters"));
                } else if len > max {
                    errors.push(format!("{path} must be at most {max} characters"));
                }
            }
        },
        FieldKind::Integer => {
            if as_integer(field).is_none() {
                errors.push(format!("{path} must be an integer number"));
            }
        }
        FieldKind::Date => {
            if field.as_str().and_then(parse_date).is_none() {
                errors.push(format!("{path} must be a valid date (YYYY-MM-DD)"));
            }
        }
        FieldKind::Object(rules) => {
            if field.is_object() {
                validate_object(rules, field, &format!("{path}."), errors);
            } else {
                errors.push(format!("{path} must be an object"));
            }
        }
    }
}

/// Integer value of a JSON number, accepting floats with no fractional part
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    (f.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&f)).then_some(f as i64)
}

/// Rewrite integral floats (`1.0`) in integer fields as JSON integers so the
/// payload deserializes into `i64` fields.
pub fn normalize_integers(rules: &[FieldRule], value: &mut Value) {
    let Value::Object(object) = value else {
        return;
    };
    for rule in rules {
        let Some(field) = object.get_mut(rule.name) else {
            continue;
        };
        match rule.kind {
            FieldKind::Integer => {
                if field.is_f64()
                    && let Some(n) = as_integer(field)
                {
                    *field = Value::from(n);
                }
            }
            FieldKind::Object(nested) => normalize_integers(nested, field),
            FieldKind::Text { .. } | FieldKind::Date => {}
        }
    }
}
