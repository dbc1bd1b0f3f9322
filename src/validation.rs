//! Shape checks for both ends of the personal info exchange.
//!
//! Input arrives as loosely-typed [`serde_json::Value`] and is decoded field
//! by field into the strongly-typed records from [`crate::types`]. Decoding
//! stops at the first violation and reports its JSON path.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::{
    errors::ValidationError,
    types::{BearerToken, BiologicalSex, PersonalInfoRequest, ProfileRecord, TokenMode},
};

// Local part, then dot-separated host labels ending in a TLD of two or more
// letters. Leading dots and `..` are checked separately because the regex
// crate has no lookaround.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

/// Returns `true` if `value` is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Validates the inbound `{ token?: string }` payload.
///
/// A present token must be a non-blank string in every mode. In
/// [`TokenMode::Strict`] the token is mandatory; in [`TokenMode::Fallback`]
/// it may be omitted and the caller's fallback is used later. `null` is not
/// the same as omitted and is rejected as a wrong type.
///
/// # Errors
///
/// Returns a request-side [`ValidationError`] naming `$` when the payload is
/// not an object, or `$.token` when the token is missing, blank or not a
/// string.
pub fn validate_request(
    input: &Value,
    mode: TokenMode,
) -> Result<PersonalInfoRequest, ValidationError> {
    let Value::Object(obj) = input else {
        return Err(ValidationError::request("$", "expected an object"));
    };

    let token = match obj.get("token") {
        None => None,
        Some(Value::String(raw)) => match BearerToken::parse(raw) {
            Some(token) => Some(token),
            None => {
                return Err(ValidationError::request(
                    "$.token",
                    "expected a non-empty Personal Access Token",
                ));
            }
        },
        Some(other) => {
            return Err(ValidationError::request(
                "$.token",
                format!("expected a string, received {}", type_name(other)),
            ));
        }
    };

    if token.is_none() && mode == TokenMode::Strict {
        return Err(ValidationError::request(
            "$.token",
            "is required: Personal Access Token must be provided",
        ));
    }

    Ok(PersonalInfoRequest { token })
}

/// Validates a decoded Oura personal info body into a [`ProfileRecord`].
///
/// `id` and `email` are required strings and `email` must pass
/// [`is_valid_email`]. Optional fields may be absent; when present they must
/// have the documented type, and `null` counts as a wrong type. Both the
/// snake_case wire names and their camelCase aliases are accepted. If both
/// spellings are present each is type-checked and they must agree. Unknown
/// fields are ignored.
///
/// # Errors
///
/// Returns a response-side [`ValidationError`] for the first field that
/// violates its constraint.
pub fn validate_response(input: &Value) -> Result<ProfileRecord, ValidationError> {
    let Value::Object(obj) = input else {
        return Err(ValidationError::response("$", "expected an object"));
    };

    let id = required_string(obj, "id")?;
    let email = required_string(obj, "email")?;
    if !is_valid_email(&email) {
        return Err(ValidationError::response(
            "$.email",
            "expected a valid email address",
        ));
    }

    let age = optional_field(obj, &["age"], number)?;
    if let Some(age) = age {
        if age < 0.0 {
            return Err(ValidationError::response(
                "$.age",
                "expected a non-negative number",
            ));
        }
    }

    let weight = optional_field(obj, &["weight"], number)?;
    let height = optional_field(obj, &["height"], number)?;
    let biological_sex = optional_field(obj, &["biological_sex", "biologicalSex"], sex)?;
    let date_of_birth = optional_field(obj, &["date_of_birth", "dateOfBirth"], string)?;

    Ok(ProfileRecord {
        id,
        email,
        age,
        weight,
        height,
        biological_sex,
        date_of_birth,
    })
}

/// Decodes an optional field that may be spelled as any of `keys`.
///
/// Only a missing key is absent. Every spelling that is present is decoded,
/// and differing values across spellings are rejected.
fn optional_field<T, F>(
    obj: &Map<String, Value>,
    keys: &[&str],
    decode: F,
) -> Result<Option<T>, ValidationError>
where
    T: PartialEq,
    F: Fn(&str, &Value) -> Result<T, ValidationError>,
{
    let mut found: Option<(&str, T)> = None;
    for &key in keys {
        let Some(value) = obj.get(key) else {
            continue;
        };
        let decoded = decode(key, value)?;
        if let Some((first, existing)) = &found {
            if *existing != decoded {
                return Err(ValidationError::response(
                    format!("$.{key}"),
                    format!("conflicts with $.{first}"),
                ));
            }
        } else {
            found = Some((key, decoded));
        }
    }
    Ok(found.map(|(_, v)| v))
}

fn required_string(obj: &Map<String, Value>, key: &str) -> Result<String, ValidationError> {
    match obj.get(key) {
        None => Err(ValidationError::response(
            format!("$.{key}"),
            "is required: expected a string",
        )),
        Some(value) => string(key, value),
    }
}

fn string(key: &str, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(wrong_type(key, "a string", other)),
    }
}

fn number(key: &str, value: &Value) -> Result<f64, ValidationError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            ValidationError::response(format!("$.{key}"), "expected a finite number")
        }),
        other => Err(wrong_type(key, "a number", other)),
    }
}

fn sex(key: &str, value: &Value) -> Result<BiologicalSex, ValidationError> {
    match value {
        Value::String(s) => BiologicalSex::from_str_opt(s).ok_or_else(|| {
            ValidationError::response(
                format!("$.{key}"),
                format!("expected one of 'male' | 'female', received '{s}'"),
            )
        }),
        other => Err(wrong_type(key, "one of 'male' | 'female'", other)),
    }
}

fn wrong_type(key: &str, expected: &str, value: &Value) -> ValidationError {
    ValidationError::response(
        format!("$.{key}"),
        format!("expected {expected}, received {}", type_name(value)),
    )
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
