//! Input validation for post payloads.

use std::borrow::Cow;

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

/// Checks that a write payload is an object with non-empty `title` and `content`.
///
/// Returns every failing field at once. A payload that is not a JSON object
/// yields the single `input` error.
///
/// # Errors
///
/// Returns the collected [`ValidationErrors`] when the payload is invalid.
pub fn validate_post_input(data: &Value) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let Some(fields) = data.as_object() else {
        errors.add("input", message_error("invalid_type", "Invalid data type"));
        return Err(errors);
    };

    if is_blank(fields.get("title")) {
        errors.add("title", message_error("required", "Title is required"));
    }

    if is_blank(fields.get("content")) {
        errors.add("content", message_error("required", "Content is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Absent, `null`, `""`, `false`, `0`, `[]` and `{}` all count as blank.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    }
}

fn message_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}
