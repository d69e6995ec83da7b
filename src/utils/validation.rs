use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// Key validator uses for errors raised by struct-level `schema` checks.
const SCHEMA_FIELD: &str = "__all__";

pub fn error_with_message(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// PostgreSQL `TEXT` cannot hold U+0000, so such input is rejected up front.
pub fn reject_nul<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Result<(), ValidationError> {
    if values.into_iter().flatten().any(|v| v.contains('\0')) {
        return Err(error_with_message(
            "nul_character",
            "Text fields must not contain NUL characters",
        ));
    }
    Ok(())
}

/// Flattens validator output into one line suitable for an API response.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None if field == SCHEMA_FIELD => err.code.to_string(),
                None => format!("{}: {}", field, err.code),
            })
        })
        .collect();

    if messages.is_empty() {
        "Invalid request".to_string()
    } else {
        messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_custom_messages_and_falls_back_to_codes() {
        let mut errors = ValidationErrors::new();
        errors.add("page", ValidationError::new("range"));
        errors.add(SCHEMA_FIELD, error_with_message("missing_fields", "Missing required fields: title"));

        assert_eq!(describe(&errors), "Missing required fields: title; page: range");
    }

    #[test]
    fn nul_characters_are_rejected() {
        assert!(reject_nul([Some("plain"), None, Some("")]).is_ok());
        let err = reject_nul([None, Some("x\0y")]).unwrap_err();
        assert_eq!(err.code, "nul_character");
    }
}
