use crate::api::ParseError;
use crate::constant::is_help_token;
use crate::model::Value;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Whether either help token appears anywhere in the input.
pub(crate) fn help_requested(tokens: &[&str]) -> bool {
    tokens.iter().any(|token| is_help_token(token))
}

/// Find the raw text for the flag `name`.
///
/// The first token that is longer than `name` and starts with it wins.
/// Its remainder, after skipping one separator character, is the raw text.
/// A token equal to `name` itself carries no value and is rejected.
///
/// Every flag scans the full input independently, so a token may match more than one flag when
/// one name is a prefix of another (ex: `-count` also matches `-counter=1`).
pub(crate) fn scan(name: &str, tokens: &[&str]) -> Result<Option<String>, ParseError> {
    for token in tokens {
        if *token == name {
            return Err(ParseError::UndefinedFlagProvided {
                name: name.to_string(),
            });
        }

        if token.len() > name.len() {
            if let Some(rest) = token.strip_prefix(name) {
                let mut remainder = rest.chars();
                // Skip the separator.
                remainder.next();
                return Ok(Some(remainder.as_str().to_string()));
            }
        }
    }

    Ok(None)
}

/// Pick the value to carry into coercion.
///
/// Matched text wins, otherwise the flag keeps its `current` value (only present when re-parsing).
/// Absent or empty text falls back to the default.
#[cfg_attr(not(feature = "tracing_debug"), allow(unused_variables))]
pub(crate) fn stage(
    name: &str,
    raw: Option<String>,
    current: Option<Value>,
    default: &Value,
) -> Value {
    match raw.map(Value::Text).or(current) {
        Some(Value::Text(text)) if text.is_empty() => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Flag {name} has empty text.  Falling back to default: {default}.");
            }
            default.clone()
        }
        Some(value) => value,
        None => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Flag {name} not found.  Falling back to default: {default}.");
            }
            default.clone()
        }
    }
}
