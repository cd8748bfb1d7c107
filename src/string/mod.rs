//! Text helpers operating on Unicode scalar values.
//!
//! Inputs that are not [`Value::Text`] are rejected with
//! [`UtilError::TypeConstraint`]; no text coercion is attempted.

#[cfg(test)]
mod tests;

use tracing::trace;

use crate::UtilError;
use crate::value::Value;

const NOT_A_STRING: &str = "Input must be a string";

fn text(input: &Value) -> Result<&str, UtilError> {
    input
        .as_text()
        .ok_or_else(|| UtilError::type_constraint(NOT_A_STRING, input.kind()))
}

/// Uppercases the first character and leaves the rest unchanged.
///
/// Case mapping of the first character may expand it (`'ß'` becomes
/// `"SS"`). Empty text yields empty text.
///
/// # Errors
///
/// Returns [`UtilError::TypeConstraint`] if `input` is not text.
pub fn capitalize(input: &Value) -> Result<String, UtilError> {
    let s = text(input)?;
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Ok(String::new());
    };

    let mut out = String::with_capacity(s.len());
    out.extend(first.to_uppercase());
    out.push_str(chars.as_str());
    Ok(out)
}

/// Returns the characters of `input` in reverse order.
///
/// # Errors
///
/// Returns [`UtilError::TypeConstraint`] if `input` is not text.
pub fn reverse_string(input: &Value) -> Result<String, UtilError> {
    Ok(text(input)?.chars().rev().collect())
}

/// Returns `true` if `input` reads the same forwards and backwards.
///
/// The comparison is literal: case, whitespace and punctuation all count,
/// so `"Racecar"` is not a palindrome. Empty text and single characters are.
///
/// # Errors
///
/// Returns [`UtilError::TypeConstraint`] if `input` is not text.
pub fn is_palindrome(input: &Value) -> Result<bool, UtilError> {
    let s = text(input)?;
    let result = s.chars().eq(s.chars().rev());
    trace!(len = s.len(), result, "is_palindrome");
    Ok(result)
}
