//! Arithmetic on loosely-typed operands.
//!
//! Operands are coerced with [`Value::to_number`], except that [`add`]
//! concatenates text forms when either operand is textual after reducing
//! arrays and objects to text.

#[cfg(test)]
mod tests;

use tracing::trace;

use crate::UtilError;
use crate::value::Value;

/// Adds two values.
///
/// If either operand is text (or an array or object, which reduce to
/// text), the result is the concatenation of both text forms. Otherwise the
/// result is the numeric sum; `NaN` and the infinities propagate.
///
/// ```rust
/// use utilbox::{Value, math::add};
///
/// assert_eq!(add(&2.into(), &true.into()), Value::Number(3.0));
/// assert_eq!(add(&2.into(), &"3".into()), Value::from("23"));
/// ```
pub fn add(a: &Value, b: &Value) -> Value {
    if a.is_textual() || b.is_textual() {
        trace!(left = %a.kind(), right = %b.kind(), "add: concatenating");
        let mut out = a.to_text();
        out.push_str(&b.to_text());
        return Value::Text(out);
    }
    Value::Number(a.to_number() + b.to_number())
}

/// Subtracts `b` from `a` after numeric coercion.
pub fn subtract(a: &Value, b: &Value) -> f64 {
    a.to_number() - b.to_number()
}

/// Multiplies two values after numeric coercion.
pub fn multiply(a: &Value, b: &Value) -> f64 {
    a.to_number() * b.to_number()
}

/// Divides `a` by `b` after numeric coercion.
///
/// An infinite divisor yields `0` for a finite dividend, a zero divisor
/// yields a signed infinity for a nonzero dividend, and `NaN` propagates.
///
/// # Errors
///
/// Returns [`UtilError::DivideByZero`] only if both operands coerce to zero
/// (`0`, `-0`, `""`, `false`, `null`, ...).
pub fn divide(a: &Value, b: &Value) -> Result<f64, UtilError> {
    let dividend = a.to_number();
    let divisor = b.to_number();
    if dividend == 0.0 && divisor == 0.0 {
        trace!(dividend = %a, divisor = %b, "divide: zero by zero");
        return Err(UtilError::DivideByZero);
    }
    Ok(dividend / divisor)
}
