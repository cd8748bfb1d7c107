//! Sequence statistics and deduplication.
//!
//! All functions take the sequence as a [`Value`] and reject anything that
//! is not an array with [`UtilError::TypeConstraint`].


use tracing::trace;

use crate::UtilError;
use crate::value::{Value, same_value_zero};

const NOT_AN_ARRAY: &str = "Input must be an array";

/// Returns the elements of `seq`, or the type-constraint error.
fn elements(seq: &Value) -> Result<&[Value], UtilError> {
    seq.as_array()
        .ok_or_else(|| UtilError::type_constraint(NOT_AN_ARRAY, seq.kind()))
}

/// Returns the largest element of `seq` after numeric coercion.
///
/// An empty sequence yields negative infinity. Any element that coerces to
/// `NaN` makes the result `NaN`.
///
/// # Errors
///
/// Returns [`UtilError::TypeConstraint`] if `seq` is not an array.
pub fn find_max(seq: &Value) -> Result<f64, UtilError> {
    let items = elements(seq)?;
    trace!(len = items.len(), "find_max");
    Ok(fold_extreme(items, f64::NEG_INFINITY, f64::max))
}

/// Returns the smallest element of `seq` after numeric coercion.
///
/// An empty sequence yields positive infinity. Any element that coerces to
/// `NaN` makes the result `NaN`.
///
/// # Errors
///
/// Returns [`UtilError::TypeConstraint`] if `seq` is not an array.
pub fn find_min(seq: &Value) -> Result<f64, UtilError> {
    let items = elements(seq)?;
    trace!(len = items.len(), "find_min");
    Ok(fold_extreme(items, f64::INFINITY, f64::min))
}

/// Folds `items` with `pick`, short-circuiting to `NaN`.
///
/// `f64::max` / `f64::min` ignore `NaN`, so it has to be checked up front.
fn fold_extreme(items: &[Value], init: f64, pick: fn(f64, f64) -> f64) -> f64 {
    let mut acc = init;
    for item in items {
        let n = item.to_number();
        if n.is_nan() {
            return f64::NAN;
        }
        acc = pick(acc, n);
    }
    acc
}

/// Returns a new sequence with duplicates removed, keeping the first
/// occurrence of each value.
///
/// Values compare without coercion, with `0` equal to `-0` and `NaN` equal
/// to `NaN` (see [`same_value_zero`]). `1` and `"1"` are distinct.
///
/// # Errors
///
/// Returns [`UtilError::TypeConstraint`] if `seq` is not an array.
pub fn remove_duplicates(seq: &Value) -> Result<Vec<Value>, UtilError> {
    let items = elements(seq)?;

    let mut unique: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.iter().any(|seen| same_value_zero(seen, item)) {
            unique.push(item.clone());
        }
    }

    trace!(
        len = items.len(),
        removed = items.len() - unique.len(),
        "remove_duplicates"
    );
    Ok(unique)
}
