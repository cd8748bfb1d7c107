//! Queries over lists of user records.
//!
//! A user list is a [`Value::Array`]; each record is a [`Value::Object`]
//! with the fields `id`, `name`, `age` and `email`. Nothing is validated:
//! ids may repeat, ages may be numbers or numeric text, and entries that
//! are not objects at all are tolerated and simply never match.
//!
//! Every query rejects a `users` argument that is not an array with
//! [`UtilError::TypeConstraint`] and never mutates its input.

#[cfg(test)]
mod tests;

use std::cmp::Ordering;

use tracing::trace;

use crate::UtilError;
use crate::value::{Map, Value, loose_cmp, strict_eq};

const NOT_AN_ARRAY: &str = "Users must be an array";

static UNDEFINED: Value = Value::Undefined;

// ------------------------------------------------------------------------------------------------
// Records
// ------------------------------------------------------------------------------------------------

/// A user record builder.
///
/// Converts into the [`Value::Object`] form the queries operate on.
///
/// ```rust
/// use utilbox::{Value, users::User};
///
/// let record = Value::from(User::new(1, "Alice", "24", "alice@example.com"));
/// assert_eq!(record.get("age"), Some(&Value::from("24")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Value,
    pub name: Value,
    pub age: Value,
    pub email: Value,
}

impl User {
    pub fn new(
        id: impl Into<Value>,
        name: impl Into<Value>,
        age: impl Into<Value>,
        email: impl Into<Value>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: age.into(),
            email: email.into(),
        }
    }
}

impl From<User> for Value {
    fn from(user: User) -> Self {
        let mut map = Map::new();
        map.insert("id".to_string(), user.id);
        map.insert("name".to_string(), user.name);
        map.insert("age".to_string(), user.age);
        map.insert("email".to_string(), user.email);
        Value::Object(map)
    }
}

/// Collects users into a user-list array.
pub fn users_to_value(users: impl IntoIterator<Item = User>) -> Value {
    users.into_iter().collect()
}

// ------------------------------------------------------------------------------------------------
// Internal helpers
// ------------------------------------------------------------------------------------------------

fn records(users: &Value) -> Result<&[Value], UtilError> {
    users
        .as_array()
        .ok_or_else(|| UtilError::type_constraint(NOT_AN_ARRAY, users.kind()))
}

/// Reads `name` from a record.
///
/// A missing field reads as `Undefined`; a non-object entry has no fields
/// and yields `None`.
fn field<'a>(entry: &'a Value, name: &str) -> Option<&'a Value> {
    entry
        .as_object()
        .map(|map| map.get(name).unwrap_or(&UNDEFINED))
}

// ------------------------------------------------------------------------------------------------
// Queries
// ------------------------------------------------------------------------------------------------

/// Returns the records whose age lies within `[min, max]` inclusive.
///
/// Ages are compared against the bounds with [`loose_cmp`], which coerces
/// them to numbers, so `"24"` qualifies for `[23, 29]`. Records whose age
/// is missing or non-numeric never match, and `min > max` always yields an
/// empty list.
///
/// # Errors
///
/// Returns [`UtilError::TypeConstraint`] if `users` is not an array.
pub fn filter_users_by_age(users: &Value, min: f64, max: f64) -> Result<Vec<Value>, UtilError> {
    let items = records(users)?;
    let (lower, upper) = (Value::Number(min), Value::Number(max));

    let matched: Vec<Value> = items
        .iter()
        .filter(|entry| {
            field(entry, "age").is_some_and(|age| {
                matches!(loose_cmp(age, &lower), Some(Ordering::Greater | Ordering::Equal))
                    && matches!(loose_cmp(age, &upper), Some(Ordering::Less | Ordering::Equal))
            })
        })
        .cloned()
        .collect();

    trace!(
        len = items.len(),
        matched = matched.len(),
        min,
        max,
        "filter_users_by_age"
    );
    Ok(matched)
}

/// Returns a new list of the records ordered by name.
///
/// Names are compared by their text form, lexicographically by code point
/// (`"Zoe"` sorts before `"adam"`). The sort is stable. Entries without a
/// name, including non-object entries, go last in their original order.
///
/// # Errors
///
/// Returns [`UtilError::TypeConstraint`] if `users` is not an array.
pub fn sort_users_by_name(users: &Value) -> Result<Vec<Value>, UtilError> {
    let items = records(users)?;

    let mut keyed: Vec<(Option<String>, &Value)> = items
        .iter()
        .map(|entry| {
            let name = entry.get("name").map(Value::to_text);
            (name, entry)
        })
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    trace!(len = items.len(), "sort_users_by_name");
    Ok(keyed.into_iter().map(|(_, entry)| entry.clone()).collect())
}

/// Returns the first record whose `id` is strictly equal to `id`.
///
/// No coercion takes place: `1` does not find a record with id `"1"`.
/// Non-object entries, such as nested arrays, are skipped.
///
/// # Errors
///
/// Returns [`UtilError::TypeConstraint`] if `users` is not an array.
pub fn find_user_by_id<'a>(users: &'a Value, id: &Value) -> Result<Option<&'a Value>, UtilError> {
    let items = records(users)?;

    let found = items
        .iter()
        .find(|entry| field(entry, "id").is_some_and(|candidate| strict_eq(candidate, id)));

    trace!(len = items.len(), found = found.is_some(), "find_user_by_id");
    Ok(found)
}

/// Returns `true` if some record's `email` is exactly `email`.
///
/// The comparison is case-sensitive and performs no normalization.
///
/// # Errors
///
/// Returns [`UtilError::TypeConstraint`] if `users` is not an array.
pub fn is_email_taken(users: &Value, email: &str) -> Result<bool, UtilError> {
    let items = records(users)?;
    Ok(items
        .iter()
        .any(|entry| entry.get("email").and_then(Value::as_text) == Some(email)))
}
