//! # utilbox
//!
//! Small, pure utility functions over loosely-typed input: arithmetic with
//! loose coercion, array statistics and deduplication, string helpers, a
//! strict answer-sheet comparator, and user-list queries.
//!
//! Input that would be dynamically typed elsewhere is modelled by
//! [`Value`]. Every coercion the utilities perform is an explicit method on
//! it, documented in the [`value`] module.
//!
//! ## Quick Start
//!
//! ```rust
//! use utilbox::{Value, UtilError, array, math, string, users};
//!
//! // Arithmetic with loose coercion.
//! assert_eq!(math::add(&2.into(), &3.into()), Value::Number(5.0));
//! assert_eq!(math::add(&2.into(), &"3".into()), Value::from("23"));
//! assert!(matches!(
//!     math::divide(&0.into(), &0.into()),
//!     Err(UtilError::DivideByZero)
//! ));
//!
//! // Arrays.
//! let seq = Value::from(vec![1, 3, 3, 2]);
//! assert_eq!(array::find_max(&seq).unwrap(), 3.0);
//! assert_eq!(array::remove_duplicates(&seq).unwrap().len(), 3);
//!
//! // Strings.
//! assert_eq!(string::capitalize(&"hello".into()).unwrap(), "Hello");
//!
//! // User lists.
//! let list = users::users_to_value([
//!     users::User::new(1, "Bob", 30, "bob@example.com"),
//!     users::User::new(2, "Alice", "24", "alice@example.com"),
//! ]);
//! assert_eq!(users::filter_users_by_age(&list, 20.0, 25.0).unwrap().len(), 1);
//! assert!(users::is_email_taken(&list, "bob@example.com").unwrap());
//! ```
//!
//! ## Errors
//!
//! Fallible operations return [`UtilError`]. Nothing panics on caller input.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` for rejected input, `trace`
//! for per-call summaries) and never installs a subscriber itself.

pub mod array;
pub mod knowledge;
pub mod math;
pub mod string;
pub mod users;
pub mod value;

use thiserror::Error;

pub use value::{Kind, Map, Value, loose_cmp, same_value_zero, strict_eq};

// ------------------------------------------------------------------------------------------------
// Error type
// ------------------------------------------------------------------------------------------------

/// Errors returned by the utilities in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilError {
    /// An input had the wrong runtime kind.
    ///
    /// The message names the violated precondition, e.g.
    /// `"Input must be an array"`.
    #[error("{0}")]
    TypeConstraint(String),

    /// A division had a zero divisor.
    #[error("Cannot divide by zero")]
    DivideByZero,
}

impl UtilError {
    /// Builds a [`UtilError::TypeConstraint`], logging the rejected kind.
    pub(crate) fn type_constraint(message: &str, got: Kind) -> Self {
        tracing::debug!(kind = %got, "{message}");
        UtilError::TypeConstraint(message.to_string())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use tracing_subscriber::EnvFilter;

    /// Initialize tracing subscriber controlled by `RUST_LOG` env var.
    /// Safe to call multiple times; only the first call takes effect.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}
