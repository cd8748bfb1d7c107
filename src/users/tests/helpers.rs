use crate::test_support::init_tracing;
use crate::users::{User, users_to_value};
use crate::value::Value;

/// Alice (25), Bob (30), Charlie (20).
pub fn three_users() -> Value {
    init_tracing();
    users_to_value([
        User::new(1, "Alice", 25, "alice@example.com"),
        User::new(2, "Bob", 30, "bob@example.com"),
        User::new(3, "Charlie", 20, "charlie@example.com"),
    ])
}

pub fn user(id: i32, name: &str, age: impl Into<Value>, email: &str) -> Value {
    User::new(id, name, age, email).into()
}

pub fn users_must_be_an_array() -> crate::UtilError {
    crate::UtilError::TypeConstraint("Users must be an array".into())
}
