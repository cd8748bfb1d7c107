//! Tests for `subtract`, `multiply` and `divide`.

use crate::UtilError;
use crate::math::*;
use crate::value::Value;

// ------------------------------------------------------------------------------------------------
// subtract
// ------------------------------------------------------------------------------------------------

#[test]
fn subtract_numbers() {
    assert_eq!(subtract(&5.into(), &3.into()), 2.0);
    assert_eq!(subtract(&(-5).into(), &(-3).into()), -2.0);
    assert_eq!(subtract(&5.into(), &(-3).into()), 8.0);
    assert_eq!(subtract(&0.into(), &0.into()), 0.0);
}

#[test]
fn subtract_special_values() {
    assert!(subtract(&2.into(), &f64::NAN.into()).is_nan());
    assert_eq!(
        subtract(&2.into(), &f64::INFINITY.into()),
        f64::NEG_INFINITY
    );
}

#[test]
fn subtract_coerces_text_and_booleans() {
    assert_eq!(subtract(&2.into(), &"3".into()), -1.0);
    assert_eq!(subtract(&2.into(), &"".into()), 2.0);
    assert_eq!(subtract(&2.into(), &true.into()), 1.0);
    assert!(subtract(&2.into(), &"three".into()).is_nan());
}

// ------------------------------------------------------------------------------------------------
// multiply
// ------------------------------------------------------------------------------------------------

#[test]
fn multiply_numbers() {
    assert_eq!(multiply(&2.into(), &3.into()), 6.0);
    assert_eq!(multiply(&(-2).into(), &(-3).into()), 6.0);
    assert_eq!(multiply(&2.into(), &(-3).into()), -6.0);
    assert_eq!(multiply(&0.into(), &0.into()), 0.0);
}

#[test]
fn multiply_special_values() {
    assert!(multiply(&2.into(), &f64::NAN.into()).is_nan());
    assert_eq!(multiply(&2.into(), &f64::INFINITY.into()), f64::INFINITY);
}

#[test]
fn multiply_coerces_text() {
    assert_eq!(multiply(&2.into(), &"3".into()), 6.0);
    assert_eq!(multiply(&" 4 ".into(), &Value::Null), 0.0);
}

// ------------------------------------------------------------------------------------------------
// divide
// ------------------------------------------------------------------------------------------------

#[test]
fn divide_numbers() {
    assert_eq!(divide(&6.into(), &3.into()).unwrap(), 2.0);
    assert_eq!(divide(&(-6).into(), &(-3).into()).unwrap(), 2.0);
    assert_eq!(divide(&(-6).into(), &3.into()).unwrap(), -2.0);
}

#[test]
fn divide_zero_by_zero_fails() {
    let err = divide(&0.into(), &0.into()).unwrap_err();
    assert_eq!(err, UtilError::DivideByZero);
    assert_eq!(err.to_string(), "Cannot divide by zero");
}

#[test]
fn divide_nonzero_by_zero_is_infinite() {
    assert_eq!(divide(&2.into(), &0.into()), Ok(f64::INFINITY));
    assert_eq!(divide(&(-2).into(), &0.into()), Ok(f64::NEG_INFINITY));
    assert_eq!(divide(&2.into(), &(-0.0).into()), Ok(f64::NEG_INFINITY));
    assert_eq!(divide(&1.into(), &"".into()), Ok(f64::INFINITY));
    assert_eq!(divide(&5.into(), &false.into()), Ok(f64::INFINITY));
}

#[test]
fn divide_zero_like_pairs_fail() {
    let pairs = [
        (Value::from(""), Value::Bool(false)),
        (Value::Null, Value::from("0")),
        (Value::from(-0.0), Value::from(" ")),
        (Value::Bool(false), Value::Null),
    ];
    for (a, b) in pairs {
        assert_eq!(
            divide(&a, &b).unwrap_err(),
            UtilError::DivideByZero,
            "{a:?} / {b:?}"
        );
    }
}

#[test]
fn divide_zero_by_nonzero_is_zero() {
    assert_eq!(divide(&0.into(), &5.into()), Ok(0.0));
    assert!(divide(&f64::NAN.into(), &0.into()).unwrap().is_nan());
    assert!(divide(&0.into(), &f64::NAN.into()).unwrap().is_nan());
}

#[test]
fn divide_special_values() {
    assert!(divide(&2.into(), &f64::NAN.into()).unwrap().is_nan());
    assert_eq!(divide(&2.into(), &f64::INFINITY.into()).unwrap(), 0.0);
    assert!(divide(&Value::Undefined, &2.into()).unwrap().is_nan());
}

#[test]
fn divide_coerces_text() {
    assert_eq!(divide(&"9".into(), &"3".into()).unwrap(), 3.0);
    assert_eq!(divide(&true.into(), &"0.5".into()).unwrap(), 2.0);
}
