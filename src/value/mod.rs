//! Dynamic values and the loose coercion rules applied to them.
//!
//! Every utility in this crate accepts loosely-typed input: a number may
//! arrive as text, a boolean may take part in arithmetic, a list of user
//! records may contain entries that are not records at all. [`Value`] models
//! such input explicitly, and the coercions that the utilities rely on are
//! ordinary methods on it rather than implicit conversions.
//!
//! # Coercion rules
//!
//! | Kind        | [`Value::to_number`]          | [`Value::to_text`]             |
//! |-------------|-------------------------------|--------------------------------|
//! | `Undefined` | `NaN`                         | `"undefined"`                  |
//! | `Null`      | `0`                           | `"null"`                       |
//! | `Bool`      | `0` / `1`                     | `"false"` / `"true"`           |
//! | `Number`    | itself                        | shortest decimal, no `.0`      |
//! | `Text`      | parsed literal, empty → `0`   | itself                         |
//! | `Array`     | coercion of its text form     | elements joined by `,`         |
//! | `Object`    | `NaN`                         | `"[object Object]"`            |
//!
//! # Equality
//!
//! - [`strict_eq`] never coerces: values of different kinds are unequal,
//!   `NaN` is unequal to itself and `0 == -0`.
//! - [`same_value_zero`] is [`strict_eq`] except that `NaN` equals `NaN`.
//!   Deduplication and answer comparison use it.
//!
//! Arrays and objects have no identity in this model, so both predicates
//! compare them structurally.


use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A flat string-keyed mapping, used for records and answer sheets.
///
/// Keys are kept sorted, so two maps built in different insertion orders
/// are indistinguishable.
pub type Map = BTreeMap<String, Value>;

// ------------------------------------------------------------------------------------------------
// Value
// ------------------------------------------------------------------------------------------------

/// A dynamically typed input value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// An absent value.
    #[default]
    Undefined,

    /// An explicitly empty value.
    Null,

    /// A boolean.
    Bool(bool),

    /// A double-precision number, including `NaN` and the infinities.
    Number(f64),

    /// A text value. Empty text is valid.
    Text(String),

    /// An ordered sequence of values.
    Array(Vec<Value>),

    /// A string-keyed record.
    Object(Map),
}

/// The runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Number,
    Text,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::Text => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the runtime kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::Text(_) => Kind::Text,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns the elements if this value is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the text if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the fields if this value is an object.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `field` on an object.
    ///
    /// Returns `None` for a missing field and for any non-object value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(field))
    }

    /// Returns `true` for kinds that reduce to text before arithmetic or
    /// comparison: text, arrays and objects.
    pub(crate) fn is_textual(&self) -> bool {
        matches!(self, Value::Text(_) | Value::Array(_) | Value::Object(_))
    }

    // --------------------------------------------------------------------------------------------
    // Coercions
    // --------------------------------------------------------------------------------------------

    /// Coerces this value to a number under the loose rules in the module
    /// documentation.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::Text(s) => parse_number(s),
            Value::Array(_) => parse_number(&self.to_text()),
            Value::Object(_) => f64::NAN,
        }
    }

    /// Coerces this value to text under the loose rules in the module
    /// documentation.
    ///
    /// Numbers never use exponent notation: `1e21` renders as
    /// `"1000000000000000000000"` and `1e-7` as `"0.0000001"`. This text is
    /// also what [`crate::math::add`] concatenates.
    pub fn to_text(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::Text(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.to_text(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// ------------------------------------------------------------------------------------------------
// Equality and ordering
// ------------------------------------------------------------------------------------------------

/// Equality without coercion.
///
/// Values of different kinds are never equal. Numbers follow IEEE rules
/// (`NaN != NaN`, `0 == -0`). Arrays and objects compare element-wise with
/// the same predicate.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    eq_with(a, b, false)
}

/// Equality without coercion where `NaN` equals `NaN`.
///
/// Otherwise identical to [`strict_eq`]; in particular `0` and `-0` are equal.
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    eq_with(a, b, true)
}

fn eq_with(a: &Value, b: &Value, nan_eq: bool) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y || (nan_eq && x.is_nan() && y.is_nan()),
        (Value::Text(x), Value::Text(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| eq_with(x, y, nan_eq))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| eq_with(x, y, nan_eq)))
        }
        _ => false,
    }
}

/// Relational comparison under loose coercion.
///
/// When both sides are textual (text, arrays, objects) their text forms are
/// compared lexicographically by code point. Otherwise both sides are
/// coerced to numbers; the result is `None` if either is `NaN`.
pub fn loose_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    if a.is_textual() && b.is_textual() {
        return match (a, b) {
            (Value::Text(x), Value::Text(y)) => Some(x.cmp(y)),
            _ => Some(a.to_text().cmp(&b.to_text())),
        };
    }
    a.to_number().partial_cmp(&b.to_number())
}

// ------------------------------------------------------------------------------------------------
// Number parsing and formatting
// ------------------------------------------------------------------------------------------------

/// Parses a numeric literal the way loose coercion does.
///
/// Surrounding whitespace is ignored and empty text is zero. Accepted forms
/// are signed decimals with optional fraction and exponent, signed
/// `Infinity`, and unsigned `0x` / `0o` / `0b` integers. Anything else is
/// `NaN`.
pub(crate) fn parse_number(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    // `f64::from_str` also accepts "inf" and "nan"; only plain decimal
    // literals may reach it.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return f64::NAN,
        }
    }
    acc
}

/// Formats a number as text.
///
/// Integral values carry no fractional part, `-0` renders as `"0"`, and the
/// non-finite values render as `NaN`, `Infinity` and `-Infinity`.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

// ------------------------------------------------------------------------------------------------
// Conversions
// ------------------------------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        // Precision loss above 2^53 matches the f64 number model.
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}
