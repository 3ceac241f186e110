//! Closed classification over decoded `serde_json::Value`s.
//!
//! `serde_json` folds integers and floats into a single `Number` variant, so
//! the inferencer works with [`JsonKind`] instead, which splits them apart.

use serde_json::{Map, Number, Value};

/// The kind of a decoded JSON value, with integers told apart from other numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Object,
    Array,
    String,
    /// A number written without fraction or exponent, of any magnitude.
    Integer,
    /// Any number written with a fraction or exponent, including `1.0` and `1e3`.
    Number,
    Boolean,
    Null,
}

/// Extension trait classifying a value into its [`JsonKind`].
pub trait ValueExt {
    fn kind(&self) -> JsonKind;
}

impl ValueExt for Value {
    fn kind(&self) -> JsonKind {
        match self {
            Value::Object(_) => JsonKind::Object,
            Value::Array(_) => JsonKind::Array,
            Value::String(_) => JsonKind::String,
            Value::Number(n) if n.is_i64() || n.is_u64() || is_integer_literal(n) => {
                JsonKind::Integer
            }
            Value::Number(_) => JsonKind::Number,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Null => JsonKind::Null,
        }
    }
}

/// Integers outside the `i64`/`u64` range keep their source text (the
/// `arbitrary_precision` feature), so the literal decides: no fraction and no
/// exponent means integer.
fn is_integer_literal(n: &Number) -> bool {
    !n.to_string().contains(['.', 'e', 'E'])
}

/// Object iteration helper
pub fn iter_object(v: &Value) -> impl Iterator<Item = (&String, &Value)> {
    v.as_object().map(Map::iter).into_iter().flatten()
}

/// Array iteration helper
pub fn iter_array(v: &Value) -> impl Iterator<Item = &Value> {
    v.as_array().into_iter().flatten()
}
