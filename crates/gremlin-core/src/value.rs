//! Argument values a traversal can carry.
//!
//! `GremlinValue` is the closed set of argument types the traversal
//! machinery understands. Everything a step is invoked with is captured as
//! one of these variants, so translators and serializers can match
//! exhaustively instead of falling back to stringly-typed storage.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bytecode::Bytecode;
use crate::predicate::P;

/// A member of one of the engine's closed token enumerations.
///
/// Tokens carry both the category name and the member name exactly as the
/// engine declares them (`Direction.BOTH`, `Order.asc`, `T.id`). Casing is
/// never normalised; each category has its own convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub category: String,
    pub member: String,
}

impl Token {
    pub fn new(category: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            member: member.into(),
        }
    }
}

/// The closed set of traversal argument values.
///
/// Maps are kept as key/value pairs in recorded order rather than a hash
/// map: keys are themselves values (floats included), and argument order is
/// significant when a traversal is rendered back to script text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GremlinValue {
    Null,
    Text(String),
    Char(char),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Date(DateTime<FixedOffset>),
    Uuid(Uuid),
    Predicate(P),
    Token(Token),
    List(Vec<GremlinValue>),
    Map(Vec<(GremlinValue, GremlinValue)>),
    Traversal(Bytecode),
}

impl From<&str> for GremlinValue {
    fn from(text: &str) -> Self {
        GremlinValue::Text(text.to_string())
    }
}

impl From<String> for GremlinValue {
    fn from(text: String) -> Self {
        GremlinValue::Text(text)
    }
}

impl From<char> for GremlinValue {
    fn from(c: char) -> Self {
        GremlinValue::Char(c)
    }
}

impl From<i64> for GremlinValue {
    fn from(n: i64) -> Self {
        GremlinValue::Integer(n)
    }
}

impl From<f64> for GremlinValue {
    fn from(n: f64) -> Self {
        GremlinValue::Float(n)
    }
}

impl From<bool> for GremlinValue {
    fn from(b: bool) -> Self {
        GremlinValue::Bool(b)
    }
}

impl From<DateTime<FixedOffset>> for GremlinValue {
    fn from(date: DateTime<FixedOffset>) -> Self {
        GremlinValue::Date(date)
    }
}

impl From<Uuid> for GremlinValue {
    fn from(id: Uuid) -> Self {
        GremlinValue::Uuid(id)
    }
}

impl From<P> for GremlinValue {
    fn from(predicate: P) -> Self {
        GremlinValue::Predicate(predicate)
    }
}

impl From<Token> for GremlinValue {
    fn from(token: Token) -> Self {
        GremlinValue::Token(token)
    }
}

impl From<Bytecode> for GremlinValue {
    fn from(traversal: Bytecode) -> Self {
        GremlinValue::Traversal(traversal)
    }
}

impl From<Vec<GremlinValue>> for GremlinValue {
    fn from(values: Vec<GremlinValue>) -> Self {
        GremlinValue::List(values)
    }
}

impl From<Vec<(GremlinValue, GremlinValue)>> for GremlinValue {
    fn from(pairs: Vec<(GremlinValue, GremlinValue)>) -> Self {
        GremlinValue::Map(pairs)
    }
}

impl<T: Into<GremlinValue>> From<Option<T>> for GremlinValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => GremlinValue::Null,
        }
    }
}
