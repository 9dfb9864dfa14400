//! Closed token enumerations of the traversal language.
//!
//! Each category mirrors the engine's declaration exactly, member casing
//! included: `Direction` members are uppercase, `Order` members lowercase,
//! `Operator` members camelCase. Translators rely on `as_str` returning the
//! verbatim spelling, so none of these go through any case conversion.

use std::fmt;

use crate::value::{GremlinValue, Token};

/// Edge and vertex traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Out,
    In,
    Both,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Out => "OUT",
            Direction::In => "IN",
            Direction::Both => "BOTH",
        }
    }

    pub fn as_token(&self) -> Token {
        Token::new("Direction", self.as_str())
    }
}

/// Sort order for `order().by(...)` modulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
    Shuffle,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
            Order::Shuffle => "shuffle",
        }
    }

    pub fn as_token(&self) -> Token {
        Token::new("Order", self.as_str())
    }
}

/// Whether a step applies to the local object or the global stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Local,
    Global,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Local => "local",
            Scope::Global => "global",
        }
    }

    pub fn as_token(&self) -> Token {
        Token::new("Scope", self.as_str())
    }
}

/// Map-entry projection selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Keys,
    Values,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Keys => "keys",
            Column::Values => "values",
        }
    }

    pub fn as_token(&self) -> Token {
        Token::new("Column", self.as_str())
    }
}

/// Which labelled value `select` pops from the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pop {
    First,
    Last,
    All,
    Mixed,
}

impl Pop {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pop::First => "first",
            Pop::Last => "last",
            Pop::All => "all",
            Pop::Mixed => "mixed",
        }
    }

    pub fn as_token(&self) -> Token {
        Token::new("Pop", self.as_str())
    }
}

/// Element meta-property accessors (`T.id`, `T.label`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum T {
    Id,
    Label,
    Key,
    Value,
}

impl T {
    pub fn as_str(&self) -> &'static str {
        match self {
            T::Id => "id",
            T::Label => "label",
            T::Key => "key",
            T::Value => "value",
        }
    }

    pub fn as_token(&self) -> Token {
        Token::new("T", self.as_str())
    }
}

/// Vertex property cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    List,
    Set,
}

impl Cardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::Single => "single",
            Cardinality::List => "list",
            Cardinality::Set => "set",
        }
    }

    pub fn as_token(&self) -> Token {
        Token::new("Cardinality", self.as_str())
    }
}

/// Binary reducers used by sack and aggregate steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    AddAll,
    And,
    Assign,
    Div,
    Max,
    Min,
    Minus,
    Mult,
    Or,
    Sum,
    SumLong,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::AddAll => "addAll",
            Operator::And => "and",
            Operator::Assign => "assign",
            Operator::Div => "div",
            Operator::Max => "max",
            Operator::Min => "min",
            Operator::Minus => "minus",
            Operator::Mult => "mult",
            Operator::Or => "or",
            Operator::Sum => "sum",
            Operator::SumLong => "sumLong",
        }
    }

    pub fn as_token(&self) -> Token {
        Token::new("Operator", self.as_str())
    }
}

/// Barrier consumers for `barrier()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Barrier {
    NormSack,
}

impl Barrier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Barrier::NormSack => "normSack",
        }
    }

    pub fn as_token(&self) -> Token {
        Token::new("Barrier", self.as_str())
    }
}

/// Branch selection for `choose`/`branch` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Any,
    None,
}

impl Pick {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pick::Any => "any",
            Pick::None => "none",
        }
    }

    pub fn as_token(&self) -> Token {
        Token::new("Pick", self.as_str())
    }
}

macro_rules! impl_token_conversions {
    ($($category:ident),+ $(,)?) => {
        $(
            impl fmt::Display for $category {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }

            impl From<$category> for GremlinValue {
                fn from(member: $category) -> Self {
                    GremlinValue::Token(member.as_token())
                }
            }
        )+
    };
}

impl_token_conversions!(
    Direction,
    Order,
    Scope,
    Column,
    Pop,
    T,
    Cardinality,
    Operator,
    Barrier,
    Pick,
);
