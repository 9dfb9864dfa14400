//! Comparison predicates attached to filter steps.
//!
//! A predicate records the operator name plus its operands, mirroring how
//! the traversal language captures `has`/`where` style filters. Range forms
//! (`between`, `inside`, `outside`) pack their two operands into a single
//! list value; connectives (`and`, `or`) nest whole predicates.

use serde::{Deserialize, Serialize};

use crate::value::GremlinValue;

/// A filter predicate as recorded in bytecode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct P {
    /// Predicate operator name (`eq`, `gt`, `between`, `and`, ...).
    pub operator: String,
    /// Primary operand. For connectives this is the left-hand predicate.
    pub value: Box<GremlinValue>,
    /// Right-hand predicate of a connective, absent otherwise.
    pub other: Option<Box<GremlinValue>>,
}

impl P {
    /// Predicate with a single operand.
    pub fn new(operator: impl Into<String>, value: impl Into<GremlinValue>) -> Self {
        Self {
            operator: operator.into(),
            value: Box::new(value.into()),
            other: None,
        }
    }

    fn range(operator: &str, first: impl Into<GremlinValue>, second: impl Into<GremlinValue>) -> Self {
        Self::new(operator, vec![first.into(), second.into()])
    }

    pub fn eq(value: impl Into<GremlinValue>) -> Self {
        Self::new("eq", value)
    }

    pub fn neq(value: impl Into<GremlinValue>) -> Self {
        Self::new("neq", value)
    }

    pub fn lt(value: impl Into<GremlinValue>) -> Self {
        Self::new("lt", value)
    }

    pub fn lte(value: impl Into<GremlinValue>) -> Self {
        Self::new("lte", value)
    }

    pub fn gt(value: impl Into<GremlinValue>) -> Self {
        Self::new("gt", value)
    }

    pub fn gte(value: impl Into<GremlinValue>) -> Self {
        Self::new("gte", value)
    }

    /// Inclusive-start, exclusive-end range test.
    pub fn between(first: impl Into<GremlinValue>, second: impl Into<GremlinValue>) -> Self {
        Self::range("between", first, second)
    }

    /// Exclusive range test.
    pub fn inside(first: impl Into<GremlinValue>, second: impl Into<GremlinValue>) -> Self {
        Self::range("inside", first, second)
    }

    /// Complement of `inside`.
    pub fn outside(first: impl Into<GremlinValue>, second: impl Into<GremlinValue>) -> Self {
        Self::range("outside", first, second)
    }

    /// Membership test against the given collection.
    pub fn within(values: Vec<GremlinValue>) -> Self {
        Self::new("within", values)
    }

    /// Non-membership test against the given collection.
    pub fn without(values: Vec<GremlinValue>) -> Self {
        Self::new("without", values)
    }

    /// Conjunction of this predicate with another.
    pub fn and(self, other: P) -> Self {
        Self::connective("and", self, other)
    }

    /// Disjunction of this predicate with another.
    pub fn or(self, other: P) -> Self {
        Self::connective("or", self, other)
    }

    fn connective(operator: &str, left: P, right: P) -> Self {
        Self {
            operator: operator.to_string(),
            value: Box::new(GremlinValue::Predicate(left)),
            other: Some(Box::new(GremlinValue::Predicate(right))),
        }
    }
}
