//! Gremlin-Groovy script translation.
//!
//! Renders recorded bytecode back into textual Groovy form: the traversal
//! source identifier followed by one `.operator(args)` fragment per
//! instruction, sources first. Child traversals render inline, rooted at
//! the anonymous source `__`.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use gremlin_core::{Bytecode, GremlinValue, Instruction, P};

use crate::error::TranslateError;
use crate::ScriptTranslator;

/// Root identifier for inline child traversals.
const ANONYMOUS_SOURCE: &str = "__";

/// Translator producing Gremlin-Groovy script text.
///
/// Text and char values are emitted verbatim between single quotes, with no
/// escaping; quoting or rejecting untrusted content is the caller's
/// concern. Numbers render in their invariant decimal form regardless of
/// locale.
pub struct GroovyTranslator {
    /// Identifier the script is rooted at, `g` by convention.
    pub traversal_source: String,
    /// Maximum argument nesting depth, unlimited when `None`. A limit of
    /// `n` allows composite values (lists, maps, predicates, child
    /// traversals) nested up to `n` levels deep.
    pub max_depth: Option<usize>,
}

impl Default for GroovyTranslator {
    fn default() -> Self {
        Self::of("g")
    }
}

impl GroovyTranslator {
    /// Create a translator rooted at the given traversal source.
    pub fn of(traversal_source: impl Into<String>) -> Self {
        Self {
            traversal_source: traversal_source.into(),
            max_depth: None,
        }
    }

    /// Cap argument nesting depth, for bytecode from untrusted producers.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Render a traversal rooted at the anonymous source `__` instead of
    /// the configured one.
    pub fn translate_child(&self, bytecode: &Bytecode) -> Result<String, TranslateError> {
        self.format_bytecode(bytecode, ANONYMOUS_SOURCE, 0)
    }

    fn format_bytecode(
        &self,
        bytecode: &Bytecode,
        root: &str,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let mut script = String::from(root);

        for (index, instruction) in bytecode.iter().enumerate() {
            if instruction.operator.is_empty() {
                return Err(TranslateError::InvalidInstruction { index });
            }
            script.push_str(&self.format_instruction(instruction, depth)?);
        }

        Ok(script)
    }

    fn format_instruction(
        &self,
        instruction: &Instruction,
        depth: usize,
    ) -> Result<String, TranslateError> {
        Ok(format!(
            ".{}({})",
            instruction.operator,
            self.format_args(&instruction.args, depth)?
        ))
    }

    fn format_args(&self, args: &[GremlinValue], depth: usize) -> Result<String, TranslateError> {
        let rendered = args
            .iter()
            .map(|arg| self.format_value(arg, depth))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rendered.join(", "))
    }

    /// One argument value in its Groovy literal form.
    fn format_value(&self, value: &GremlinValue, depth: usize) -> Result<String, TranslateError> {
        self.check_depth(depth)?;

        Ok(match value {
            GremlinValue::Null => "null".to_string(),
            GremlinValue::Text(text) => format!("'{}'", text),
            GremlinValue::Char(c) => format!("'{}'", c),
            GremlinValue::Integer(n) => n.to_string(),
            GremlinValue::Float(n) => n.to_string(),
            GremlinValue::Bool(b) => b.to_string(),
            GremlinValue::Date(date) => format_date(date),
            GremlinValue::Uuid(id) => format!("UUID.fromString('{}')", id),
            GremlinValue::Token(token) => format!("{}.{}", token.category, token.member),
            GremlinValue::Predicate(p) => self.format_predicate(p, depth + 1)?,
            GremlinValue::List(values) => format!("[{}]", self.format_args(values, depth + 1)?),
            GremlinValue::Map(pairs) => self.format_map(pairs, depth + 1)?,
            GremlinValue::Traversal(child) => {
                self.format_bytecode(child, ANONYMOUS_SOURCE, depth + 1)?
            }
        })
    }

    fn format_predicate(&self, predicate: &P, depth: usize) -> Result<String, TranslateError> {
        let value = self.format_value(&predicate.value, depth)?;

        Ok(match &predicate.other {
            Some(other) => format!(
                "P.{}({}, {})",
                predicate.operator,
                value,
                self.format_value(other, depth)?
            ),
            None => format!("P.{}({})", predicate.operator, value),
        })
    }

    fn format_map(
        &self,
        pairs: &[(GremlinValue, GremlinValue)],
        depth: usize,
    ) -> Result<String, TranslateError> {
        let entries = pairs
            .iter()
            .map(|(key, value)| {
                Ok(format!(
                    "{}: {}",
                    self.format_value(key, depth)?,
                    self.format_value(value, depth)?
                ))
            })
            .collect::<Result<Vec<_>, TranslateError>>()?;
        Ok(format!("[{}]", entries.join(", ")))
    }

    fn check_depth(&self, depth: usize) -> Result<(), TranslateError> {
        match self.max_depth {
            Some(limit) if depth > limit => Err(TranslateError::RecursionLimitExceeded { limit }),
            _ => Ok(()),
        }
    }
}

/// Groovy `Date` constructor call: year offset from 1900, zero-based month.
fn format_date(date: &DateTime<FixedOffset>) -> String {
    format!(
        "new Date({}, {}, {}, {}, {}, {})",
        date.year() - 1900,
        date.month() - 1,
        date.day(),
        date.hour(),
        date.minute(),
        date.second()
    )
}

impl ScriptTranslator for GroovyTranslator {
    fn target_language(&self) -> &str {
        "gremlin-groovy"
    }

    fn translate(&self, bytecode: &Bytecode) -> Result<String, TranslateError> {
        self.format_bytecode(bytecode, &self.traversal_source, 0)
    }
}
