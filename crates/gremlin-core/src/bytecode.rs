//! Instruction-list form of a traversal.
//!
//! A traversal is recorded as two ordered instruction lists: configuration
//! calls applied to the traversal source (`withSack`, `withBulk`, ...) and
//! the traversal steps themselves (`V`, `has`, `repeat`, ...). Each
//! instruction is an operator name plus the arguments it was invoked with,
//! in call order. Nothing is deduplicated or reordered.

use serde::{Deserialize, Serialize};

use crate::value::GremlinValue;

/// A single operator application inside a traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Operator name, spelled exactly as the step or source method.
    pub operator: String,
    /// Arguments in the order they were passed.
    pub args: Vec<GremlinValue>,
}

impl Instruction {
    pub fn new(operator: impl Into<String>, args: Vec<GremlinValue>) -> Self {
        Self {
            operator: operator.into(),
            args,
        }
    }
}

/// Ordered instruction lists describing one traversal.
///
/// Source instructions always precede step instructions when the bytecode
/// is rendered or evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bytecode {
    pub source_instructions: Vec<Instruction>,
    pub step_instructions: Vec<Instruction>,
}

impl Bytecode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a traversal-source configuration call.
    pub fn add_source(&mut self, operator: impl Into<String>, args: Vec<GremlinValue>) {
        self.source_instructions
            .push(Instruction::new(operator, args));
    }

    /// Record a traversal step call.
    pub fn add_step(&mut self, operator: impl Into<String>, args: Vec<GremlinValue>) {
        self.step_instructions.push(Instruction::new(operator, args));
    }

    /// All instructions in evaluation order: sources first, then steps.
    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.source_instructions
            .iter()
            .chain(self.step_instructions.iter())
    }

    pub fn len(&self) -> usize {
        self.source_instructions.len() + self.step_instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source_instructions.is_empty() && self.step_instructions.is_empty()
    }
}
