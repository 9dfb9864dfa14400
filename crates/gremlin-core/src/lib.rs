//! Core traversal building blocks shared by the translation and driver
//! crates: the bytecode instruction lists, the closed argument value model,
//! filter predicates, and the engine's token enumerations.

pub mod bytecode;
pub mod predicate;
pub mod tokens;
pub mod value;

pub use bytecode::{Bytecode, Instruction};
pub use predicate::P;
pub use tokens::{Barrier, Cardinality, Column, Direction, Operator, Order, Pick, Pop, Scope, T};
pub use value::{GremlinValue, Token};
