//! Script translation for recorded traversals.
//!
//! Translators convert the language-agnostic [`Bytecode`] form of a
//! traversal into executable script text for a target language. The one
//! target implemented here is Gremlin-Groovy via [`GroovyTranslator`].

mod error;
mod groovy;

pub use error::TranslateError;
pub use groovy::GroovyTranslator;

use gremlin_core::Bytecode;

/// Trait for translating bytecode into a script language.
pub trait ScriptTranslator: Send + Sync {
    /// Name of the script language this translator emits.
    fn target_language(&self) -> &str;

    /// Render the bytecode as a complete script rooted at the traversal
    /// source.
    fn translate(&self, bytecode: &Bytecode) -> Result<String, TranslateError>;
}
