//! First-order logic data structures
//!
//! This module provides the types the selection core operates on: an
//! interned signature, terms, literals, clauses, full first-order formulas,
//! and symbol occurrence collection.

pub mod clause;
pub mod formula;
pub mod interner;
pub mod literal;
pub mod occurrence;
pub mod term;

// Re-export commonly used types
pub use clause::{Clause, ClauseDisplay, ClauseSet, Role};
pub use formula::{Fof, FofDisplay, Formula, FormulaSet, Quantifier};
pub use interner::{SymbolId, Symbols, VariableId};
pub use literal::{Atom, AtomDisplay, Literal, LiteralDisplay};
pub use occurrence::SymbolScratch;
pub use term::{Term, TermDisplay, Variable};
