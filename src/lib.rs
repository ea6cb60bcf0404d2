//! ProofSieve: relevance-based axiom selection for saturation provers
//!
//! Given a large pool of background axioms plus a small set of conjectures
//! or hypotheses, this library selects a bounded subset of axioms that are
//! plausibly relevant to the goal, so that the main proof search only has
//! to consider that subset. The selection is a generalized SinE closure: a
//! breadth-first reachability search over a symbol-indexed D-relation,
//! bounded by recursion depth and result size.

pub mod config;
pub mod fol;
pub mod relevance;

// Re-export commonly used types from fol
pub use fol::{
    Atom, Clause, ClauseSet, Fof, Formula, FormulaSet, Literal, Quantifier, Role, SymbolId,
    SymbolScratch, Symbols, Term, Variable, VariableId,
};

// Re-export the selection core
pub use relevance::{
    select_axioms, select_axioms_with_marks, select_by_threshold, select_defining_axioms,
    AxiomEntry, GenDistrib, GeneralityOracle, PtrMarks, RelevanceMarks, RelevanceQueue, Selection,
    SymbolLink, SymbolLinkTable,
};

pub use config::{AxiomFilter, GeneralityMeasure};
