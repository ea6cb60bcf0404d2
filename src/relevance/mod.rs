//! Relevance-based axiom selection
//!
//! Implements generalized SinE selection: input objects are linked into a
//! symbol-indexed D-relation through their least general symbols, then a
//! depth- and size-bounded breadth-first closure starting from the goal
//! objects collects the plausibly relevant part of the axiom pool.
//!
//! Entry points:
//! - [`select_axioms`] — full selection run
//! - [`select_by_threshold`] — pass-through fallback for small pools

pub mod closure;
pub mod distrib;
pub mod drel;
pub mod generality;
pub mod marks;
pub mod queue;
pub mod select;

pub use closure::select_defining_axioms;
pub use distrib::GenDistrib;
pub use drel::{SymbolLink, SymbolLinkTable, TableDisplay};
pub use generality::GeneralityOracle;
pub use marks::{PtrMarks, RelevanceMarks};
pub use queue::{AxiomEntry, RelevanceQueue};
pub use select::{
    select_axioms, select_axioms_with_marks, select_by_threshold, Selection,
};
