//! Relevance marking as a borrowed capability
//!
//! The "already selected this run" bit conceptually lives on the clause and
//! formula objects, which this crate does not own. The core therefore goes
//! through the [`RelevanceMarks`] trait: embedders whose objects carry
//! their own property bits implement it over those, tests can use fakes,
//! and [`PtrMarks`] is the default backed by object identity.
//!
//! Whatever the implementation, the orchestrator guarantees every mark it
//! set is cleared again before returning.

use crate::fol::{Clause, Formula};
use std::collections::HashSet;

/// Mutable "selected this run" flags on externally owned objects
pub trait RelevanceMarks {
    fn clause_marked(&self, clause: &Clause) -> bool;
    fn mark_clause(&mut self, clause: &Clause);
    fn unmark_clause(&mut self, clause: &Clause);

    fn formula_marked(&self, formula: &Formula) -> bool;
    fn mark_formula(&mut self, formula: &Formula);
    fn unmark_formula(&mut self, formula: &Formula);
}

/// Default marking backed by object addresses
///
/// Objects are pooled behind `Arc`, so the address of the pointee is a
/// stable identity for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct PtrMarks {
    clauses: HashSet<usize>,
    formulas: HashSet<usize>,
}

impl PtrMarks {
    /// Create an empty mark store
    pub fn new() -> Self {
        PtrMarks::default()
    }

    /// Total number of currently set marks
    pub fn len(&self) -> usize {
        self.clauses.len() + self.formulas.len()
    }

    /// Check that no mark is set
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.formulas.is_empty()
    }
}

impl RelevanceMarks for PtrMarks {
    fn clause_marked(&self, clause: &Clause) -> bool {
        self.clauses.contains(&(clause as *const Clause as usize))
    }

    fn mark_clause(&mut self, clause: &Clause) {
        self.clauses.insert(clause as *const Clause as usize);
    }

    fn unmark_clause(&mut self, clause: &Clause) {
        self.clauses.remove(&(clause as *const Clause as usize));
    }

    fn formula_marked(&self, formula: &Formula) -> bool {
        self.formulas.contains(&(formula as *const Formula as usize))
    }

    fn mark_formula(&mut self, formula: &Formula) {
        self.formulas.insert(formula as *const Formula as usize);
    }

    fn unmark_formula(&mut self, formula: &Formula) {
        self.formulas.remove(&(formula as *const Formula as usize));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_mark_unmark_by_identity() {
        let c1 = Arc::new(Clause::new(vec![]));
        let c2 = Arc::new(Clause::new(vec![]));

        let mut marks = PtrMarks::new();
        assert!(!marks.clause_marked(&c1));

        marks.mark_clause(&c1);
        assert!(marks.clause_marked(&c1));
        // Structurally equal clause, different object
        assert!(!marks.clause_marked(&c2));
        assert_eq!(marks.len(), 1);

        marks.unmark_clause(&c1);
        assert!(!marks.clause_marked(&c1));
        assert!(marks.is_empty());
    }
}
