//! Selection orchestration
//!
//! [`select_axioms`] wires the pieces together: build the D-relation over
//! all input collections, seed the worklist with the goal objects, run the
//! bounded closure, and clear every relevance mark before returning. Side
//! effects are confined to the returned [`Selection`]; the input
//! collections' membership and order are never changed.
//!
//! [`select_by_threshold`] is the trivial alternative for pools small
//! enough that pruning is pointless.

use crate::config::AxiomFilter;
use crate::fol::{Clause, ClauseSet, Formula, FormulaSet, Symbols};
use std::sync::Arc;

use super::closure::select_defining_axioms;
use super::distrib::GenDistrib;
use super::drel::SymbolLinkTable;
use super::marks::{PtrMarks, RelevanceMarks};
use super::queue::RelevanceQueue;

/// Result of one selection run
///
/// Holds shared handles to the selected objects; ownership stays with the
/// input collections. `truncated` is set when the closure stopped on a
/// depth or size bound with candidates still queued.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub clauses: Vec<Arc<Clause>>,
    pub formulas: Vec<Arc<Formula>>,
    pub truncated: bool,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Selection::default()
    }

    /// Combined number of selected clauses and formulas
    pub fn len(&self) -> usize {
        self.clauses.len() + self.formulas.len()
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.formulas.is_empty()
    }

    /// Relocate every selected clause found in `source` into `dest`
    pub fn move_clauses_into(&self, source: &mut ClauseSet, dest: &mut ClauseSet) {
        for clause in &self.clauses {
            if let Some(moved) = source.remove(clause) {
                dest.push(moved);
            }
        }
    }

    /// Relocate every selected formula found in `source` into `dest`
    pub fn move_formulas_into(&self, source: &mut FormulaSet, dest: &mut FormulaSet) {
        for formula in &self.formulas {
            if let Some(moved) = source.remove(formula) {
                dest.push(moved);
            }
        }
    }
}

/// Seed the worklist with the goal clauses of one set. Returns how many
/// were found.
fn find_clause_hypotheses(set: &ClauseSet, queue: &mut RelevanceQueue, inc_hypos: bool) -> usize {
    let mut found = 0;
    for clause in set {
        if clause.role.is_conjecture() || (inc_hypos && clause.role.is_hypothesis()) {
            queue.push_clause(clause.clone());
            found += 1;
        }
    }
    found
}

/// Seed the worklist with the goal formulas of one set. Returns how many
/// were found.
fn find_formula_hypotheses(set: &FormulaSet, queue: &mut RelevanceQueue, inc_hypos: bool) -> usize {
    let mut found = 0;
    for formula in set {
        if formula.role.is_conjecture() || (inc_hypos && formula.role.is_hypothesis()) {
            queue.push_formula(formula.clone());
            found += 1;
        }
    }
    found
}

/// Select the axioms plausibly relevant to the goal objects.
///
/// `clause_sets` and `formula_sets` are index-aligned stacks of input
/// collections; collections from `hyp_start` onward are scanned for
/// conjectures (and, with `filter.use_hypotheses`, hypotheses) to seed the
/// closure. If no goal object is found the selection is empty: with no
/// goal, no axiom can be ruled irrelevant, and callers skip pruning.
///
/// The result size is capped by `filter.max_set_size` and by
/// `filter.max_set_fraction` of the total pool cardinality.
///
/// # Panics
///
/// Panics if the two set stacks have different lengths.
pub fn select_axioms(
    distrib: &GenDistrib,
    symbols: &Symbols,
    clause_sets: &[ClauseSet],
    formula_sets: &[FormulaSet],
    hyp_start: usize,
    filter: &AxiomFilter,
) -> Selection {
    let mut marks = PtrMarks::new();
    select_axioms_with_marks(
        distrib,
        symbols,
        clause_sets,
        formula_sets,
        hyp_start,
        filter,
        &mut marks,
    )
}

/// [`select_axioms`] with caller-supplied relevance marks.
///
/// Every mark set during the run is cleared again before returning,
/// whether the closure ran to completion or was truncated.
#[allow(clippy::too_many_arguments)]
pub fn select_axioms_with_marks<M: RelevanceMarks>(
    distrib: &GenDistrib,
    symbols: &Symbols,
    clause_sets: &[ClauseSet],
    formula_sets: &[FormulaSet],
    hyp_start: usize,
    filter: &AxiomFilter,
    marks: &mut M,
) -> Selection {
    assert_eq!(
        clause_sets.len(),
        formula_sets.len(),
        "clause and formula set stacks must be index-aligned"
    );

    let mut table = SymbolLinkTable::new();
    table.add_clause_sets(distrib, symbols, filter, clause_sets);
    table.add_formula_sets(distrib, symbols, filter, formula_sets);

    let mut queue = RelevanceQueue::new();
    let mut hypos = 0;
    for i in hyp_start..clause_sets.len() {
        hypos += find_clause_hypotheses(&clause_sets[i], &mut queue, filter.use_hypotheses);
        hypos += find_formula_hypotheses(&formula_sets[i], &mut queue, filter.use_hypotheses);
    }

    let mut selection = Selection::new();
    if hypos > 0 {
        let cardinality = pool_cardinality(clause_sets, formula_sets);
        let fraction_cap = (filter.max_set_fraction * cardinality as f64) as usize;
        let max_result_size = filter.max_set_size.min(fraction_cap);
        select_defining_axioms(
            &mut table,
            symbols,
            filter.max_recursion_depth,
            max_result_size,
            &mut queue,
            marks,
            &mut selection,
        );
    }
    // No goals: the empty set already contains every relevant axiom.

    // Mandatory cleanup: the marks are borrowed from externally owned
    // objects and must not leak into later runs.
    for clause in &selection.clauses {
        marks.unmark_clause(clause);
    }
    for formula in &selection.formulas {
        marks.unmark_formula(formula);
    }

    selection
}

/// Pass the whole pool through if it is small enough to skip pruning.
///
/// Selects every object of every input collection, in collection order,
/// when the combined cardinality is at most `filter.threshold`; otherwise
/// selects nothing.
pub fn select_by_threshold(
    clause_sets: &[ClauseSet],
    formula_sets: &[FormulaSet],
    filter: &AxiomFilter,
) -> Selection {
    let mut selection = Selection::new();
    if pool_cardinality(clause_sets, formula_sets) <= filter.threshold {
        for set in clause_sets {
            for clause in set {
                selection.clauses.push(clause.clone());
            }
        }
        for set in formula_sets {
            for formula in set {
                selection.formulas.push(formula.clone());
            }
        }
    }
    selection
}

fn pool_cardinality(clause_sets: &[ClauseSet], formula_sets: &[FormulaSet]) -> usize {
    let clauses: usize = clause_sets.iter().map(ClauseSet::len).sum();
    let formulas: usize = formula_sets.iter().map(FormulaSet::len).sum();
    clauses + formulas
}
