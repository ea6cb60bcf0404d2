//! The relevance closure engine
//!
//! Breadth-first, level-bounded expansion over the D-relation. The queue is
//! pre-seeded with the goal objects (generation 0); accepting an object
//! activates the symbol links of its occurring symbols, which enqueues
//! their defining sets for the next generation. Level markers interleaved
//! in the FIFO count generations, so one queue implements the depth bound.
//!
//! Symbol graphs can be cyclic (two axioms each containing the other's
//! defining symbols); the one-shot `activated` flag on each link keeps the
//! expansion linear in the number of distinct symbols, and the relevance
//! marks keep every object selected at most once.

use crate::fol::{SymbolScratch, Symbols};

use super::drel::SymbolLinkTable;
use super::marks::RelevanceMarks;
use super::queue::{AxiomEntry, RelevanceQueue};
use super::select::Selection;

/// Run the bounded relevance closure over a pre-seeded worklist.
///
/// Appends accepted objects to `selection` and returns how many were
/// accepted. Stops early, setting `selection.truncated`, once the number of
/// accepted objects exceeds `max_set_size` or the generation counter
/// exceeds `max_recursion_depth`; bound exhaustion truncates the result
/// and is not an error.
///
/// Activation bits in `table` and marks in `marks` are left set; the
/// orchestrator owns the table and clears the marks.
pub fn select_defining_axioms<M: RelevanceMarks>(
    table: &mut SymbolLinkTable,
    symbols: &Symbols,
    max_recursion_depth: usize,
    max_set_size: usize,
    queue: &mut RelevanceQueue,
    marks: &mut M,
    selection: &mut Selection,
) -> usize {
    let mut scratch = SymbolScratch::with_capacity(symbols.symbol_count());
    let mut recursion_level = 0usize;
    let mut selected = 0usize;

    // Close generation 0 behind the seed entries.
    queue.push_level_marker();

    while !queue.is_empty() {
        if selected > max_set_size || recursion_level > max_recursion_depth {
            selection.truncated = true;
            break;
        }

        let entry = match queue.pop() {
            Some(entry) => entry,
            None => break,
        };

        match entry {
            AxiomEntry::LevelMarker => {
                recursion_level += 1;
                // Re-arm the marker so the next generation closes in turn.
                if !queue.is_empty() {
                    queue.push_level_marker();
                }
                continue;
            }
            AxiomEntry::Clause(clause) => {
                if marks.clause_marked(&clause) {
                    continue;
                }
                marks.mark_clause(&clause);
                clause.collect_symbols(&mut scratch);
                selection.clauses.push(clause);
                selected += 1;
            }
            AxiomEntry::Formula(formula) => {
                if marks.formula_marked(&formula) {
                    continue;
                }
                marks.mark_formula(&formula);
                formula.content.collect_symbols(&mut scratch);
                selection.formulas.push(formula);
                selected += 1;
            }
        }

        for &symbol in scratch.symbols() {
            if symbols.is_internal(symbol) {
                continue;
            }
            if let Some(link) = table.get_mut(symbol) {
                if !link.activated {
                    link.activated = true;
                    for clause in &link.defining_clauses {
                        queue.push_clause(clause.clone());
                    }
                    for formula in &link.defining_formulas {
                        queue.push_formula(formula.clone());
                    }
                }
            }
        }
        scratch.clear();
    }

    selected
}
