//! Symbol generality distributions
//!
//! A [`GenDistrib`] records, for every signature symbol, how often it
//! occurs across the input pool: the total number of term occurrences and
//! the number of axioms (clauses or formulas) it occurs in. The generality
//! oracle reads these counts to decide which symbols are rare enough to
//! carry relevance links.

use crate::config::GeneralityMeasure;
use crate::fol::{ClauseSet, FormulaSet, SymbolId, SymbolScratch, Symbols};

/// Per-symbol occurrence statistics over an axiom pool
#[derive(Debug, Clone, Default)]
pub struct GenDistrib {
    /// Total term occurrences, indexed by symbol id
    occurrences: Vec<u64>,
    /// Number of distinct axioms the symbol occurs in, indexed by symbol id
    axiom_counts: Vec<u64>,
}

impl GenDistrib {
    /// Create an empty distribution
    pub fn new() -> Self {
        GenDistrib::default()
    }

    /// Create a distribution covering every object in the given sets
    pub fn from_sets(
        symbols: &Symbols,
        clause_sets: &[ClauseSet],
        formula_sets: &[FormulaSet],
    ) -> Self {
        let mut distrib = GenDistrib::new();
        let mut scratch = SymbolScratch::with_capacity(symbols.symbol_count());
        distrib.add_clause_sets(clause_sets, &mut scratch);
        distrib.add_formula_sets(formula_sets, &mut scratch);
        distrib
    }

    /// Count all clauses in all sets
    pub fn add_clause_sets(&mut self, sets: &[ClauseSet], scratch: &mut SymbolScratch) {
        for set in sets {
            for clause in set {
                clause.collect_symbols(scratch);
                self.absorb(scratch);
            }
        }
    }

    /// Count all formulas in all sets
    pub fn add_formula_sets(&mut self, sets: &[FormulaSet], scratch: &mut SymbolScratch) {
        for set in sets {
            for formula in set {
                formula.content.collect_symbols(scratch);
                self.absorb(scratch);
            }
        }
    }

    /// Fold one object's occurrence counts into the distribution and reset
    /// the scratch for the next object.
    fn absorb(&mut self, scratch: &mut SymbolScratch) {
        for &symbol in scratch.symbols() {
            let idx = symbol.as_index();
            if idx >= self.occurrences.len() {
                self.occurrences.resize(idx + 1, 0);
                self.axiom_counts.resize(idx + 1, 0);
            }
            self.occurrences[idx] += scratch.count(symbol);
            self.axiom_counts[idx] += 1;
        }
        scratch.clear();
    }

    /// Generality of a symbol under the given measure. Symbols never seen
    /// by the distribution have generality 0.
    pub fn generality(&self, measure: GeneralityMeasure, symbol: SymbolId) -> u64 {
        let table = match measure {
            GeneralityMeasure::CountTerms => &self.occurrences,
            GeneralityMeasure::CountFormulas => &self.axiom_counts,
        };
        table.get(symbol.as_index()).copied().unwrap_or(0)
    }
}
