//! The generality oracle: which symbols link an object into the D-relation
//!
//! An object should be reachable through its *discriminating* symbols, not
//! through symbols that occur everywhere. The linking rule: a symbol links
//! an object iff its generality is at most `benevolence` times the least
//! generality among the object's non-internal symbols, or at most the
//! absolute `generosity` cap.

use crate::config::GeneralityMeasure;
use crate::fol::{Clause, Formula, SymbolId, SymbolScratch, Symbols};
use indexmap::IndexSet;

use super::distrib::GenDistrib;

/// Decides the symbols through which an object is linked into the
/// [`SymbolLinkTable`](super::SymbolLinkTable).
///
/// The output sets are deduplicated and insertion-ordered, so D-relation
/// construction is deterministic.
pub trait GeneralityOracle {
    /// Symbols through which a clause should be linked
    fn clause_links(
        &self,
        symbols: &Symbols,
        measure: GeneralityMeasure,
        benevolence: f64,
        generosity: u64,
        clause: &Clause,
    ) -> IndexSet<SymbolId>;

    /// Symbols through which a formula should be linked
    fn formula_links(
        &self,
        symbols: &Symbols,
        measure: GeneralityMeasure,
        benevolence: f64,
        generosity: u64,
        formula: &Formula,
    ) -> IndexSet<SymbolId>;
}

impl GenDistrib {
    fn links_from_scratch(
        &self,
        symbols: &Symbols,
        measure: GeneralityMeasure,
        benevolence: f64,
        generosity: u64,
        scratch: &SymbolScratch,
    ) -> IndexSet<SymbolId> {
        let mut least = u64::MAX;
        for &symbol in scratch.symbols() {
            if symbols.is_internal(symbol) {
                continue;
            }
            least = least.min(self.generality(measure, symbol));
        }

        let mut links = IndexSet::new();
        if least == u64::MAX {
            // Only internal symbols occur; nothing to link through.
            return links;
        }
        let benevolence_cap = benevolence * least as f64;
        for &symbol in scratch.symbols() {
            if symbols.is_internal(symbol) {
                continue;
            }
            let gen = self.generality(measure, symbol);
            if gen as f64 <= benevolence_cap || gen <= generosity {
                links.insert(symbol);
            }
        }
        links
    }
}

impl GeneralityOracle for GenDistrib {
    fn clause_links(
        &self,
        symbols: &Symbols,
        measure: GeneralityMeasure,
        benevolence: f64,
        generosity: u64,
        clause: &Clause,
    ) -> IndexSet<SymbolId> {
        let mut scratch = SymbolScratch::with_capacity(symbols.symbol_count());
        clause.collect_symbols(&mut scratch);
        self.links_from_scratch(symbols, measure, benevolence, generosity, &scratch)
    }

    fn formula_links(
        &self,
        symbols: &Symbols,
        measure: GeneralityMeasure,
        benevolence: f64,
        generosity: u64,
        formula: &Formula,
    ) -> IndexSet<SymbolId> {
        let mut scratch = SymbolScratch::with_capacity(symbols.symbol_count());
        formula.content.collect_symbols(&mut scratch);
        self.links_from_scratch(symbols, measure, benevolence, generosity, &scratch)
    }
}
