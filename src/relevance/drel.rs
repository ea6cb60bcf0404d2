//! The D-relation: symbol-indexed defining sets
//!
//! For every symbol chosen by the generality oracle, the
//! [`SymbolLinkTable`] records the clauses and formulas "defined" through
//! that symbol. The relevance closure walks this table: accepting an object
//! activates the links of its symbols, which enqueues their defining sets.

use crate::config::AxiomFilter;
use crate::fol::{Clause, ClauseSet, Formula, FormulaSet, SymbolId, Symbols};
use std::fmt;
use std::sync::Arc;

use super::generality::GeneralityOracle;

/// Defining set of one signature symbol
#[derive(Debug, Clone)]
pub struct SymbolLink {
    pub symbol: SymbolId,
    /// One-shot guard: set once this symbol's defining set has been pushed
    /// into the worklist; never pushed again within the same run
    pub activated: bool,
    pub defining_clauses: Vec<Arc<Clause>>,
    pub defining_formulas: Vec<Arc<Formula>>,
}

impl SymbolLink {
    fn new(symbol: SymbolId) -> Self {
        SymbolLink {
            symbol,
            activated: false,
            defining_clauses: Vec::new(),
            defining_formulas: Vec::new(),
        }
    }
}

/// Sparse growable map from symbol id to [`SymbolLink`]
///
/// One instance per selection run; never shared across runs.
#[derive(Debug, Clone, Default)]
pub struct SymbolLinkTable {
    entries: Vec<Option<SymbolLink>>,
}

impl SymbolLinkTable {
    /// Create an empty table
    pub fn new() -> Self {
        SymbolLinkTable::default()
    }

    /// Get the link for a symbol, creating it if absent
    pub fn entry_mut(&mut self, symbol: SymbolId) -> &mut SymbolLink {
        let idx = symbol.as_index();
        if idx >= self.entries.len() {
            self.entries.resize_with(idx + 1, || None);
        }
        self.entries[idx].get_or_insert_with(|| SymbolLink::new(symbol))
    }

    /// Get the link for a symbol, if it exists
    pub fn get(&self, symbol: SymbolId) -> Option<&SymbolLink> {
        self.entries.get(symbol.as_index())?.as_ref()
    }

    /// Get the link for a symbol mutably, if it exists
    pub fn get_mut(&mut self, symbol: SymbolId) -> Option<&mut SymbolLink> {
        self.entries.get_mut(symbol.as_index())?.as_mut()
    }

    /// Iterate over the populated links in symbol-id order
    pub fn iter(&self) -> impl Iterator<Item = &SymbolLink> {
        self.entries.iter().filter_map(Option::as_ref)
    }

    /// Number of populated links
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if no symbol has been linked
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Link one clause through the symbols chosen by the oracle
    pub fn add_clause(
        &mut self,
        oracle: &impl GeneralityOracle,
        symbols: &Symbols,
        filter: &AxiomFilter,
        clause: &Arc<Clause>,
    ) {
        let links = oracle.clause_links(
            symbols,
            filter.generality_measure,
            filter.benevolence,
            filter.generosity,
            clause,
        );
        for symbol in links {
            self.entry_mut(symbol).defining_clauses.push(clause.clone());
        }
    }

    /// Link one formula through the symbols chosen by the oracle
    pub fn add_formula(
        &mut self,
        oracle: &impl GeneralityOracle,
        symbols: &Symbols,
        filter: &AxiomFilter,
        formula: &Arc<Formula>,
    ) {
        let links = oracle.formula_links(
            symbols,
            filter.generality_measure,
            filter.benevolence,
            filter.generosity,
            formula,
        );
        for symbol in links {
            self.entry_mut(symbol)
                .defining_formulas
                .push(formula.clone());
        }
    }

    /// Link every clause in a set, in insertion order
    pub fn add_clause_set(
        &mut self,
        oracle: &impl GeneralityOracle,
        symbols: &Symbols,
        filter: &AxiomFilter,
        set: &ClauseSet,
    ) {
        for clause in set {
            self.add_clause(oracle, symbols, filter, clause);
        }
    }

    /// Link every formula in a set, in insertion order
    pub fn add_formula_set(
        &mut self,
        oracle: &impl GeneralityOracle,
        symbols: &Symbols,
        filter: &AxiomFilter,
        set: &FormulaSet,
    ) {
        for formula in set {
            self.add_formula(oracle, symbols, filter, formula);
        }
    }

    /// Link every clause in every set, in input order
    pub fn add_clause_sets(
        &mut self,
        oracle: &impl GeneralityOracle,
        symbols: &Symbols,
        filter: &AxiomFilter,
        sets: &[ClauseSet],
    ) {
        for set in sets {
            self.add_clause_set(oracle, symbols, filter, set);
        }
    }

    /// Link every formula in every set, in input order
    pub fn add_formula_sets(
        &mut self,
        oracle: &impl GeneralityOracle,
        symbols: &Symbols,
        filter: &AxiomFilter,
        sets: &[FormulaSet],
    ) {
        for set in sets {
            self.add_formula_set(oracle, symbols, filter, set);
        }
    }

    /// Format the table for diagnostics: one line per linked symbol with
    /// its name and defining-set sizes
    pub fn display<'a>(&'a self, symbols: &'a Symbols) -> TableDisplay<'a> {
        TableDisplay {
            table: self,
            symbols,
        }
    }
}

/// Display wrapper for the symbol link table
pub struct TableDisplay<'a> {
    table: &'a SymbolLinkTable,
    symbols: &'a Symbols,
}

impl<'a> fmt::Display for TableDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for link in self.table.iter() {
            writeln!(
                f,
                "# {:6} {:<15}: {:6} clauses, {:6} formulas",
                link.symbol.as_u32(),
                self.symbols.resolve(link.symbol),
                link.defining_clauses.len(),
                link.defining_formulas.len()
            )?;
        }
        Ok(())
    }
}
