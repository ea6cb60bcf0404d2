//! Axiom selection configuration types.

use serde::{Deserialize, Serialize};

/// Generality measure for signature symbols
///
/// Scores how "common" a symbol is across the axiom pool; rarer symbols
/// make stronger relevance links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneralityMeasure {
    /// Total number of occurrences of the symbol in all terms
    CountTerms,
    /// Number of axioms (clauses or formulas) the symbol occurs in
    CountFormulas,
}

/// Configuration for one axiom selection run
///
/// `benevolence` and `generosity` tune how liberally objects are linked
/// into the D-relation (higher = more links = broader selection);
/// `max_recursion_depth` and `max_set_size` bound the relevance closure;
/// `threshold` is the pool size below which [`select_by_threshold`]
/// passes everything through unfiltered.
///
/// [`select_by_threshold`]: crate::relevance::select_by_threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxiomFilter {
    pub generality_measure: GeneralityMeasure,
    /// A symbol links an object if its generality is at most `benevolence`
    /// times the least generality among the object's symbols
    pub benevolence: f64,
    /// Absolute generality cap: symbols at most this general always link
    pub generosity: u64,
    /// Maximal number of breadth-first generations in the closure
    pub max_recursion_depth: usize,
    /// Hard cap on the number of selected axioms
    pub max_set_size: usize,
    /// Cap on the selected fraction of the total axiom pool, in [0, 1]
    pub max_set_fraction: f64,
    /// Pool sizes up to this pass the threshold fallback unfiltered
    pub threshold: usize,
    /// Seed the closure from hypotheses as well as conjectures
    pub use_hypotheses: bool,
}

impl Default for AxiomFilter {
    fn default() -> Self {
        AxiomFilter {
            generality_measure: GeneralityMeasure::CountFormulas,
            benevolence: 1.0,
            generosity: u64::MAX,
            max_recursion_depth: usize::MAX,
            max_set_size: usize::MAX,
            max_set_fraction: 1.0,
            threshold: 0,
            use_hypotheses: true,
        }
    }
}
