//! The relevance worklist
//!
//! One FIFO carries both kinds of candidate objects plus level markers
//! demarcating breadth-first generations, so depth-bounded expansion needs
//! no per-generation container.

use crate::fol::{Clause, Formula};
use std::collections::VecDeque;
use std::sync::Arc;

/// One worklist entry
#[derive(Debug, Clone)]
pub enum AxiomEntry {
    Clause(Arc<Clause>),
    Formula(Arc<Formula>),
    /// Closes one breadth-first generation
    LevelMarker,
}

/// FIFO worklist for the relevance closure
///
/// Exclusively owned by one selection run.
#[derive(Debug, Clone, Default)]
pub struct RelevanceQueue {
    entries: VecDeque<AxiomEntry>,
}

impl RelevanceQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        RelevanceQueue::default()
    }

    /// Enqueue a clause candidate
    pub fn push_clause(&mut self, clause: Arc<Clause>) {
        self.entries.push_back(AxiomEntry::Clause(clause));
    }

    /// Enqueue a formula candidate
    pub fn push_formula(&mut self, formula: Arc<Formula>) {
        self.entries.push_back(AxiomEntry::Formula(formula));
    }

    /// Enqueue a generation boundary
    pub fn push_level_marker(&mut self) {
        self.entries.push_back(AxiomEntry::LevelMarker);
    }

    /// Dequeue the oldest entry
    pub fn pop(&mut self) -> Option<AxiomEntry> {
        self.entries.pop_front()
    }

    /// Number of queued entries (markers included)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
