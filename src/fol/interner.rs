//! Symbol interning for the logical signature
//!
//! All function, constant and predicate symbols share one interned id
//! space, because the D-relation is indexed by a single symbol id. Benefits
//! of interning:
//! - O(1) comparison and hashing (u32 vs String)
//! - Copy semantics (no heap allocation on clone)
//!
//! Id 0 is reserved and never assigned. The signature starts with a block
//! of logic-internal symbols (truth constants, equality); symbols at or
//! below [`Symbols::internal_bound`] must never propagate relevance.
//! Variables are not signature symbols and live in their own arena.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// ID for an interned signature symbol (function, constant or predicate)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub(crate) u32);

/// ID for an interned variable name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(pub(crate) u32);

impl SymbolId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Index into symbol-id-keyed tables
    pub fn as_index(self) -> usize {
        self.0 as usize
    }
}

impl VariableId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Internal string arena with get-or-create interning
#[derive(Debug, Clone, Default)]
struct StringArena {
    /// Interned strings, indexed by ID
    strings: Vec<String>,
    /// Lookup table from string to ID
    lookup: HashMap<String, u32>,
}

impl StringArena {
    fn intern(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = self.strings.len() as u32;
        self.strings.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        id
    }

    fn resolve(&self, id: u32) -> &str {
        &self.strings[id as usize]
    }

    fn get(&self, name: &str) -> Option<u32> {
        self.lookup.get(name).copied()
    }

    fn len(&self) -> usize {
        self.strings.len()
    }
}

/// The interned signature of a problem
///
/// Owns the symbol and variable arenas. Passed through the selection run
/// rather than held in global state.
#[derive(Debug, Clone)]
pub struct Symbols {
    symbols: StringArena,
    arities: Vec<u8>,
    internal_bound: u32,
    equality: SymbolId,
    variables: StringArena,
}

impl Symbols {
    /// Create a signature pre-loaded with the internal symbol block
    pub fn new() -> Self {
        let mut symbols = StringArena::default();
        let mut arities = Vec::new();
        // slot 0 is reserved
        symbols.intern("");
        arities.push(0);
        symbols.intern("$true");
        arities.push(0);
        symbols.intern("$false");
        arities.push(0);
        let eq = symbols.intern("=");
        arities.push(2);
        Symbols {
            internal_bound: eq,
            equality: SymbolId(eq),
            symbols,
            arities,
            variables: StringArena::default(),
        }
    }

    /// Intern a function/constant/predicate symbol, returning its ID
    /// (get-or-create). Constants are nullary functions.
    pub fn intern(&mut self, name: &str, arity: u8) -> SymbolId {
        let id = self.symbols.intern(name);
        if id as usize == self.arities.len() {
            self.arities.push(arity);
        }
        SymbolId(id)
    }

    /// Resolve a symbol ID to its name
    pub fn resolve(&self, id: SymbolId) -> &str {
        self.symbols.resolve(id.0)
    }

    /// Get the ID for an already-interned symbol (returns None if not found)
    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.symbols.get(name).map(SymbolId)
    }

    /// Arity recorded for a symbol
    pub fn arity(&self, id: SymbolId) -> u8 {
        self.arities[id.as_index()]
    }

    /// Number of symbol slots, including the reserved slot and internals.
    /// Suitable for sizing symbol-id-indexed scratch tables.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Largest logic-internal symbol id. Symbols at or below this bound
    /// (truth constants, equality) never propagate relevance.
    pub fn internal_bound(&self) -> SymbolId {
        SymbolId(self.internal_bound)
    }

    /// Check whether a symbol is logic-internal
    pub fn is_internal(&self, id: SymbolId) -> bool {
        id.0 <= self.internal_bound
    }

    /// The equality predicate symbol
    pub fn equality(&self) -> SymbolId {
        self.equality
    }

    // === Variables ===

    /// Intern a variable name, returning its ID (get-or-create)
    pub fn intern_variable(&mut self, name: &str) -> VariableId {
        VariableId(self.variables.intern(name))
    }

    /// Resolve a variable ID to its name
    pub fn resolve_variable(&self, id: VariableId) -> &str {
        self.variables.resolve(id.0)
    }

    /// Number of interned variables
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols::new()
    }
}

// === Display implementations for debugging ===

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}

// === Serde implementations ===
// IDs serialize as raw u32; name resolution requires the owning Symbols.

impl Serialize for SymbolId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SymbolId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(SymbolId)
    }
}

impl Serialize for VariableId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VariableId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(VariableId)
    }
}
