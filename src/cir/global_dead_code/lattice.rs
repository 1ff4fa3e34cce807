// src/cir/global_dead_code/lattice.rs
//! The liveness lattice: `Dead (⊥) ≤ Live(S) ≤ Top (⊤)`.
//!
//! Shaped after `ir::optimizer::constant_folding::lattice::LatticeValue`'s
//! three-level lattice and its `meet`; here the middle tier carries a field
//! set instead of a single constant, and the combinator is `join` (the
//! analysis runs as a least-fixpoint over a monotone join, not a meet).

use std::fmt;

/// A compact sorted set of observed heap-block field indices.
///
/// Per the design notes, joins are set union and equality is value
/// equality; a sorted `Vec` keeps both cheap and gives deterministic
/// iteration order for reproducible debug dumps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSet(Vec<u32>);

impl FieldSet {
    #[must_use]
    pub fn singleton(field: u32) -> Self {
        Self(vec![field])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, field: u32) -> bool {
        self.0.binary_search(&field).is_ok()
    }

    pub fn insert(&mut self, field: u32) {
        if let Err(pos) = self.0.binary_search(&field) {
            self.0.insert(pos, field);
        }
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.0.clone();
        for &f in &other.0 {
            if let Err(pos) = merged.binary_search(&f) {
                merged.insert(pos, f);
            }
        }
        Self(merged)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        write!(f, "}}")
    }
}

/// The per-variable liveness lattice value.
///
/// Order: `Dead ≤ Live(S) ≤ Top`; `Live(S1) ≤ Live(S2) ⟺ S1 ⊆ S2`.
/// `Live(∅)` is not a valid state — a variable with no observed field is
/// `Dead`, never `Live` with an empty set (see [`Live::live_field`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Live {
    /// No observed use (⊥).
    Dead,
    /// Variable is a heap block; the given fields were observed.
    Live(FieldSet),
    /// Variable is live and either not a block or has a non-field observer
    /// (⊤).
    Top,
}

impl Live {
    /// `Live({field})`, the constructor used by every site that observes a
    /// single field (never construct `Live` with an empty set directly).
    #[must_use]
    pub fn live_field(field: u32) -> Self {
        Self::Live(FieldSet::singleton(field))
    }

    #[must_use]
    pub const fn is_dead(&self) -> bool {
        matches!(self, Self::Dead)
    }

    #[must_use]
    pub const fn is_top(&self) -> bool {
        matches!(self, Self::Top)
    }

    /// `a ⊔ b`.
    #[must_use]
    pub fn join(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Dead, x) | (x, Self::Dead) => x.clone(),
            (Self::Top, _) | (_, Self::Top) => Self::Top,
            (Self::Live(a), Self::Live(b)) => Self::Live(a.union(b)),
        }
    }
}

impl fmt::Display for Live {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dead => write!(f, "Dead"),
            Self::Live(fields) => write!(f, "Live{fields}"),
            Self::Top => write!(f, "Top"),
        }
    }
}
