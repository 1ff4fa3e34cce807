// src/cir/global_dead_code/global_info.rs
//! The global-flow collaborator's read-only interface.
//!
//! Shaped after [`crate::ir::optimizer::phase::Phase`]'s seam-trait role
//! relative to `run_pipeline`: the pass never computes this information
//! itself, it only consults it. `ConservativeGlobalInfo` is the safe default
//! — it mirrors the escape-defaults-to-`Escaped` pattern in
//! `ir::optimizer::dead_code_elimination::escape::EscapeAnalyzer::get_status`,
//! letting this module be exercised standalone without a real inter-
//! procedural analysis wired up.

use super::super::var::Var;
use cranelift_entity::EntityRef;
use std::collections::HashSet;

/// Whether `y` is known to denote one of a fixed set of closures, or could
/// be anything (including an externally supplied function).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Approx {
    /// No useful information; treat every flow through this position as
    /// already accounted for by escape bits.
    Top,
    /// `y` is known to be one of `known`, a set of closure-constant
    /// variables.
    Values { known: HashSet<Var> },
}

/// Whether a variable's value may become observable outside its defining
/// closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Escape {
    /// May escape through a genuinely unknown sink.
    Escape,
    /// May escape, but only into a position whose value is otherwise a
    /// known constant (weaker than `Escape`, still forces conservatism here).
    EscapeConstant,
    /// Provably confined to its defining closure.
    No,
}

/// Read-only oracle supplied by the global-flow collaborator.
///
/// Borrowed for the lifetime of the pass; never copied (see the design
/// notes' "shared immutable oracle" guidance).
pub trait GlobalFlowInfo {
    /// The set of closure constants that may flow to the position `v`
    /// denotes (typically the callee position of an `Apply`).
    fn info_approximation(&self, v: Var) -> Approx;

    /// The variables a closure-valued `v` may return.
    fn info_return_vals(&self, v: Var) -> HashSet<Var>;

    /// Whether `v`'s value may be observed outside its defining closure.
    fn info_variable_may_escape(&self, v: Var) -> Escape;
}

/// The conservative default: every position is `Top`, every variable may
/// escape. Safe to use whenever the real inter-procedural result isn't
/// wired up yet — the pass degrades to treating every call and return as
/// opaque, never making dead a variable that's actually live.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConservativeGlobalInfo;

impl GlobalFlowInfo for ConservativeGlobalInfo {
    fn info_approximation(&self, _v: Var) -> Approx {
        Approx::Top
    }

    fn info_return_vals(&self, _v: Var) -> HashSet<Var> {
        HashSet::new()
    }

    fn info_variable_may_escape(&self, _v: Var) -> Escape {
        Escape::Escape
    }
}
