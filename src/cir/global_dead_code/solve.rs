// src/cir/global_dead_code/solve.rs
//! S4: the fixpoint solver.
//!
//! A worklist over the *inverted* use-graph, grounded in
//! `ir::optimizer::dead_code_elimination::analyzer::LivenessAnalyzer::analyze`'s
//! worklist-to-fixpoint shape — including a `MAX_UPDATES_PER_VAR` safety
//! valve in the same spirit as that analyzer's `MAX_ITERATIONS`, even though
//! termination here is already guaranteed by the lattice's finite height
//! (§9's "chaotic iteration with a dirty-bit on children"). The valve only
//! ever forces a variable *up* to `Top` on trip, never leaves it frozen
//! below the true fixpoint — anything else would turn the backstop into a
//! source of unsoundness.

use super::super::expr::Expression;
use super::super::var::Var;
use super::defs::{Def, DefTable};
use super::lattice::Live;
use super::seed::SeedTable;
use super::uses::{UsageKind, UseGraph};
use cranelift_entity::EntityRef;
use std::collections::VecDeque;

/// `live_table[x]` after the least fixpoint of `propagate` is reached.
pub type LiveTable = Vec<Live>;

const MAX_UPDATES_PER_VAR: usize = 4096;

/// `contribution(target, user, kind)`, per §4.4's table.
fn contribution(target: Var, user: Var, kind: UsageKind, defs: &DefTable<'_>, live: &[Live]) -> Live {
    match kind {
        UsageKind::Propagate => live[user.index()].clone(),
        UsageKind::Compute => match &live[user.index()] {
            Live::Dead => Live::Dead,
            Live::Live(fields) => match defs.get(user) {
                Def::Expr(Expression::Block(_, vars, _)) => {
                    let selected =
                        vars.iter().enumerate().any(|(i, v)| *v == target && fields.contains(i as u32));
                    if selected { Live::Top } else { Live::Dead }
                }
                Def::Expr(Expression::Field(_, i)) => Live::live_field(*i as u32),
                _ => Live::Top,
            },
            Live::Top => match defs.get(user) {
                Def::Expr(Expression::Field(_, i)) => Live::live_field(*i as u32),
                _ => Live::Top,
            },
        },
    }
}

/// Iterates `propagate` to a fixpoint, starting every variable at its seed
/// value and re-examining a variable whenever one of its users changes.
#[must_use]
pub fn solve(uses: &UseGraph, defs: &DefTable<'_>, seed: &SeedTable) -> LiveTable {
    let nv = uses.var_count();
    let mut live: LiveTable = seed.clone();

    // Reverse adjacency: `consumers[v]` lists every target `t` whose
    // `uses[t]` contains `v`, i.e. every `t` that must be re-examined when
    // `v`'s value changes.
    let mut consumers: Vec<Vec<Var>> = vec![Vec::new(); nv];
    for t_idx in 0..nv {
        let t = Var::new(t_idx);
        for &(user, _) in uses.users_of(t) {
            consumers[user.index()].push(t);
        }
    }

    let mut queued = vec![true; nv];
    let mut worklist: VecDeque<Var> = (0..nv).map(Var::new).collect();
    let mut update_counts = vec![0usize; nv];
    let mut overflowed = false;

    while let Some(t) = worklist.pop_front() {
        queued[t.index()] = false;

        let mut new_val = seed[t.index()].clone();
        for &(user, kind) in uses.users_of(t) {
            new_val = new_val.join(&contribution(t, user, kind, defs, &live));
        }

        // Past the update budget, force the sound over-approximation rather
        // than leaving `t` frozen below its true fixpoint value: `Top` is
        // absorbing, so this is also the last update `t` can ever need.
        if update_counts[t.index()] >= MAX_UPDATES_PER_VAR && new_val != Live::Top {
            new_val = Live::Top;
            overflowed = true;
        }

        if new_val != live[t.index()] {
            live[t.index()] = new_val;
            update_counts[t.index()] += 1;
            for &dep in &consumers[t.index()] {
                if !queued[dep.index()] {
                    queued[dep.index()] = true;
                    worklist.push_back(dep);
                }
            }
        }
    }

    if overflowed {
        eprintln!(
            "Warning: global dead-code liveness solver exceeded {MAX_UPDATES_PER_VAR} updates for some \
             variable; forced it to Top as a conservative over-approximation"
        );
    }

    live
}
