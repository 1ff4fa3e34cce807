// src/cir/global_dead_code/uses.rs
//! S2: the use-graph builder.
//!
//! The graph is stored *inverted* relative to a def-graph: `uses[y]` holds
//! every variable `x` that uses `y`, tagged with how. This is the same
//! def-use orientation `ir::optimizer::dead_code_elimination::def_use`
//! keeps (`value_to_uses: HashMap<ValueId, HashSet<InstructionIndex>>`),
//! specialized to a dense `Vec` per variable since `Var` is already dense.

use super::super::branch::{Branch, Cont};
use super::super::expr::Expression;
use super::super::instr::Instruction;
use super::super::program::Program;
use super::super::var::Var;
use super::defs::{Def, DefTable};
use super::global_info::{Approx, GlobalFlowInfo};
use cranelift_entity::EntityRef;

/// How a user references the variable it's keyed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageKind {
    /// `y`'s contribution to `x` depends on how `y` is used (see the
    /// solver's `contribution` table).
    Compute,
    /// `x` inherits `y`'s liveness verbatim.
    Propagate,
}

/// `uses[y] = [(x, kind), ...]` for every `y` in `[0, nv)`.
#[derive(Debug, Clone)]
pub struct UseGraph {
    pub(super) edges: Vec<Vec<(Var, UsageKind)>>,
}

impl UseGraph {
    fn new(nv: u32) -> Self {
        Self { edges: vec![Vec::new(); nv as usize] }
    }

    fn add_edge(&mut self, user: Var, used: Var, kind: UsageKind) {
        self.edges[used.index()].push((user, kind));
    }

    /// The users of `y`, each tagged with how they use it.
    #[must_use]
    pub fn users_of(&self, y: Var) -> &[(Var, UsageKind)] {
        &self.edges[y.index()]
    }

    #[must_use]
    pub fn var_count(&self) -> usize {
        self.edges.len()
    }
}

/// Pairs a continuation's actual arguments with its target block's formal
/// parameters as `Propagate` edges (`uses[arg].push((param, Propagate))`):
/// the caller's argument inherits whatever liveness the callee body gives
/// its parameter. Length mismatches are tolerated — the shorter of the two
/// bounds the pairing — and a missing target contributes no edges at all.
fn add_cont_edges(graph: &mut UseGraph, program: &Program, cont: &Cont) {
    let Some(target) = program.block(cont.pc) else { return };
    for (param, arg) in target.params.iter().zip(cont.args.iter()) {
        graph.add_edge(*param, *arg, UsageKind::Propagate);
    }
}

/// Builds the use-graph by a single walk of every block's body and branch.
#[must_use]
pub fn usages<G: GlobalFlowInfo>(nv: u32, program: &Program, defs: &DefTable<'_>, global_info: &G) -> UseGraph {
    let mut graph = UseGraph::new(nv);

    for (_, block) in program.blocks() {
        for (instr, _) in &block.body {
            match instr {
                Instruction::Let(x, Expression::Apply { f, args }) => {
                    graph.add_edge(*x, *f, UsageKind::Compute);
                    if let Approx::Values { known } = global_info.info_approximation(*f) {
                        for k in known {
                            let Def::Expr(Expression::Closure(params, _)) = defs.get(k) else { continue };
                            if params.len() != args.len() {
                                continue;
                            }
                            for r in global_info.info_return_vals(k) {
                                graph.add_edge(*x, r, UsageKind::Propagate);
                            }
                            for (param, arg) in params.iter().zip(args.iter()) {
                                if let Some(arg_var) = arg.as_var() {
                                    graph.add_edge(*param, arg_var, UsageKind::Propagate);
                                }
                            }
                        }
                    }
                }
                Instruction::Let(x, Expression::Block(_, vars, _)) => {
                    for v in vars {
                        graph.add_edge(*x, *v, UsageKind::Compute);
                    }
                }
                Instruction::Let(x, Expression::Field(z, _)) => {
                    graph.add_edge(*x, *z, UsageKind::Compute);
                }
                Instruction::Let(_, Expression::Constant(_)) => {}
                Instruction::Let(_, Expression::Closure(_, cont)) => {
                    add_cont_edges(&mut graph, program, cont);
                }
                Instruction::Let(x, Expression::Prim(_, args)) => {
                    for arg in args {
                        if let Some(v) = arg.as_var() {
                            graph.add_edge(*x, v, UsageKind::Compute);
                        }
                    }
                }
                Instruction::Assign(x, y) => graph.add_edge(*x, *y, UsageKind::Compute),
                Instruction::SetField(..) | Instruction::ArraySet(..) | Instruction::OffsetRef(..) => {}
            }
        }

        match &block.branch.0 {
            Branch::Branch(c) | Branch::Poptrap(c) => add_cont_edges(&mut graph, program, c),
            Branch::Cond(_, c1, c2) => {
                add_cont_edges(&mut graph, program, c1);
                add_cont_edges(&mut graph, program, c2);
            }
            Branch::Switch(_, a1, a2) => {
                for c in a1.iter().chain(a2.iter()) {
                    add_cont_edges(&mut graph, program, c);
                }
            }
            Branch::Pushtrap(c, _, ch, _) => {
                add_cont_edges(&mut graph, program, c);
                add_cont_edges(&mut graph, program, ch);
            }
            Branch::Return(_) | Branch::Raise(_, _) | Branch::Stop => {}
        }
    }

    graph
}
