// src/cir/global_dead_code/mod.rs
//! A global, field-sensitive dead-code analysis and rewriting pass over
//! [`crate::cir::Program`].
//!
//! The pass never deletes an instruction; it rewrites every occurrence of a
//! variable it judges dead into a single fresh sentinel, bound once to an
//! undefined value at the top of the entry block. A downstream, purely
//! local dead-code eliminator (not part of this crate) removes the bindings
//! that become unused as a result. Splitting the work this way keeps the
//! hard question — "is this observable?" — here, in a pass that reasons
//! globally and field-sensitively, and leaves syntactic cleanup simple.
//!
//! Pipeline (§2 of the module's governing design note, restated per stage
//! in its own submodule): [`defs`] (S1) and [`uses`] (S2) are built from a
//! syntactic walk; [`seed`] (S3) seeds every variable's initial lattice
//! value; [`solve`] (S4) runs the monotone fixpoint; [`zero`] (S5) rewrites.
//! [`run`] wires all five together the way
//! [`crate::ir::optimizer::phase::run_pipeline`] wires optimizer phases,
//! minus the `Phase` trait itself — this pass takes a `global_info`
//! collaborator `run_pipeline` phases don't need.

mod defs;
mod global_info;
mod lattice;
mod purity;
mod seed;
mod solve;
mod uses;
mod zero;

pub use defs::{Def, DefTable, definitions};
pub use global_info::{Approx, ConservativeGlobalInfo, Escape, GlobalFlowInfo};
pub use lattice::{FieldSet, Live};
pub use purity::{DefaultPurityOracle, PurityOracle};
pub use seed::{SeedTable, liveness};
pub use solve::{LiveTable, solve};
pub use uses::{UsageKind, UseGraph, usages};
pub use zero::zero;

use super::expr::{Expression, PrimOp};
use super::instr::Instruction;
use super::program::Program;
use super::var::Var;
use crate::time::timer::Timer;
use console::style;
use cranelift_entity::EntityRef;

/// Debug/timing switches, consulted by [`run`]. Named after §6.3/§6.6's
/// `globaldeadcode`/`times`/`--no-global-dead-code` CLI flags; `cli::Args`
/// maps directly onto this struct at the call site.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// When set, dumps the pre/post-rewrite IR plus the use-graph, seed
    /// liveness, and final liveness tables to stdout.
    pub debug_dump: bool,
    /// When set, prints the pass's elapsed wall time.
    pub print_times: bool,
    /// When unset, the pass degrades to an identity transform (after
    /// sentinel insertion): the purity oracle is forced false for every
    /// expression, so every seed goes `Top` and nothing becomes dead.
    pub enabled: bool,
}

impl Options {
    #[must_use]
    pub fn enabled() -> Self {
        Self { debug_dump: false, print_times: false, enabled: true }
    }
}

/// Allocates a fresh variable and prepends `Let(s, Prim(Extern("%undefined"), []))`
/// to the entry block, returning the program (with `nv` bumped) and the new
/// variable. Every substitution performed by a subsequent [`run`] call uses
/// this same `s`, and because it's prepended to the entry block it dominates
/// every later use — satisfying the "sentinel well-scoped" testable property.
#[must_use]
pub fn add_sentinel(mut program: Program) -> (Program, Var) {
    let sentinel = program.fresh_var();
    let entry = program.entry();
    let loc = program.block(entry).map(|b| b.branch.1.clone()).unwrap_or_default();
    let block = program.block_mut(entry).expect("entry address always indexes a block");
    let undefined = Instruction::Let(sentinel, Expression::Prim(PrimOp::Extern("%undefined".into()), vec![]));
    block.body.insert(0, (undefined, loc));
    (program, sentinel)
}

fn dump_label(title: &str) {
    println!("{}", style(title).cyan().bold());
}

/// Runs the three-stage dataflow engine (§4.6's `f`) and returns the
/// rewritten program. `sentinel` must already be bound in the entry block —
/// callers that don't have one yet should go through [`add_sentinel`] first.
///
/// Infallible by design: per §7, every malformed-input case the pass can
/// encounter (a dangling continuation target, an arity mismatch) degrades
/// to a conservative approximation rather than failing.
#[must_use]
pub fn run<G: GlobalFlowInfo>(program: Program, sentinel: Var, global_info: &G, options: Options) -> Program {
    let mut timer = options.print_times.then(|| Timer::new("global dead code"));

    if options.debug_dump {
        dump_label("global dead code: input program");
        println!("{program}");
    }

    let purity = DefaultPurityOracle;
    let nv = program.var_count();
    let def_table = definitions(nv, &program);
    let use_graph = usages(nv, &program, &def_table, global_info);
    let seed_table = liveness(nv, &program, &purity, global_info, options.enabled);

    if options.debug_dump {
        dump_label("global dead code: seed liveness");
        for i in 0..nv {
            println!("  {} -> {}", Var::new(i as usize), seed_table[i as usize]);
        }
    }

    let live_table = solve(&use_graph, &def_table, &seed_table);

    if options.debug_dump {
        dump_label("global dead code: final liveness");
        for i in 0..nv {
            println!("  {} -> {}", Var::new(i as usize), live_table[i as usize]);
        }
    }

    let rewritten = zero(program, sentinel, &live_table);

    if options.debug_dump {
        dump_label("global dead code: rewritten program");
        println!("{rewritten}");
    }

    if let Some(timer) = timer.take() {
        println!("{timer}");
    }

    rewritten
}
