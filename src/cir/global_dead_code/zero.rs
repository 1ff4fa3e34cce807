// src/cir/global_dead_code/zero.rs
//! S5: the rewriter.
//!
//! Walks the program once, substituting every dead variable reference with
//! the sentinel and compacting trailing dead fields of heap-block literals.
//! Grounded in `dead_code_elimination::optimizer::remove_dead_instructions`'s
//! dispatch-on-instruction-kind shape, adapted here to substitution rather
//! than deletion — per the spec, this pass never removes a binding, it only
//! makes references dead-visible so the downstream local DCE can.

use super::super::arg::Arg;
use super::super::branch::{Branch, Cont};
use super::super::expr::Expression;
use super::super::instr::Instruction;
use super::super::program::Program;
use super::super::var::Var;
use super::lattice::Live;
use super::solve::LiveTable;
use cranelift_entity::EntityRef;

/// `σ(v)`: `v` itself if live, the sentinel otherwise.
fn sigma(live: &LiveTable, sentinel: Var, v: Var) -> Var {
    if live[v.index()].is_dead() { sentinel } else { v }
}

fn sigma_arg(live: &LiveTable, sentinel: Var, arg: Arg) -> Arg {
    match arg {
        Arg::Pv(v) => Arg::Pv(sigma(live, sentinel, v)),
        Arg::Pc(_) => arg,
    }
}

/// Rewrites a continuation's actual arguments against its *target*'s
/// formal-parameter liveness, not the arguments' own. A missing target is
/// passed through unchanged — arities are preserved either way so a later
/// syntactic pass can still drop dead parameters.
fn zero_cont(program: &Program, live: &LiveTable, sentinel: Var, cont: Cont) -> Cont {
    let Some(target) = program.block(cont.pc) else { return cont };
    let args = cont
        .args
        .into_iter()
        .enumerate()
        .map(|(i, a)| match target.params.get(i) {
            Some(&p) if live[p.index()].is_dead() => sentinel,
            _ => a,
        })
        .collect();
    Cont::new(cont.pc, args)
}

fn zero_expr(program: &Program, live: &LiveTable, sentinel: Var, x: Var, e: Expression) -> Expression {
    match e {
        Expression::Closure(params, cont) => Expression::Closure(params, zero_cont(program, live, sentinel, cont)),
        Expression::Block(tag, mut vars, kind) => {
            if let Live::Live(fields) = &live[x.index()] {
                for (i, v) in vars.iter_mut().enumerate() {
                    if !fields.contains(i as u32) {
                        *v = sentinel;
                    }
                }
                while vars.last() == Some(&sentinel) {
                    vars.pop();
                }
            }
            Expression::Block(tag, vars, kind)
        }
        Expression::Apply { f, args } => {
            let args = args.into_iter().map(|a| sigma_arg(live, sentinel, a)).collect();
            Expression::Apply { f, args }
        }
        other => other,
    }
}

fn zero_instruction(program: &Program, live: &LiveTable, sentinel: Var, instr: Instruction) -> Instruction {
    match instr {
        Instruction::Let(x, e) => Instruction::Let(x, zero_expr(program, live, sentinel, x, e)),
        other @ (Instruction::Assign(..)
        | Instruction::SetField(..)
        | Instruction::ArraySet(..)
        | Instruction::OffsetRef(..)) => other,
    }
}

fn zero_branch(program: &Program, live: &LiveTable, sentinel: Var, branch: Branch) -> Branch {
    match branch {
        Branch::Return(x) => Branch::Return(sigma(live, sentinel, x)),
        Branch::Branch(c) => Branch::Branch(zero_cont(program, live, sentinel, c)),
        Branch::Poptrap(c) => Branch::Poptrap(zero_cont(program, live, sentinel, c)),
        Branch::Cond(x, c1, c2) => {
            Branch::Cond(x, zero_cont(program, live, sentinel, c1), zero_cont(program, live, sentinel, c2))
        }
        Branch::Switch(x, a1, a2) => {
            let rw = |v: Vec<Cont>| v.into_iter().map(|c| zero_cont(program, live, sentinel, c)).collect();
            Branch::Switch(x, rw(a1), rw(a2))
        }
        Branch::Pushtrap(c, x, ch, pcs) => {
            Branch::Pushtrap(zero_cont(program, live, sentinel, c), x, zero_cont(program, live, sentinel, ch), pcs)
        }
        other @ (Branch::Raise(..) | Branch::Stop) => other,
    }
}

/// Rewrites every block of `program`, replacing dead variable occurrences
/// with `sentinel` per §4.5. `live` must already be indexed up to
/// `program.var_count()` (i.e. computed *after* [`super::add_sentinel`]'s
/// `fresh_var` bump), and `sentinel` must already be bound in the entry
/// block — this function never inserts that binding itself.
#[must_use]
pub fn zero(mut program: Program, sentinel: Var, live: &LiveTable) -> Program {
    let addrs: Vec<_> = program.blocks().map(|(pc, _)| pc).collect();
    for pc in addrs {
        let block = program.block_mut(pc).expect("address collected from program.blocks()");
        let body = std::mem::take(&mut block.body);
        block.body = body
            .into_iter()
            .map(|(instr, loc)| (zero_instruction(&program, live, sentinel, instr), loc))
            .collect();

        let (branch, loc) = block.branch.clone();
        block.branch = (zero_branch(&program, live, sentinel, branch), loc);
    }
    program
}
