// src/cir/global_dead_code/seed.rs
//! S3: initial liveness.
//!
//! A single syntactic walk, seeding every variable to `Dead`, `Live`, or
//! `Top` from locally observable effects alone — the fixpoint solver (S4)
//! does the rest. Grounded in the gen/kill-set walk of
//! `ir::optimizer::dead_code_elimination::analyzer::LivenessAnalyzer::compute_gen_kill_sets`,
//! here specialized to the closure IR's instruction/branch shapes.

use super::super::branch::Branch;
use super::super::expr::Expression;
use super::super::instr::Instruction;
use super::super::program::Program;
use super::super::var::Var;
use super::global_info::{Escape, GlobalFlowInfo};
use super::lattice::Live;
use super::purity::PurityOracle;
use cranelift_entity::EntityRef;

/// `seed[v]` for every `v` in `[0, nv)`.
pub type SeedTable = Vec<Live>;

fn raise(table: &mut SeedTable, v: Var, value: Live) {
    let slot = &mut table[v.index()];
    *slot = slot.join(&value);
}

/// Seeds every variable to `Dead`, then raises it per the syntactic rules
/// in §4.3. `global_dead_code_enabled` is the driver's kill switch: when
/// `false`, every expression is treated as impure, which forces every
/// `Let`-bound variable to `Top` and degrades the whole pass to a no-op.
///
/// `Apply` is deliberately exempted from the impurity-raises-to-`Top` rule
/// (while enabled): a call keeps its instruction regardless of its result's
/// liveness — that's a downstream-DCE concern, not this stage's — so seeding
/// the bound variable contributes nothing here and leaves its observational
/// liveness to the fixpoint's return-value propagation and the oracle's
/// escape bits. Forcing it to `Top` at seed time would pre-empt that
/// propagation and make every call result unconditionally live.
#[must_use]
pub fn liveness<P: PurityOracle, G: GlobalFlowInfo>(
    nv: u32, program: &Program, purity: &P, global_info: &G, global_dead_code_enabled: bool,
) -> SeedTable {
    let mut table = vec![Live::Dead; nv as usize];

    for (_, block) in program.blocks() {
        for (instr, _) in &block.body {
            match instr {
                Instruction::Let(x, e) => {
                    if !global_dead_code_enabled {
                        raise(&mut table, *x, Live::Top);
                    } else if !matches!(e, Expression::Apply { .. }) && !purity.is_pure(e) {
                        raise(&mut table, *x, Live::Top);
                    }
                }
                Instruction::SetField(x, i, y) => {
                    raise(&mut table, *x, Live::live_field(*i as u32));
                    raise(&mut table, *y, Live::Top);
                }
                Instruction::ArraySet(x, y, z) => {
                    raise(&mut table, *x, Live::Top);
                    raise(&mut table, *y, Live::Top);
                    raise(&mut table, *z, Live::Top);
                }
                Instruction::OffsetRef(x, i) => {
                    let field = u32::try_from(*i).unwrap_or(0);
                    raise(&mut table, *x, Live::live_field(field));
                }
                Instruction::Assign(_, _) => {}
            }
        }

        match &block.branch.0 {
            Branch::Return(x) => {
                if matches!(global_info.info_variable_may_escape(*x), Escape::Escape | Escape::EscapeConstant) {
                    raise(&mut table, *x, Live::Top);
                }
            }
            Branch::Raise(x, _) | Branch::Cond(x, _, _) | Branch::Switch(x, _, _) => {
                raise(&mut table, *x, Live::Top);
            }
            Branch::Stop | Branch::Branch(_) | Branch::Pushtrap(..) | Branch::Poptrap(_) => {}
        }
    }

    table
}
