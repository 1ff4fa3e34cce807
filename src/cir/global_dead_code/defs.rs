// src/cir/global_dead_code/defs.rs
//! S1: the definition map.
//!
//! A dense, `nv`-sized array rather than a general graph/map structure —
//! per the design notes' "graphs as dense arrays" guidance, the same idiom
//! `ir::optimizer::dead_code_elimination`'s `InstructionIndex`-keyed maps
//! use, specialized here to a plain `Vec` since `Var` is already a dense
//! index.

use super::super::instr::Instruction;
use super::super::expr::Expression;
use super::super::program::Program;
use super::super::var::Var;
use cranelift_entity::EntityRef;

/// How a variable came to be bound.
#[derive(Debug, Clone, Copy)]
pub enum Def<'p> {
    /// Bound by `Let(x, e)`; `e` borrowed from the program being analyzed.
    Expr(&'p Expression),
    /// A block/closure formal, or the target of an `Assign` — no static
    /// right-hand side to inspect.
    Param,
}

/// `defs[v]` for every `v` in `[0, nv)`.
#[derive(Debug, Clone)]
pub struct DefTable<'p> {
    table: Vec<Def<'p>>,
}

impl<'p> DefTable<'p> {
    #[must_use]
    pub fn get(&self, v: Var) -> Def<'p> {
        self.table[v.index()]
    }
}

/// Walks every block's body once, recording `Expr(e)` for each `Let(x, e)`.
/// Every other variable — including every `Assign` target and every block
/// parameter — is left at the `Param` it was pre-initialized to, so formals
/// are classified correctly without a second pass.
#[must_use]
pub fn definitions(nv: u32, program: &Program) -> DefTable<'_> {
    let mut table = vec![Def::Param; nv as usize];
    for (_, block) in program.blocks() {
        for (instr, _) in &block.body {
            if let Instruction::Let(x, e) = instr {
                table[x.index()] = Def::Expr(e);
            }
        }
    }
    DefTable { table }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cir::block::Block;
    use crate::cir::branch::Branch;
    use crate::cir::constant::Constant;
    use crate::cir::var::Addr;

    #[test]
    fn let_bound_variable_records_its_expression() {
        let x = Var::new(0);
        let mut entry = Block::new(vec![], Branch::Return(x), Default::default());
        entry.push(Instruction::Let(x, Expression::Constant(Constant::Int(1))), Default::default());
        let mut blocks = cranelift_entity::PrimaryMap::new();
        let pc = blocks.push(entry);
        let program = Program::new(blocks, pc, 1).unwrap();

        let defs = definitions(1, &program);
        assert!(matches!(defs.get(x), Def::Expr(Expression::Constant(Constant::Int(1)))));
    }

    #[test]
    fn unreferenced_variable_defaults_to_param() {
        let x = Var::new(0);
        let blocks = {
            let mut b = cranelift_entity::PrimaryMap::new();
            b.push(Block::new(vec![x], Branch::Return(x), Default::default()));
            b
        };
        let program = Program::new(blocks, Addr::new(0), 1).unwrap();
        let defs = definitions(1, &program);
        assert!(matches!(defs.get(x), Def::Param));
    }
}
