// src/cir/global_dead_code/purity.rs
//! The purity oracle: `pure_expr`.
//!
//! Grounded in `ir::optimizer::dead_code_elimination::escape::SideEffectClass`
//! and its `classify` method — this is the same Pure/not-Pure taxonomy, aimed
//! at the closure-IR's `Expression` shapes instead of SSA `InstructionKind`.
//! Unlike [`super::global_info::GlobalFlowInfo`], this oracle's contract is
//! purely local (it never needs to see the whole program), so it gets a real
//! default here rather than a conservative stand-in.

use super::super::expr::{Expression, PrimOp};

/// Whether an expression has any side effect beyond producing its result.
pub trait PurityOracle {
    fn is_pure(&self, expr: &Expression) -> bool;
}

/// The default oracle: every expression form is pure except `Apply` (an
/// unknown call may have arbitrary effects) and the `Extern` primitive
/// (a foreign call, same reasoning). Everything else — field projection,
/// block construction, constants, closure literals, and the closed set of
/// arithmetic/comparison primitives — only computes a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPurityOracle;

impl PurityOracle for DefaultPurityOracle {
    fn is_pure(&self, expr: &Expression) -> bool {
        match expr {
            Expression::Apply { .. } => false,
            Expression::Block(..) | Expression::Field(..) | Expression::Constant(_) | Expression::Closure(..) => true,
            Expression::Prim(op, _) => !matches!(op, PrimOp::Extern(_)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cir::branch::Cont;
    use crate::cir::constant::Constant;
    use crate::cir::expr::BlockKind;
    use crate::cir::var::{Addr, Var};
    use cranelift_entity::EntityRef;

    #[test]
    fn apply_is_impure() {
        let oracle = DefaultPurityOracle;
        let e = Expression::Apply { f: Var::new(0), args: vec![] };
        assert!(!oracle.is_pure(&e));
    }

    #[test]
    fn extern_prim_is_impure() {
        let oracle = DefaultPurityOracle;
        let e = Expression::Prim(PrimOp::Extern("print".into()), vec![]);
        assert!(!oracle.is_pure(&e));
    }

    #[test]
    fn arithmetic_prim_is_pure() {
        let oracle = DefaultPurityOracle;
        let e = Expression::Prim(PrimOp::Add, vec![]);
        assert!(oracle.is_pure(&e));
    }

    #[test]
    fn block_field_constant_closure_are_pure() {
        let oracle = DefaultPurityOracle;
        assert!(oracle.is_pure(&Expression::Constant(Constant::Unit)));
        assert!(oracle.is_pure(&Expression::Field(Var::new(0), 1)));
        assert!(oracle.is_pure(&Expression::Block(0, vec![], BlockKind::Tuple)));
        assert!(oracle.is_pure(&Expression::Closure(vec![], Cont::new(Addr::new(0), vec![]))));
    }
}
