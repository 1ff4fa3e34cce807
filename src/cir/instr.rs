// src/cir/instr.rs
use super::expr::Expression;
use super::var::Var;
use std::fmt;

/// A single step within a [`crate::cir::Block`]'s body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Bind fresh `x` to expression `e`.
    Let(Var, Expression),
    /// Mutate existing `x` to the current value of `y`.
    Assign(Var, Var),
    /// Write field `i` of heap block `x` with `y`.
    SetField(Var, usize, Var),
    /// Write index `y` of array `x` with `z`.
    ArraySet(Var, Var, Var),
    /// Increment integer cell `x` by `i`.
    OffsetRef(Var, i64),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let(x, e) => write!(f, "let {x} = {e}"),
            Self::Assign(x, y) => write!(f, "{x} := {y}"),
            Self::SetField(x, i, y) => write!(f, "{x}.{i} <- {y}"),
            Self::ArraySet(x, y, z) => write!(f, "{x}[{y}] <- {z}"),
            Self::OffsetRef(x, i) => write!(f, "{x} += {i}"),
        }
    }
}
