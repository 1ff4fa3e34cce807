// src/cir/branch.rs
use super::var::{Addr, Var};
use std::fmt;

/// A jump to a target block together with the actual arguments bound to its
/// formal parameters: `(target-block-address, argument-list)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cont {
    pub pc: Addr,
    pub args: Vec<Var>,
}

impl Cont {
    #[must_use]
    pub fn new(pc: Addr, args: Vec<Var>) -> Self {
        Self { pc, args }
    }
}

impl fmt::Display for Cont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.pc)?;
        for (i, a) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{a}")?;
        }
        write!(f, ")")
    }
}

/// A block's terminating control transfer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Branch {
    Return(Var),
    Raise(Var, RaiseKind),
    Stop,
    Branch(Cont),
    Cond(Var, Cont, Cont),
    Switch(Var, Vec<Cont>, Vec<Cont>),
    Pushtrap(Cont, Var, Cont, Vec<Addr>),
    Poptrap(Cont),
}

/// How a value reached a `Raise`; carried through unchanged by this pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaiseKind {
    Notrace,
    Reraise,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Return(x) => write!(f, "return {x}"),
            Self::Raise(x, _) => write!(f, "raise {x}"),
            Self::Stop => write!(f, "stop"),
            Self::Branch(c) => write!(f, "branch {c}"),
            Self::Cond(x, c1, c2) => write!(f, "cond {x} then {c1} else {c2}"),
            Self::Switch(x, a1, a2) => write!(f, "switch {x} [{} | {}]", a1.len(), a2.len()),
            Self::Pushtrap(c, x, ch, _) => write!(f, "pushtrap {c} handler {x} -> {ch}"),
            Self::Poptrap(c) => write!(f, "poptrap {c}"),
        }
    }
}
