// src/cir/expr.rs
use super::arg::Arg;
use super::branch::Cont;
use super::constant::Constant;
use super::var::Var;
use std::fmt;
use std::sync::Arc;

/// Shape tag for a `Block` expression: which heap-block representation the
/// allocation uses. Carried through unchanged by this pass; it never drives
/// liveness decisions (only field indices do).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Tuple,
    Record,
    Variant,
    Array,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Tuple => "Tuple",
            Self::Record => "Record",
            Self::Variant => "Variant",
            Self::Array => "Array",
        };
        write!(f, "{s}")
    }
}

/// A primitive operator applied by a `Prim` expression.
///
/// `Extern` is the escape hatch used for runtime-provided primitives; the
/// sentinel binding inserted by [`crate::cir::global_dead_code::add_sentinel`]
/// is `Prim(PrimOp::Extern("%undefined".into()), [])`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrimOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Lt,
    Not,
    Extern(Arc<str>),
}

impl fmt::Display for PrimOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Eq => write!(f, "=="),
            Self::Lt => write!(f, "<"),
            Self::Not => write!(f, "!"),
            Self::Extern(name) => write!(f, "%{name}"),
        }
    }
}

/// The right-hand side of a `Let` binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Apply { f: Var, args: Vec<Arg> },
    Block(u32, Vec<Var>, BlockKind),
    Field(Var, usize),
    Constant(Constant),
    Closure(Vec<Var>, Cont),
    Prim(PrimOp, Vec<Arg>),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Apply { f: fun, args } => {
                write!(f, "{fun}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, ")")
            }
            Self::Block(tag, vars, kind) => {
                write!(f, "{kind}#{tag}[")?;
                for (i, v) in vars.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Self::Field(z, i) => write!(f, "{z}.{i}"),
            Self::Constant(c) => write!(f, "{c}"),
            Self::Closure(params, cont) => {
                write!(f, "fun(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, ") -> {cont}")
            }
            Self::Prim(op, args) => {
                write!(f, "{op}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, ")")
            }
        }
    }
}
