// src/cir/arg.rs
use super::constant::Constant;
use super::var::Var;
use std::fmt;

/// An actual argument: either a variable reference or an inline constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arg {
    Pv(Var),
    Pc(Constant),
}

impl Arg {
    /// Returns the referenced variable, if this argument is a variable
    /// reference rather than an inline constant.
    #[must_use]
    pub const fn as_var(&self) -> Option<Var> {
        match self {
            Self::Pv(v) => Some(*v),
            Self::Pc(_) => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pv(v) => write!(f, "{v}"),
            Self::Pc(c) => write!(f, "{c}"),
        }
    }
}
