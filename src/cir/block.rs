// src/cir/block.rs
use super::branch::Branch;
use super::instr::Instruction;
use super::var::Var;
use crate::location::source_span::SourceSpan;
use std::fmt;

/// A source location attached to an IR node. Alias of the span type the rest
/// of the crate uses for diagnostics.
pub type Location = SourceSpan;

/// A basic block: formal parameters, an ordered instruction body, and a
/// terminating branch — each instruction and the branch carrying its own
/// source location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    pub params: Vec<Var>,
    pub body: Vec<(Instruction, Location)>,
    pub branch: (Branch, Location),
}

impl Block {
    #[must_use]
    pub fn new(params: Vec<Var>, branch: Branch, branch_loc: Location) -> Self {
        Self { params, body: Vec::new(), branch: (branch, branch_loc) }
    }

    pub fn push(&mut self, instr: Instruction, loc: Location) {
        self.body.push((instr, loc));
    }

    #[must_use]
    pub fn set_branch(&mut self, branch: Branch, loc: Location) -> (Branch, Location) {
        std::mem::replace(&mut self.branch, (branch, loc))
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        writeln!(f, "):")?;
        for (instr, _) in &self.body {
            writeln!(f, "  {instr}")?;
        }
        write!(f, "  {}", self.branch.0)
    }
}
