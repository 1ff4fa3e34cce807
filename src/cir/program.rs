// src/cir/program.rs
use super::block::Block;
use super::var::{Addr, Var};
use crate::cir::error::CirError;
use cranelift_entity::{EntityRef, PrimaryMap};
use std::fmt;

/// A whole program: a mapping from block address to [`Block`], plus a
/// distinguished entry block and the total variable count `nv`.
#[derive(Debug, Clone)]
pub struct Program {
    blocks: PrimaryMap<Addr, Block>,
    entry: Addr,
    nv: u32,
}

impl Program {
    /// Builds a program from a set of blocks and declares `nv` fresh
    /// variables to have been allocated across them.
    ///
    /// # Errors
    ///
    /// Returns [`CirError::EmptyProgram`] if `blocks` is empty, or
    /// [`CirError::InvalidEntry`] if `entry` doesn't index into `blocks`.
    pub fn new(blocks: PrimaryMap<Addr, Block>, entry: Addr, nv: u32) -> Result<Self, CirError> {
        if blocks.is_empty() {
            return Err(CirError::EmptyProgram);
        }
        if entry.index() >= blocks.len() {
            return Err(CirError::InvalidEntry(entry));
        }
        Ok(Self { blocks, entry, nv })
    }

    #[must_use]
    pub const fn entry(&self) -> Addr {
        self.entry
    }

    #[must_use]
    pub const fn var_count(&self) -> u32 {
        self.nv
    }

    #[must_use]
    pub fn block(&self, pc: Addr) -> Option<&Block> {
        self.blocks.get(pc)
    }

    pub fn block_mut(&mut self, pc: Addr) -> Option<&mut Block> {
        self.blocks.get_mut(pc)
    }

    pub fn blocks(&self) -> impl Iterator<Item = (Addr, &Block)> {
        self.blocks.iter()
    }

    /// Allocates a fresh variable, bumping `nv`. Used by
    /// [`crate::cir::global_dead_code::add_sentinel`] to mint the sentinel.
    pub fn fresh_var(&mut self) -> Var {
        let v = Var::new(self.nv as usize);
        self.nv += 1;
        v
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "; entry = {}", self.entry)?;
        for (pc, block) in self.blocks.iter() {
            writeln!(f, "{pc}{block}")?;
        }
        Ok(())
    }
}
