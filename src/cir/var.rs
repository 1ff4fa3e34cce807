// src/cir/var.rs
use cranelift_entity::entity_impl;

/// A variable in the closure IR: a dense index in `[0, nv)`.
///
/// Variables are globally unique within a [`crate::cir::Program`]; the total
/// count `nv` is queryable via [`crate::cir::Program::var_count`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(u32);
entity_impl!(Var, "v");

/// The address of a [`crate::cir::Block`] within a [`crate::cir::Program`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(u32);
entity_impl!(Addr, "pc");
