// src/cir/error.rs
use super::var::Addr;
use thiserror::Error;

/// Construction-time shape errors for a hand-built [`crate::cir::Program`].
///
/// The pass itself never returns this: per the spec's error taxonomy, a
/// malformed continuation or arity mismatch encountered *during analysis*
/// is tolerated, not rejected (see `global_dead_code` module docs). This
/// type guards only the construction boundary — building a `Program` from
/// scratch (tests, or a future textual `cir` front-end).
#[derive(Debug, Error)]
pub enum CirError {
    #[error("program has no blocks")]
    EmptyProgram,

    #[error("entry address {0} does not index any block")]
    InvalidEntry(Addr),
}
