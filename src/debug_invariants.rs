//! Post-mutation invariant checks.
//!
//! Every mutating mesh operation ends with [`debug_invariants!`], which
//! re-validates index bounds, cached counts, and the reserved `all` set. The
//! check runs in debug builds and whenever the `check-invariants` or
//! `strict-invariants` feature is enabled; otherwise it compiles away.

use crate::mesh_error::MeshError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation encountered.
    fn validate_invariants(&self) -> Result<(), MeshError>;

    /// Panic with the name of the finished `operation` if an invariant is broken.
    fn debug_assert_invariants(&self, operation: &str) {
        #[cfg(any(
            debug_assertions,
            feature = "strict-invariants",
            feature = "check-invariants"
        ))]
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] after {operation}: {e}");
        }
        #[cfg(not(any(
            debug_assertions,
            feature = "strict-invariants",
            feature = "check-invariants"
        )))]
        let _ = operation;
    }
}

/// Re-validate a structure after the named operation.
#[macro_export]
macro_rules! debug_invariants {
    ($target:expr, $operation:literal) => {
        $crate::debug_invariants::DebugInvariants::debug_assert_invariants(&$target, $operation)
    };
}
