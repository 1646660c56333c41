//! Engine error type.
//!
//! The refinement pipeline recovers locally from almost everything:
//! duplicate declarations resolve last-write-wins, unresolvable pattern
//! tokens are dropped, and an empty refinement result is a valid outcome.
//! The single raised error is combinatorial blow-up in the generator, and
//! it is scoped to the one abstract UCCA being refined -- a batch caller
//! records it and continues with the remaining UCCAs.

use serde::Serialize;

/// All errors the refinement engine can raise.
#[derive(Debug, Clone, Serialize, thiserror::Error, PartialEq, Eq)]
pub enum RefineError {
    /// Cross-product generation would exceed the configured candidate
    /// limit for one abstract UCCA.
    #[error("combination limit exceeded for abstract UCCA {abstract_ucca_id}: more than {limit} candidates")]
    CombinationLimitExceeded {
        abstract_ucca_id: String,
        limit: usize,
    },
}
