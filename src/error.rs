use std::collections::TryReserveError;

/// The one fallible outcome this crate's public API exposes. Malformed
/// construction parameters are contract violations and panic instead
/// (SPEC_FULL.md §7); this type only covers storage growth failure.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to reserve storage for additional particles: {0}")]
    ResourceExhausted(#[from] TryReserveError),
}
