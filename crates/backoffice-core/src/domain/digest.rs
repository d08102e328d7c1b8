//! SHA-256 digests over run results.
//!
//! Every domain type serializes its fields in declaration order, so the
//! JSON encoding of a [`RunResult`] is already canonical: structurally
//! equal results produce byte-identical JSON and therefore equal digests.

use sha2::{Digest, Sha256};

use super::error::Result;
use super::run::RunResult;

/// Compute the SHA-256 hex digest of a serialized run result.
///
/// Two structurally identical results always yield the same digest,
/// which is how the idempotence of a run is checked and reported.
pub fn run_digest(result: &RunResult) -> Result<String> {
    let bytes = serde_json::to_vec(result)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
