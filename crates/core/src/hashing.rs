//! SHA-256 hex digest for stored password credentials.
//!
//! The digest is deterministic and unsalted so it keeps matching the
//! digests already stored by deployed databases. Moving to a salted,
//! iterated scheme would invalidate every stored credential; see DESIGN.md
//! before changing this.

use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Digest a plaintext password for storage or credential matching.
pub fn password_digest(senha: &str) -> String {
    sha256_hex(senha.as_bytes())
}
