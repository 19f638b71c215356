//! Sequential SHA-256 hash chain
//!
//! Each iteration hashes the previous iteration's 32-byte digest, so
//! iteration i+1 cannot start before iteration i has finished. That strict
//! data dependency is the point of the construction: the only way to reach
//! the final digest is to perform every application in order, which makes
//! the chain usable as a proof of elapsed sequential work.

use sha2::{Digest as _, Sha256};

use crate::params::HASH_SIZE;

/// A SHA-256 output, and the running state of the chain
pub type Digest = [u8; HASH_SIZE];

/// Run the hash chain: `iterations` sequential SHA-256 applications.
///
/// The first application hashes `seed` in full; every later application
/// hashes the previous 32-byte digest, overwriting it in place. No seed
/// bytes are consulted after the first step, and no per-iteration
/// allocation occurs.
///
/// One boundary contract is inherited from the original tool and preserved
/// deliberately: `iterations == 0` and `iterations == 1` both perform
/// exactly one hash application. In general the number of applications is
/// `max(iterations, 1)`.
///
/// Seed length is the caller's concern; the chain forwards whatever buffer
/// it is given to the first application.
///
/// # Example
///
/// ```rust
/// use timelock_core::hash_chain;
///
/// let seed = [0u8; 32];
/// let once = hash_chain(&seed, 1);
/// let thrice = hash_chain(&seed, 3);
///
/// // The chain is strictly recursive on digests after the first step.
/// assert_eq!(thrice, hash_chain(&hash_chain(&seed, 2), 1));
/// assert_eq!(once, hash_chain(&seed, 0));
/// ```
pub fn hash_chain(seed: &[u8], iterations: u64) -> Digest {
    // One application into the digest, then the rest on the digest.
    let mut digest: Digest = Sha256::digest(seed).into();
    for _ in 1..iterations {
        digest = Sha256::digest(digest).into();
    }
    digest
}
