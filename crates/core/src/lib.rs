//! # Timelock Hash Chain
//!
//! A sequential, non-parallelizable SHA-256 hash chain for time-lock
//! computations: given a 32-byte seed and an iteration count N, the result
//! is SHA-256 applied N times, each application's output feeding the next
//! application's input.
//!
//! Because iteration i+1 depends on iteration i's output, there is no
//! shortcut and no parallel strategy — obtaining the final digest requires
//! performing all N hash evaluations in order. That makes the chain usable
//! for proof-of-elapsed-work and verifiable-delay-style constructions.
//!
//! ## Components
//!
//! - [`hash_chain`] — the chain loop itself
//! - [`hex`] — the hex codec used to move between text and byte buffers
//! - [`HASH_SIZE`] — the digest size, shared by the chain and length checks
//!
//! ## Example
//!
//! ```rust
//! use timelock_core::{hash_chain, hex};
//!
//! let seed = hex::decode(
//!     "0000000000000000000000000000000000000000000000000000000000000000",
//! )
//! .unwrap();
//!
//! let digest = hash_chain(&seed, 1);
//! assert_eq!(
//!     hex::encode(&digest),
//!     "66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925",
//! );
//! ```
//!
//! ## Edge cases preserved from the original tool
//!
//! - `hash_chain(seed, 0)` performs one application, same as `n = 1`.
//! - `hex::decode` drops a trailing unpaired hex digit instead of erroring.
//!
//! Both are the literal contract of the existing tool, kept for behavioral
//! parity and documented where they live.

mod chain;
pub mod hex;
mod params;

pub use chain::{hash_chain, Digest};
pub use params::{HASH_SIZE, HEX_NONCE_LEN};
