//! Hash-chain parameters
//!
//! The digest size is the single source of truth shared by the chain loop
//! and the nonce length validation in the CLI driver.

/// SHA-256 output size in bytes
pub const HASH_SIZE: usize = 32;

/// Hex characters in a well-formed nonce (two per seed byte)
pub const HEX_NONCE_LEN: usize = HASH_SIZE * 2;
