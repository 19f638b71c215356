//! Timelock CLI
//!
//! A command-line tool that runs a sequential SHA-256 hash chain:
//!
//! ```text
//! timelock NONCE N
//! ```
//!
//! `NONCE` is a hex-encoded 32-byte seed; `N` is the number of chained
//! hash applications. The final digest is printed to stdout as lowercase
//! hex. All validation happens before any hashing starts, and every error
//! is terminal: report on stderr, exit non-zero, no partial output.

use anyhow::{anyhow, bail, Result};
use clap::Parser;

use timelock_core::{hash_chain, hex, HASH_SIZE, HEX_NONCE_LEN};

#[derive(Parser)]
#[command(name = "timelock")]
#[command(version = "0.1.0")]
#[command(about = "Sequential SHA-256 hash chain for time-lock computations")]
struct Cli {
    /// Hex-encoded 32-byte seed value (64 hex characters)
    nonce: String,

    /// Number of chained hash applications (0 and 1 both hash once)
    iterations: u64,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(digest) => println!("{}", digest),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Validate the nonce, run the chain, and return the hex-encoded digest.
///
/// An empty decode result is reported as a bad nonce rather than a bad
/// size, matching the original tool's diagnostics.
fn run(cli: &Cli) -> Result<String> {
    let seed = hex::decode(&cli.nonce).map_err(|e| anyhow!("bad NONCE provided ({})", e))?;

    if seed.is_empty() {
        bail!("bad NONCE provided (empty hex string)");
    }
    if seed.len() != HASH_SIZE {
        bail!(
            "bad size for NONCE: got {} bytes, should be {} bytes ({} hex characters)",
            seed.len(),
            HASH_SIZE,
            HEX_NONCE_LEN
        );
    }

    Ok(hex::encode(&hash_chain(&seed, cli.iterations)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(nonce: &str, iterations: u64) -> Cli {
        Cli {
            nonce: nonce.to_string(),
            iterations,
        }
    }

    #[test]
    fn test_zero_seed_one_iteration() {
        let digest = run(&cli(&"00".repeat(32), 1)).unwrap();
        assert_eq!(
            digest,
            "66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925"
        );
    }

    #[test]
    fn test_zero_and_one_iterations_agree() {
        let nonce = "ab".repeat(32);
        assert_eq!(run(&cli(&nonce, 0)).unwrap(), run(&cli(&nonce, 1)).unwrap());
    }

    #[test]
    fn test_nonce_with_surrounding_whitespace() {
        let nonce = format!("  {}\n", "00".repeat(32));
        assert!(run(&cli(&nonce, 1)).is_ok());
    }

    #[test]
    fn test_wrong_length_nonce_is_size_error() {
        // 31 bytes (62 hex characters)
        let err = run(&cli(&"00".repeat(31), 5)).unwrap_err();
        assert!(err.to_string().contains("bad size for NONCE"));
    }

    #[test]
    fn test_non_hex_nonce_is_decode_error() {
        let err = run(&cli(&"zz".repeat(32), 5)).unwrap_err();
        assert!(err.to_string().contains("bad NONCE provided"));
    }

    #[test]
    fn test_empty_nonce_is_decode_error() {
        let err = run(&cli("", 5)).unwrap_err();
        assert!(err.to_string().contains("bad NONCE provided"));
    }

    #[test]
    fn test_non_decimal_iterations_rejected_by_parser() {
        let nonce = "00".repeat(32);
        assert!(Cli::try_parse_from(["timelock", &nonce, "abc"]).is_err());
        assert!(Cli::try_parse_from(["timelock", &nonce, "-1"]).is_err());
    }

    #[test]
    fn test_wrong_argument_count_rejected_by_parser() {
        assert!(Cli::try_parse_from(["timelock"]).is_err());
        assert!(Cli::try_parse_from(["timelock", "00"]).is_err());
        assert!(Cli::try_parse_from(["timelock", "00", "1", "extra"]).is_err());
    }

    #[test]
    fn test_parser_accepts_two_positionals() {
        let parsed = Cli::try_parse_from(["timelock", "deadbeef", "42"]).unwrap();
        assert_eq!(parsed.nonce, "deadbeef");
        assert_eq!(parsed.iterations, 42);
    }
}
