// SPDX-License-Identifier: CC0-1.0

//! # Shamir Audit
//!
//! Reconstructs a secret split with Shamir's threshold scheme over the integers, and
//! identifies shares that are inconsistent with the reconstructed polynomial.
//!
//! ## Overview
//!
//! A secret `s` is hidden as the constant term of a polynomial `P` of degree `k - 1`
//! with integer coefficients. Each share is a point `(x, P(x))`. Any `k` shares
//! determine `P`, and therefore `s = P(0)`.
//!
//! This library provides:
//!
//! 1. **Exact Interpolation**: Lagrange interpolation at zero over arbitrary-precision
//!    integers. Terms are accumulated as a single fraction and divided once, so a
//!    result that is not an integer is reported rather than silently truncated
//! 2. **Bad-Share Detection**: every share is checked against the polynomial implied
//!    by a candidate basis of `k` shares, and the disagreeing shares are reported
//! 3. **Share Files**: decoding of JSON share files whose values are written in
//!    arbitrary bases
//!
//! ## Usage Example
//!
//! ```rust
//! use num_bigint::BigInt;
//! use shamir_audit::{PointSet, Share, reconstruct};
//!
//! // P(x) = 5 + 3x, with the share at x = 3 corrupted
//! let shares = PointSet::new(vec![
//!     Share::new(1, 8),
//!     Share::new(2, 11),
//!     Share::new(3, 99),
//! ]).unwrap();
//!
//! let result = reconstruct(&shares, 2).unwrap();
//! assert_eq!(result.secret(), &BigInt::from(5));
//! assert_eq!(result.bad_shares(), &[Share::new(3, 99)]);
//! ```
//!
//! ## Limitations
//!
//! `reconstruct` trusts the first `k` shares (by ascending `x`). If one of them is
//! corrupted, the secret is wrong and genuine shares are reported as bad.
//! `reconstruct_exhaustive` tries every basis of `k` shares instead, at a
//! combinatorial cost.
//!

// Coding conventions
#![deny(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]

pub use num_bigint;

mod error;
mod input;
mod recovery;
mod share;

pub use error::Error;
pub use input::{ShareFile, load_share_file, parse_share_file};
pub use recovery::{interpolate, reconstruct, reconstruct_exhaustive};
pub use share::{PointSet, ReconstructionResult, Share};

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_integration() {
        let json = r#"{
            "keys": { "n": 5, "k": 3 },
            "1": { "base": "10", "value": "10" },
            "2": { "base": "16", "value": "f" },
            "3": { "base": "2", "value": "10110" },
            "4": { "base": "36", "value": "v" },
            "5": { "base": "10", "value": "43" }
        }"#;

        // P(x) = 7 + 2x + x^2, share 5 should be 42
        let file = parse_share_file(json).unwrap();
        let result = reconstruct(&file.shares, file.k).unwrap();

        assert_eq!(result.secret(), &BigInt::from(7));
        assert_eq!(result.bad_shares(), &[Share::new(5, 43)]);
        assert_eq!(
            reconstruct_exhaustive(&file.shares, file.k).unwrap(),
            result
        );

        let (secret, bad_shares) = result.into_parts();
        assert_eq!(secret.to_str_radix(16), "7");
        assert_eq!(bad_shares.len(), 1);
    }
}
