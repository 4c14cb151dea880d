// SPDX-License-Identifier: CC0-1.0

use num_bigint::BigInt;
use thiserror::Error;

/// Errors produced while interpolating or reconstructing a secret
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The threshold is zero
    #[error("Threshold k cannot be 0")]
    InvalidThreshold,

    /// Fewer shares than the threshold requires
    #[error("Not enough shares provided (need at least {required}, got {available})")]
    InsufficientShares {
        /// Shares required
        required: usize,
        /// Shares supplied
        available: usize,
    },

    /// Two shares with the same x-coordinate
    #[error("Duplicate x-coordinate: {x}")]
    DuplicateAbscissa {
        /// The repeated x-coordinate
        x: BigInt,
    },

    /// The interpolated value at zero is not an integer
    #[error("Interpolation is not exact: {numerator}/{denominator} is not an integer")]
    Inexact {
        /// Numerator of the reduced value at zero
        numerator: BigInt,
        /// Denominator of the reduced value at zero
        denominator: BigInt,
    },
}
