// SPDX-License-Identifier: CC0-1.0

use std::fmt;

use itertools::Itertools;
use num_bigint::BigInt;

use crate::Error;

/// A single point `(x, y)` on the secret polynomial.
/// `x` identifies the share and `y` is the polynomial evaluated at `x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    /// The x-coordinate (share identifier)
    pub x: BigInt,
    /// The y-coordinate (share value)
    pub y: BigInt,
}

impl Share {
    /// Creates a share from anything convertible into `BigInt`
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Share {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={} y={}", self.x, self.y)
    }
}

/// A set of shares sorted ascending by `x`, with no repeated `x`.
///
/// The order is stable, so selecting the first `k` shares is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSet {
    shares: Vec<Share>,
}

impl PointSet {
    /// Sorts `shares` by `x` and rejects duplicate x-coordinates
    pub fn new(mut shares: Vec<Share>) -> Result<Self, Error> {
        shares.sort_by(|a, b| a.x.cmp(&b.x));

        if let Some((a, _)) = shares.iter().tuple_windows().find(|(a, b)| a.x == b.x) {
            return Err(Error::DuplicateAbscissa { x: a.x.clone() });
        }

        Ok(PointSet { shares })
    }

    /// Returns the shares in ascending `x` order
    pub fn as_slice(&self) -> &[Share] {
        &self.shares
    }

    /// Returns an iterator over the shares in ascending `x` order
    pub fn iter(&self) -> std::slice::Iter<'_, Share> {
        self.shares.iter()
    }

    /// Returns the number of shares
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Returns true if there are no shares
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Returns the `k` shares with the smallest `x`, or `None` if there are fewer than `k`
    pub fn first(&self, k: usize) -> Option<&[Share]> {
        self.shares.get(..k)
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Share;
    type IntoIter = std::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.iter()
    }
}

/// The reconstructed secret together with the shares that disagree with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionResult {
    secret: BigInt,
    bad_shares: Vec<Share>,
}

impl ReconstructionResult {
    pub(crate) fn new(secret: BigInt, bad_shares: Vec<Share>) -> Self {
        ReconstructionResult { secret, bad_shares }
    }

    /// Returns the reconstructed secret
    pub fn secret(&self) -> &BigInt {
        &self.secret
    }

    /// Returns the shares inconsistent with the secret, in ascending `x` order
    pub fn bad_shares(&self) -> &[Share] {
        &self.bad_shares
    }

    /// Returns true if every share agreed with the secret
    pub fn is_consistent(&self) -> bool {
        self.bad_shares.is_empty()
    }

    /// Consumes the result, returning the secret and the bad shares
    pub fn into_parts(self) -> (BigInt, Vec<Share>) {
        (self.secret, self.bad_shares)
    }
}
