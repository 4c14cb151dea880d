// SPDX-License-Identifier: CC0-1.0

use itertools::Itertools;
use num_bigint::BigInt;
use tracing::{debug, trace};

use super::interpolate;
use crate::{Error, PointSet, ReconstructionResult, Share};

/// Reconstructs the secret from `shares` and reports the shares that disagree with it.
///
/// The first `k` shares (in ascending `x` order) form the candidate basis. Every share
/// is then checked by substituting it for the last basis element and interpolating
/// again: a share is consistent if the result equals the candidate secret.
///
/// If the candidate basis itself contains a corrupted share, the candidate secret is
/// wrong and good shares will be reported as bad. See `reconstruct_exhaustive`.
///
/// # Errors
/// * `Error::InvalidThreshold` if `k` is 0
/// * `Error::InsufficientShares` if there are fewer than `k` shares
/// * `Error::Inexact` if the candidate basis does not interpolate to an integer
pub fn reconstruct(shares: &PointSet, k: usize) -> Result<ReconstructionResult, Error> {
    let basis = candidate_basis(shares, k)?;

    let secret = interpolate(basis)?;
    debug!(%secret, k, n = shares.len(), "interpolated candidate basis");

    let bad_shares = find_inconsistent(shares, basis, &secret)?;
    debug!(bad = bad_shares.len(), "validated shares against candidate");

    Ok(ReconstructionResult::new(secret, bad_shares))
}

/// Identical to `reconstruct` except every k-subset of `shares` is tried as the
/// candidate basis, keeping the one that leaves the fewest inconsistent shares.
///
/// Bases are visited in lexicographic order and the first one wins on ties. Bases
/// that do not interpolate to an integer are skipped.
///
/// Tradeoffs:
/// - Recovers the secret when corrupted shares fall inside the first `k`, as long as
///   some basis made only of genuine shares exists
/// - Slower: O(C(n, k) * n * k^2)
///
/// # Errors
/// Same as `reconstruct`. `Error::Inexact` is returned only if every basis is inexact.
pub fn reconstruct_exhaustive(shares: &PointSet, k: usize) -> Result<ReconstructionResult, Error> {
    check_threshold(shares, k)?;

    let mut best: Option<ReconstructionResult> = None;
    let mut first_error = None;

    for basis in shares.iter().cloned().combinations(k) {
        let secret = match interpolate(&basis) {
            Ok(secret) => secret,
            Err(e @ Error::Inexact { .. }) => {
                trace!(error = %e, "skipping inexact basis");
                first_error.get_or_insert(e);
                continue;
            }
            Err(e) => return Err(e),
        };

        let bad_shares = find_inconsistent(shares, &basis, &secret)?;
        trace!(%secret, bad = bad_shares.len(), "evaluated candidate basis");

        if best
            .as_ref()
            .is_none_or(|b| bad_shares.len() < b.bad_shares().len())
        {
            best = Some(ReconstructionResult::new(secret, bad_shares));
        }

        if best.as_ref().is_some_and(|b| b.is_consistent()) {
            break;
        }
    }

    match (best, first_error) {
        (Some(result), _) => {
            debug!(secret = %result.secret(), bad = result.bad_shares().len(), "selected basis");
            Ok(result)
        }
        (None, Some(e)) => Err(e),
        (None, None) => Err(Error::InsufficientShares {
            required: k,
            available: shares.len(),
        }),
    }
}

fn check_threshold(shares: &PointSet, k: usize) -> Result<(), Error> {
    if k == 0 {
        return Err(Error::InvalidThreshold);
    }
    if shares.len() < k {
        return Err(Error::InsufficientShares {
            required: k,
            available: shares.len(),
        });
    }
    Ok(())
}

fn candidate_basis(shares: &PointSet, k: usize) -> Result<&[Share], Error> {
    check_threshold(shares, k)?;
    shares.first(k).ok_or(Error::InsufficientShares {
        required: k,
        available: shares.len(),
    })
}

// Returns the shares that do not agree with `secret`, in ascending `x` order
fn find_inconsistent(
    shares: &PointSet,
    basis: &[Share],
    secret: &BigInt,
) -> Result<Vec<Share>, Error> {
    let mut bad_shares = Vec::new();
    for share in shares {
        if !is_consistent(basis, share, secret)? {
            bad_shares.push(share.clone());
        }
    }
    Ok(bad_shares)
}

fn is_consistent(basis: &[Share], share: &Share, secret: &BigInt) -> Result<bool, Error> {
    // The trial set is the basis itself
    if basis.contains(share) {
        trace!(%share, "share is in the candidate basis");
        return Ok(true);
    }

    let mut trial = basis.to_vec();
    if let Some(last) = trial.last_mut() {
        *last = share.clone();
    }

    let consistent = match interpolate(&trial) {
        Ok(trial_secret) => trial_secret == *secret,
        // No integer polynomial passes through the trial set
        Err(Error::Inexact { .. }) => false,
        Err(e) => return Err(e),
    };
    trace!(%share, consistent, "checked share");

    Ok(consistent)
}
