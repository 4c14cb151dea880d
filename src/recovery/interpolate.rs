// SPDX-License-Identifier: CC0-1.0

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{Error, Share};

/// Evaluates the unique polynomial of degree `points.len() - 1` through `points` at x = 0.
///
/// Lagrange terms `y_i * prod(-x_j) / prod(x_i - x_j)` are summed as a single
/// running fraction, reduced after every term. The only division happens at the
/// end and must be exact.
///
/// # Errors
/// * `Error::InsufficientShares` if `points` is empty
/// * `Error::DuplicateAbscissa` if two points share an x-coordinate
/// * `Error::Inexact` if the value at zero is not an integer
pub fn interpolate(points: &[Share]) -> Result<BigInt, Error> {
    if points.is_empty() {
        return Err(Error::InsufficientShares {
            required: 1,
            available: 0,
        });
    }

    let mut sum_num = BigInt::zero();
    let mut sum_den = BigInt::one();

    for (i, share_i) in points.iter().enumerate() {
        let mut num = share_i.y.clone();
        let mut den = BigInt::one();

        for (j, share_j) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if share_i.x == share_j.x {
                return Err(Error::DuplicateAbscissa {
                    x: share_i.x.clone(),
                });
            }
            num *= -&share_j.x; // (0 - x_j)
            den *= &share_i.x - &share_j.x; // (x_i - x_j)
        }

        // sum_num/sum_den + num/den
        sum_num = sum_num * &den + num * &sum_den;
        sum_den *= den;

        // sum_den is never zero, so neither is the gcd
        let gcd = sum_num.gcd(&sum_den);
        if !gcd.is_one() {
            sum_num /= &gcd;
            sum_den /= &gcd;
        }
    }

    if sum_den.is_negative() {
        sum_num = -sum_num;
        sum_den = -sum_den;
    }

    let (quotient, remainder) = sum_num.div_rem(&sum_den);
    if !remainder.is_zero() {
        return Err(Error::Inexact {
            numerator: sum_num,
            denominator: sum_den,
        });
    }

    Ok(quotient)
}
