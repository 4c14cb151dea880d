// SPDX-License-Identifier: CC0-1.0

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{PointSet, Share};

/// A decoded share file: the declared share count, the threshold, and the shares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFile {
    /// Total number of shares declared by the file
    pub n: usize,
    /// Threshold required for reconstruction
    pub k: usize,
    /// The decoded shares, sorted by `x`
    pub shares: PointSet,
}

#[derive(Deserialize)]
struct RawFile {
    keys: RawKeys,
    #[serde(flatten)]
    shares: BTreeMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct RawKeys {
    n: usize,
    k: usize,
}

#[derive(Deserialize)]
struct RawShare {
    base: RawBase,
    value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBase {
    Number(u32),
    Text(String),
}

impl RawBase {
    fn to_base(&self) -> Result<u32> {
        match self {
            RawBase::Number(base) => Ok(*base),
            RawBase::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| anyhow!("Base is not a number: {:?}", text)),
        }
    }
}

/// Reads and decodes a share file
pub fn load_share_file(path: impl AsRef<Path>) -> Result<ShareFile> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read share file {}", path.display()))?;

    parse_share_file(&json).with_context(|| format!("Failed to parse share file {}", path.display()))
}

/// Decodes a share file of the form
///
/// ```json
/// {
///   "keys": { "n": 4, "k": 3 },
///   "1": { "base": "10", "value": "4" },
///   "2": { "base": "2", "value": "111" }
/// }
/// ```
///
/// Every key other than `keys` is the decimal x-coordinate of a share, and `value`
/// is its y-coordinate written in `base`.
pub fn parse_share_file(json: &str) -> Result<ShareFile> {
    let raw: RawFile = serde_json::from_str(json).context("Invalid share file")?;

    let mut shares = Vec::with_capacity(raw.shares.len());
    for (key, value) in raw.shares {
        let share = decode_share(&key, value).with_context(|| format!("Invalid share {}", key))?;
        debug!(%share, "decoded share");
        shares.push(share);
    }

    let shares = PointSet::new(shares)?;

    if raw.keys.n != shares.len() {
        warn!(
            declared = raw.keys.n,
            found = shares.len(),
            "share count does not match keys.n"
        );
    }

    Ok(ShareFile {
        n: raw.keys.n,
        k: raw.keys.k,
        shares,
    })
}

fn decode_share(key: &str, value: serde_json::Value) -> Result<Share> {
    let x = radix_digits::decode(10, key).context("Share key is not an integer")?;

    let raw: RawShare = serde_json::from_value(value)?;
    let base = raw.base.to_base()?;
    let y = radix_digits::decode(base, &raw.value)?;

    Ok(Share { x, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, reconstruct};
    use num_bigint::BigInt;

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn test_parse_sample() {
        let file = parse_share_file(SAMPLE).unwrap();

        assert_eq!(file.n, 4);
        assert_eq!(file.k, 3);
        assert_eq!(
            file.shares.as_slice(),
            &[
                Share::new(1, 4),
                Share::new(2, 7),
                Share::new(3, 12),
                Share::new(6, 39),
            ]
        );

        let result = reconstruct(&file.shares, file.k).unwrap();
        assert_eq!(result.secret(), &BigInt::from(3));
        assert!(result.is_consistent());
    }

    #[test]
    fn test_parse_sorts_numerically() {
        let json = r#"{
            "keys": { "n": 3, "k": 2 },
            "10": { "base": 10, "value": "35" },
            "2": { "base": 16, "value": "b" },
            "1": { "base": "8", "value": "10" }
        }"#;

        let file = parse_share_file(json).unwrap();
        assert_eq!(
            file.shares.as_slice(),
            &[Share::new(1, 8), Share::new(2, 11), Share::new(10, 35)]
        );
    }

    #[test]
    fn test_parse_count_mismatch_is_not_fatal() {
        let json = r#"{
            "keys": { "n": 5, "k": 1 },
            "1": { "base": "10", "value": "4" }
        }"#;

        let file = parse_share_file(json).unwrap();
        assert_eq!(file.n, 5);
        assert_eq!(file.shares.len(), 1);
    }

    #[test]
    fn test_parse_invalid_inputs() {
        let cases = [
            ("not json", "Invalid share file"),
            (r#"{ "1": { "base": "10", "value": "4" } }"#, "Invalid share file"),
            (
                r#"{ "keys": { "n": 1, "k": 1 }, "a": { "base": "10", "value": "4" } }"#,
                "Invalid share a",
            ),
            (
                r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "ten", "value": "4" } }"#,
                "Invalid share 1",
            ),
            (
                r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "2", "value": "12" } }"#,
                "Invalid share 1",
            ),
            (
                r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "40", "value": "1" } }"#,
                "Invalid share 1",
            ),
            (
                r#"{ "keys": { "n": 1, "k": 1 }, "1": { "value": "1" } }"#,
                "Invalid share 1",
            ),
        ];

        for (json, expected) in cases {
            let err = parse_share_file(json).unwrap_err();
            assert!(
                err.to_string().contains(expected),
                "{:?} gave {:?}",
                json,
                err
            );
        }
    }

    #[test]
    fn test_parse_duplicate_x() {
        // "01" and "1" are distinct keys but the same x-coordinate
        let json = r#"{
            "keys": { "n": 2, "k": 1 },
            "1": { "base": "10", "value": "4" },
            "01": { "base": "10", "value": "5" }
        }"#;

        let err = parse_share_file(json).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::DuplicateAbscissa {
                x: BigInt::from(1)
            })
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_share_file("/nonexistent/shares.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read share file"));
    }
}
