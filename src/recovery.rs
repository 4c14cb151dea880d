// SPDX-License-Identifier: CC0-1.0

mod interpolate;
mod reconstruct;

pub use interpolate::interpolate;
pub use reconstruct::{reconstruct, reconstruct_exhaustive};
