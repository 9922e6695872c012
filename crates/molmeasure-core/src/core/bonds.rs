use super::geometry::calculate_distance;
use nalgebra::Point3;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[cfg(not(feature = "parallel"))]
use itertools::Itertools;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const DEFAULT_MIN_BOND: f64 = 0.0;
pub const DEFAULT_MAX_BOND: f64 = 1.5;

/// Atom-index pairs `(i, j)` with `i < j`, mapped to their separation in Angstroms.
pub type BondList = HashMap<(usize, usize), f64>;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BondError {
    #[error("Invalid bond bounds (min_bond = {min_bond}, max_bond = {max_bond}): {reason}")]
    InvalidBounds {
        min_bond: f64,
        max_bond: f64,
        reason: &'static str,
    },
}

/// Distance window that decides whether two atoms are bonded.
///
/// A `BondCriteria` can only be obtained through [`BondCriteria::new`] (or
/// [`Default`]), so holding one guarantees `0 <= min_bond <= max_bond`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondCriteria {
    min_bond: f64,
    max_bond: f64,
}

impl BondCriteria {
    /// Validates and creates a new bond window.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidBounds`] if either bound is NaN, `min_bond` is
    /// negative, or `min_bond` exceeds `max_bond`.
    pub fn new(min_bond: f64, max_bond: f64) -> Result<Self, BondError> {
        let invalid = |reason| BondError::InvalidBounds {
            min_bond,
            max_bond,
            reason,
        };

        if min_bond.is_nan() || max_bond.is_nan() {
            return Err(invalid("bounds must be numbers"));
        }
        if min_bond < 0.0 {
            return Err(invalid("minimum bond distance cannot be negative"));
        }
        if min_bond > max_bond {
            return Err(invalid(
                "minimum bond distance cannot exceed the maximum bond distance",
            ));
        }
        Ok(Self { min_bond, max_bond })
    }

    pub fn min_bond(&self) -> f64 {
        self.min_bond
    }

    pub fn max_bond(&self) -> f64 {
        self.max_bond
    }

    /// Whether a separation falls inside the closed window `[min_bond, max_bond]`.
    #[inline]
    pub fn accepts(&self, distance: f64) -> bool {
        distance >= self.min_bond && distance <= self.max_bond
    }
}

impl Default for BondCriteria {
    fn default() -> Self {
        Self {
            min_bond: DEFAULT_MIN_BOND,
            max_bond: DEFAULT_MAX_BOND,
        }
    }
}

/// Builds the list of bonded pairs in a coordinate set.
///
/// Every unordered pair `(i, j)`, `i < j`, whose distance lies in
/// `[min_bond, max_bond]` is included, keyed by its indices.
///
/// # Errors
///
/// Returns [`BondError::InvalidBounds`] when `min_bond < 0` or `min_bond > max_bond`.
pub fn build_bond_list(
    coordinates: &[Point3<f64>],
    max_bond: f64,
    min_bond: f64,
) -> Result<BondList, BondError> {
    let criteria = BondCriteria::new(min_bond, max_bond)?;
    Ok(build_bond_list_with(coordinates, &criteria))
}

/// Same as [`build_bond_list`], with the bounds already validated.
pub fn build_bond_list_with(coordinates: &[Point3<f64>], criteria: &BondCriteria) -> BondList {
    #[cfg(not(feature = "parallel"))]
    let bonds: BondList = (0..coordinates.len())
        .tuple_combinations::<(usize, usize)>()
        .filter_map(|(i, j)| bonded_distance(coordinates, criteria, i, j))
        .collect();

    #[cfg(feature = "parallel")]
    let bonds: BondList = (0..coordinates.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            ((i + 1)..coordinates.len())
                .filter_map(move |j| bonded_distance(coordinates, criteria, i, j))
        })
        .collect();

    debug!(
        num_atoms = coordinates.len(),
        num_bonds = bonds.len(),
        min_bond = criteria.min_bond,
        max_bond = criteria.max_bond,
        "Built bond list."
    );

    bonds
}

#[inline]
fn bonded_distance(
    coordinates: &[Point3<f64>],
    criteria: &BondCriteria,
    i: usize,
    j: usize,
) -> Option<((usize, usize), f64)> {
    let distance = calculate_distance(&coordinates[i], &coordinates[j]);
    criteria.accepts(distance).then_some(((i, j), distance))
}
