use crate::core::bonds::{BondCriteria, BondList, build_bond_list_with};
use crate::core::geometry::{GeometryError, calculate_angle, calculate_distance};
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoleculeError {
    #[error("Got {symbols} element symbols but {coordinates} coordinates")]
    LengthMismatch { symbols: usize, coordinates: usize },
    #[error("Atom index {index} is out of range for a molecule with {len} atoms")]
    AtomIndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// A set of atoms, each an element symbol paired with a Cartesian position.
///
/// Atoms are addressed by their zero-based position in the input, which is also
/// the index used in [`BondList`] keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Molecule {
    symbols: Vec<String>,
    coordinates: Vec<Point3<f64>>,
}

impl Molecule {
    /// Pairs element symbols with coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::LengthMismatch`] if the two sequences differ in length.
    pub fn new(symbols: Vec<String>, coordinates: Vec<Point3<f64>>) -> Result<Self, MoleculeError> {
        if symbols.len() != coordinates.len() {
            return Err(MoleculeError::LengthMismatch {
                symbols: symbols.len(),
                coordinates: coordinates.len(),
            });
        }
        Ok(Self {
            symbols,
            coordinates,
        })
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn coordinates(&self) -> &[Point3<f64>] {
        &self.coordinates
    }

    pub fn atoms(&self) -> impl Iterator<Item = (&str, &Point3<f64>)> {
        self.symbols
            .iter()
            .map(String::as_str)
            .zip(self.coordinates.iter())
    }

    pub fn bond_list(&self, criteria: &BondCriteria) -> BondList {
        build_bond_list_with(&self.coordinates, criteria)
    }

    pub fn distance(&self, i: usize, j: usize) -> Result<f64, MoleculeError> {
        Ok(calculate_distance(self.position(i)?, self.position(j)?))
    }

    /// Angle `i-vertex-k` measured at atom `vertex`.
    pub fn angle(
        &self,
        i: usize,
        vertex: usize,
        k: usize,
        degrees: bool,
    ) -> Result<f64, MoleculeError> {
        Ok(calculate_angle(
            self.position(i)?,
            self.position(vertex)?,
            self.position(k)?,
            degrees,
        )?)
    }

    fn position(&self, index: usize) -> Result<&Point3<f64>, MoleculeError> {
        self.coordinates
            .get(index)
            .ok_or(MoleculeError::AtomIndexOutOfRange {
                index,
                len: self.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Molecule {
        Molecule::new(
            vec!["O".into(), "H".into(), "H".into()],
            vec![
                Point3::new(0.0, 0.0, 0.1173),
                Point3::new(0.0, 0.7572, -0.4692),
                Point3::new(0.0, -0.7572, -0.4692),
            ],
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_mismatched_lengths() {
        let result = Molecule::new(vec!["C".into()], vec![]);
        assert_eq!(
            result,
            Err(MoleculeError::LengthMismatch {
                symbols: 1,
                coordinates: 0
            })
        );
    }

    #[test]
    fn atoms_iterates_symbols_with_positions() {
        let mol = water();
        let symbols: Vec<&str> = mol.atoms().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!["O", "H", "H"]);
        assert_eq!(mol.len(), 3);
        assert!(!mol.is_empty());
    }

    #[test]
    fn water_has_two_oh_bonds_with_default_criteria() {
        let bonds = water().bond_list(&BondCriteria::default());
        assert_eq!(bonds.len(), 2);
        assert!(bonds.contains_key(&(0, 1)));
        assert!(bonds.contains_key(&(0, 2)));
    }

    #[test]
    fn distance_and_angle_by_index() {
        let mol = water();
        let d = mol.distance(0, 1).unwrap();
        assert!((d - 0.9578).abs() < 1e-3);
        let angle = mol.angle(1, 0, 2, true).unwrap();
        assert!((angle - 104.5).abs() < 0.1);
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let mol = water();
        assert_eq!(
            mol.distance(0, 3),
            Err(MoleculeError::AtomIndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn angle_on_coincident_atoms_surfaces_geometry_error() {
        let mol = Molecule::new(
            vec!["C".into(), "C".into(), "C".into()],
            vec![Point3::origin(), Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
        )
        .unwrap();
        assert!(matches!(
            mol.angle(0, 1, 2, false),
            Err(MoleculeError::Geometry(GeometryError::ZeroLengthVector { .. }))
        ));
    }
}
