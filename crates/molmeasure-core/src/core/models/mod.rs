pub mod molecule;

pub use molecule::{Molecule, MoleculeError};
