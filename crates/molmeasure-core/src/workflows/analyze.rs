use crate::core::bonds::BondList;
use crate::core::geometry::calculate_angle;
use crate::core::io::traits::MolecularFile;
use crate::core::io::xyz::{XyzError, XyzFile};
use crate::core::models::molecule::Molecule;
use crate::workflows::config::AnalysisConfig;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Cannot analyze a molecule with no atoms")]
    EmptyMolecule,
    #[error("Failed to read structure: {0}")]
    Xyz(#[from] XyzError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Degrees,
    Radians,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondRecord {
    pub i: usize,
    pub j: usize,
    pub symbols: (String, String),
    pub distance: f64,
}

/// Angle `i-vertex-k` between two bonds sharing `vertex`, with `i < k`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngleRecord {
    pub i: usize,
    pub vertex: usize,
    pub k: usize,
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondSummary {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub num_atoms: usize,
    pub min_bond: f64,
    pub max_bond: f64,
    pub angle_unit: AngleUnit,
    pub summary: BondSummary,
    pub bonds: Vec<BondRecord>,
    pub angles: Vec<AngleRecord>,
}

/// Reads an XYZ file and analyzes the first frame.
pub fn analyze_file<P: AsRef<Path>>(
    path: P,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, AnalysisError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading XYZ structure.");
    let (molecule, metadata) = XyzFile::read_from_path(path)?;
    if !metadata.comment.is_empty() {
        debug!(comment = %metadata.comment, "Structure comment.");
    }
    run(&molecule, config)
}

/// Finds bonds in `molecule` and, if enabled, every angle between bonds that share an atom.
///
/// Bonds are ordered by `(i, j)` and angles by `(vertex, i, k)`. An angle whose arms have
/// zero length (coincident atoms inside a window starting at 0) is skipped with a warning.
#[instrument(skip_all, name = "analysis_workflow", fields(num_atoms = molecule.len()))]
pub fn run(molecule: &Molecule, config: &AnalysisConfig) -> Result<AnalysisReport, AnalysisError> {
    if molecule.is_empty() {
        return Err(AnalysisError::EmptyMolecule);
    }

    let bond_list = molecule.bond_list(&config.criteria);
    let bonds = sorted_bond_records(molecule, &bond_list);
    info!(num_bonds = bonds.len(), "Bond detection complete.");

    let angles = if config.include_angles {
        let angles = bond_angles(molecule, &bond_list, config.degrees);
        info!(num_angles = angles.len(), "Bond angle measurement complete.");
        angles
    } else {
        Vec::new()
    };

    Ok(AnalysisReport {
        num_atoms: molecule.len(),
        min_bond: config.criteria.min_bond(),
        max_bond: config.criteria.max_bond(),
        angle_unit: if config.degrees {
            AngleUnit::Degrees
        } else {
            AngleUnit::Radians
        },
        summary: summarize(&bonds),
        bonds,
        angles,
    })
}

fn sorted_bond_records(molecule: &Molecule, bond_list: &BondList) -> Vec<BondRecord> {
    let symbols = molecule.symbols();
    bond_list
        .iter()
        .sorted_unstable_by_key(|(pair, _)| **pair)
        .map(|(&(i, j), &distance)| BondRecord {
            i,
            j,
            symbols: (symbols[i].clone(), symbols[j].clone()),
            distance,
        })
        .collect()
}

fn bond_angles(molecule: &Molecule, bond_list: &BondList, degrees: bool) -> Vec<AngleRecord> {
    let mut neighbors: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for &(i, j) in bond_list.keys() {
        neighbors.entry(i).or_default().push(j);
        neighbors.entry(j).or_default().push(i);
    }

    let coords = molecule.coordinates();
    let mut angles = Vec::new();

    for (vertex, mut bonded) in neighbors {
        bonded.sort_unstable();
        for (i, k) in bonded.into_iter().tuple_combinations::<(usize, usize)>() {
            match calculate_angle(&coords[i], &coords[vertex], &coords[k], degrees) {
                Ok(angle) => angles.push(AngleRecord {
                    i,
                    vertex,
                    k,
                    angle,
                }),
                Err(e) => warn!(i, vertex, k, "Skipping angle: {}", e),
            }
        }
    }

    angles
}

fn summarize(bonds: &[BondRecord]) -> BondSummary {
    let distances = || bonds.iter().map(|b| b.distance);
    let count = bonds.len();
    let mean = (count > 0).then(|| distances().sum::<f64>() / count as f64);
    let min = distances().min_by(f64::total_cmp);
    let max = distances().max_by(f64::total_cmp);

    BondSummary {
        count,
        mean,
        min,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::config::AnalysisConfigBuilder;
    use nalgebra::Point3;
    use std::fs;
    use tempfile::tempdir;

    fn methane() -> Molecule {
        let d = 1.09 / 3f64.sqrt();
        Molecule::new(
            vec!["C", "H", "H", "H", "H"]
                .into_iter()
                .map(String::from)
                .collect(),
            vec![
                Point3::origin(),
                Point3::new(d, d, d),
                Point3::new(-d, -d, d),
                Point3::new(-d, d, -d),
                Point3::new(d, -d, -d),
            ],
        )
        .unwrap()
    }

    #[test]
    fn methane_has_four_bonds_and_six_tetrahedral_angles() {
        let report = run(&methane(), &AnalysisConfig::default()).unwrap();

        assert_eq!(report.num_atoms, 5);
        assert_eq!(report.summary.count, 4);
        assert_eq!(
            report.bonds.iter().map(|b| (b.i, b.j)).collect::<Vec<_>>(),
            vec![(0, 1), (0, 2), (0, 3), (0, 4)]
        );
        assert!(
            report
                .bonds
                .iter()
                .all(|b| b.symbols.0 == "C" && b.symbols.1 == "H")
        );
        assert!((report.summary.mean.unwrap() - 1.09).abs() < 1e-9);

        assert_eq!(report.angles.len(), 6);
        for angle in &report.angles {
            assert_eq!(angle.vertex, 0);
            assert!(angle.i < angle.k);
            assert!((angle.angle - 109.4712).abs() < 1e-3);
        }
        assert_eq!(report.angle_unit, AngleUnit::Degrees);
    }

    #[test]
    fn angles_can_be_disabled_and_reported_in_radians() {
        let config = AnalysisConfigBuilder::new()
            .include_angles(false)
            .degrees(false)
            .build()
            .unwrap();
        let report = run(&methane(), &config).unwrap();
        assert!(report.angles.is_empty());
        assert_eq!(report.angle_unit, AngleUnit::Radians);
    }

    #[test]
    fn molecule_without_bonds_has_empty_summary() {
        let config = AnalysisConfigBuilder::new().max_bond(0.5).build().unwrap();
        let report = run(&methane(), &config).unwrap();
        assert_eq!(report.summary.count, 0);
        assert_eq!(report.summary.mean, None);
        assert_eq!(report.summary.min, None);
        assert!(report.angles.is_empty());
    }

    #[test]
    fn coincident_atoms_skip_undefined_angles() {
        let mol = Molecule::new(
            vec!["C".into(), "C".into(), "H".into()],
            vec![
                Point3::origin(),
                Point3::origin(),
                Point3::new(1.0, 0.0, 0.0),
            ],
        )
        .unwrap();
        let report = run(&mol, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.summary.count, 3);
        assert_eq!(report.summary.min, Some(0.0));
        // Only the angle at atom 2 has two non-degenerate arms.
        assert_eq!(report.angles.len(), 1);
        assert_eq!(report.angles[0].vertex, 2);
    }

    #[test]
    fn empty_molecule_is_rejected() {
        let result = run(&Molecule::default(), &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::EmptyMolecule)));
    }

    #[test]
    fn analyze_file_reads_xyz_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("h2.xyz");
        fs::write(&path, "2\nhydrogen\nH 0.0 0.0 0.0\nH 0.0 0.0 0.74\n").unwrap();

        let report = analyze_file(&path, &AnalysisConfig::default()).unwrap();
        assert_eq!(report.summary.count, 1);
        assert!((report.bonds[0].distance - 0.74).abs() < 1e-12);
    }

    #[test]
    fn analyze_file_surfaces_read_errors() {
        let dir = tempdir().unwrap();
        let result = analyze_file(dir.path().join("missing.xyz"), &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::Xyz(XyzError::Io(_)))));
    }
}
