use crate::cli::BondsArgs;
use crate::config;
use crate::error::{CliError, Result};
use molmeasure::core::bonds::BondList;
use molmeasure::core::io::traits::MolecularFile;
use molmeasure::core::io::xyz::XyzFile;
use molmeasure::core::models::Molecule;
use std::io::Write;
use tracing::info;

pub fn run(args: BondsArgs) -> Result<()> {
    let criteria = config::build_bond_criteria(&args)?;

    let (molecule, _) = XyzFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;
    info!(
        num_atoms = molecule.len(),
        min_bond = criteria.min_bond(),
        max_bond = criteria.max_bond(),
        "Loaded structure."
    );

    let bond_list = molecule.bond_list(&criteria);

    let stdout = std::io::stdout();
    let num_bonds = write_bond_table(&mut stdout.lock(), &molecule, &bond_list)?;

    info!(num_bonds, "Bond listing complete.");
    Ok(())
}

/// Writes one row per bonded pair, ordered by `(i, j)`, and returns the row count.
pub(crate) fn write_bond_table(
    out: &mut impl Write,
    molecule: &Molecule,
    bond_list: &BondList,
) -> Result<usize> {
    let mut pairs: Vec<_> = bond_list.iter().map(|(&pair, &d)| (pair, d)).collect();
    pairs.sort_unstable_by_key(|&(pair, _)| pair);

    let symbols = molecule.symbols();
    writeln!(out, "{:>6} {:>6}  {:<8}{:>12}", "i", "j", "pair", "distance")?;
    for &((i, j), distance) in &pairs {
        let pair = format!("{}-{}", symbols[i], symbols[j]);
        writeln!(out, "{:>6} {:>6}  {:<8}{:>12.6}", i, j, pair, distance)?;
    }

    Ok(pairs.len())
}
